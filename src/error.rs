//! Error types for centerline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for centerline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, parsing or rendering a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file could not be opened, sized or read.
    #[error("cannot read {}: {source}", .path.display())]
    Open {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Doubling the input buffer capacity overflowed `usize`.
    #[error("input buffer capacity overflow")]
    CapacityOverflow,

    /// An allocation failed while growing a buffer or building the document.
    #[error("out of memory while {0}")]
    ResourceExhausted(String),

    /// A column count of zero was requested.
    #[error("invalid terminal width: {0} (must be at least 1)")]
    InvalidWidth(u16),

    /// Error during rendering (centered text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    pub(crate) fn exhausted(what: impl Into<String>) -> Self {
        Error::ResourceExhausted(what.into())
    }
}
