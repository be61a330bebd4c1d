//! # centerline
//!
//! Center plain-text documents in the terminal.
//!
//! A document is read from a file or stream, split into paragraphs and lines,
//! and written back with each line padded so that it sits in the middle of
//! the output. Lines are measured by display width, so multi-byte UTF-8 and
//! wide East Asian characters center correctly.
//!
//! ## Quick Start
//!
//! ```
//! use centerline::{parse_bytes, render};
//!
//! fn main() -> centerline::Result<()> {
//!     let doc = parse_bytes(b"hi\n\nworld\n")?;
//!
//!     let options = render::RenderOptions::new().with_columns(20);
//!     let centered = render::to_centered(&doc, &options)?;
//!     assert_eq!(centered, b"         hi\n\n       world\n");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - [`input`]: read all bytes from a path or stream
//! - [`parser`]: bytes to a [`Document`] of paragraphs and lines
//! - [`width`]: display width of a line
//! - [`terminal`]: output column count, or 80 when unknown
//! - [`render`]: centered output, streaming layout, JSON

pub mod error;
pub mod input;
pub mod model;
pub mod parser;
pub mod render;
pub mod terminal;
pub mod width;

// Re-export commonly used types
pub use error::{Error, Result};
pub use input::{read_file, read_stream, Input};
pub use model::{Document, Line, Paragraph};
pub use parser::TextParser;
pub use render::{Columns, JsonFormat, RenderOptions, RenderStats};
pub use terminal::{terminal_columns, FALLBACK_COLUMNS};
pub use width::{code_point_width, display_width};

use std::io::{Read, Write};
use std::path::Path;

/// Parse a text document from bytes.
///
/// # Example
///
/// ```
/// use centerline::parse_bytes;
///
/// let doc = parse_bytes(b"a\nb\n\nc\n").unwrap();
/// assert_eq!(doc.paragraph_count(), 2);
/// assert_eq!(doc.line_count(), 3);
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    TextParser::new(data).parse()
}

/// Read and parse a text file.
///
/// # Example
///
/// ```no_run
/// use centerline::parse_file;
///
/// let doc = parse_file("poem.txt").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let data = read_file(path)?;
    parse_bytes(&data)
}

/// Read a stream to its end and parse it.
///
/// # Example
///
/// ```no_run
/// use centerline::parse_reader;
///
/// let doc = parse_reader(std::io::stdin().lock()).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let data = read_stream(reader)?;
    parse_bytes(&data)
}

/// Center a text file against the current terminal width.
///
/// # Example
///
/// ```no_run
/// use centerline::center_file;
///
/// let centered = center_file("poem.txt").unwrap();
/// std::io::Write::write_all(&mut std::io::stdout(), &centered).unwrap();
/// ```
pub fn center_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let doc = parse_file(path)?;
    render::to_centered(&doc, &RenderOptions::default())
}

/// Builder for loading and centering documents.
///
/// # Example
///
/// ```
/// use centerline::Centerline;
///
/// let centered = Centerline::new()
///     .with_columns(20)
///     .parse_bytes("日本\n".as_bytes())?
///     .to_centered()?;
/// assert_eq!(centered, "        日本\n".as_bytes());
/// # Ok::<(), centerline::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Centerline {
    render_options: RenderOptions,
}

impl Centerline {
    /// Create a new builder that centers against the terminal width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Center against a fixed column count.
    pub fn with_columns(mut self, columns: u16) -> Self {
        self.render_options = self.render_options.with_columns(columns);
        self
    }

    /// Center against the width source in `columns`.
    pub fn with_column_source(mut self, columns: Columns) -> Self {
        self.render_options.columns = columns;
        self
    }

    /// Replace the render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Load and parse `input`.
    pub fn parse_input(self, input: &Input) -> Result<CenteredDocument> {
        let data = input.read()?;
        log::debug!("loaded {} bytes from {}", data.len(), input);
        self.parse_bytes(&data)
    }

    /// Read and parse a file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<CenteredDocument> {
        let data = read_file(path)?;
        self.parse_bytes(&data)
    }

    /// Parse a document from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<CenteredDocument> {
        let document = parse_bytes(data)?;
        Ok(CenteredDocument {
            document,
            render_options: self.render_options,
        })
    }

    /// Read a stream to its end and parse it.
    pub fn parse_reader<R: Read>(self, reader: R) -> Result<CenteredDocument> {
        let data = read_stream(reader)?;
        self.parse_bytes(&data)
    }
}

/// A parsed document together with the options to render it.
#[derive(Debug, Clone)]
pub struct CenteredDocument {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl CenteredDocument {
    /// Write the centered document to `out`.
    pub fn render_to<W: Write>(&self, out: &mut W) -> Result<RenderStats> {
        render::render(&self.document, out, &self.render_options)
    }

    /// Render the centered document into memory.
    pub fn to_centered(&self) -> Result<Vec<u8>> {
        render::to_centered(&self.document, &self.render_options)
    }

    /// Serialize the parsed document model as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Get the render options.
    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }
}
