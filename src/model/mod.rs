//! Document model types.
//!
//! A [`Document`] owns its [`Paragraph`]s, and each paragraph owns its
//! [`Line`]s. The model is produced once by the parser and read by the
//! renderer; nothing mutates it in between.

mod document;
mod paragraph;

pub use document::Document;
pub use paragraph::{Line, Paragraph};
