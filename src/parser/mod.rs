//! Text parsing module.
//!
//! Turns a raw byte buffer into a [`Document`](crate::model::Document) of
//! paragraphs and lines.

mod text_parser;

pub use text_parser::{ParagraphSlices, TextParser};
