//! Document-level types.

use serde::Serialize;

use super::{Line, Paragraph};

/// A parsed text document: paragraphs in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Paragraphs in the document
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
        }
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Paragraphs in source order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Get the number of paragraphs in the document.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Get the total number of lines across all paragraphs.
    pub fn line_count(&self) -> usize {
        self.paragraphs.iter().map(Paragraph::line_count).sum()
    }

    /// Check if the document has any paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Iterate over the paragraphs in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Paragraph> {
        self.paragraphs.iter()
    }

    /// Iterate over every line of the document in order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.paragraphs.iter().flat_map(|p| p.lines.iter())
    }

    /// Canonical byte form: lines joined by `\n`, paragraphs by `\n\n`.
    ///
    /// For a parsed document this equals the input with leading newlines and
    /// trailing newlines removed, and every run of blank lines between
    /// paragraphs collapsed to exactly one.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for (i, para) in self.paragraphs.iter().enumerate() {
            if i > 0 {
                out.extend_from_slice(b"\n\n");
            }
            para.write_bytes(&mut out);
        }
        out
    }
}
