//! Streaming layout of a document against a fixed column count.
//!
//! [`Layout`] walks a document and yields one event per output line, so the
//! writer never needs the whole rendered text in memory.
//!
//! # Example
//!
//! ```
//! use centerline::parse_bytes;
//! use centerline::render::{Layout, LayoutEvent};
//!
//! let doc = parse_bytes(b"hi\n\nworld\n").unwrap();
//! let pads: Vec<usize> = Layout::new(&doc, 20)
//!     .filter_map(|event| match event {
//!         LayoutEvent::Line(placed) => Some(placed.padding),
//!         LayoutEvent::ParagraphBreak => None,
//!     })
//!     .collect();
//! assert_eq!(pads, vec![9, 7]);
//! ```

use crate::model::{Document, Line};

/// Number of spaces that center a line of `width` columns in `columns`.
///
/// Odd slack rounds down, biasing the line one column to the left. Lines at
/// least as wide as the output get no padding.
pub fn padding(columns: usize, width: usize) -> usize {
    columns.saturating_sub(width) / 2
}

/// A line with its measured width and computed left padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedLine<'a> {
    /// Spaces to emit before the line
    pub padding: usize,
    /// Display width of the line in columns
    pub width: usize,
    /// The line itself
    pub line: &'a Line,
}

impl PlacedLine<'_> {
    /// Check if the line is wider than the output and will wrap.
    pub fn overflows(&self, columns: usize) -> bool {
        self.width > columns
    }
}

/// Events emitted while laying out a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEvent<'a> {
    /// A centered line.
    Line(PlacedLine<'a>),

    /// The blank line between two paragraphs.
    ParagraphBreak,
}

/// Iterator that lays out every line of a document.
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    doc: &'a Document,
    columns: usize,
    paragraph: usize,
    line: usize,
}

impl<'a> Layout<'a> {
    /// Lay out `doc` against `columns` output columns.
    pub fn new(doc: &'a Document, columns: u16) -> Self {
        Self {
            doc,
            columns: usize::from(columns),
            paragraph: 0,
            line: 0,
        }
    }

    /// Column count the layout centers against.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Check if every event has been emitted.
    pub fn is_done(&self) -> bool {
        self.paragraph >= self.doc.paragraphs.len()
    }
}

impl<'a> Iterator for Layout<'a> {
    type Item = LayoutEvent<'a>;

    fn next(&mut self) -> Option<LayoutEvent<'a>> {
        let paragraphs = &self.doc.paragraphs;
        let para = paragraphs.get(self.paragraph)?;

        if let Some(line) = para.lines.get(self.line) {
            self.line += 1;
            let width = line.display_width();
            // An empty line is a bare newline; zero-width glyphs still get padded.
            let padding = if line.is_empty() {
                0
            } else {
                padding(self.columns, width)
            };
            return Some(LayoutEvent::Line(PlacedLine {
                padding,
                width,
                line,
            }));
        }

        self.paragraph += 1;
        self.line = 0;
        if self.paragraph < paragraphs.len() {
            Some(LayoutEvent::ParagraphBreak)
        } else {
            None
        }
    }
}
