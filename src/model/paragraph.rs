//! Paragraph and line types.

use serde::{Serialize, Serializer};

use crate::width::display_width;

/// A paragraph: one or more lines separated in the source by single newlines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    /// Lines in source order
    pub lines: Vec<Line>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Create a paragraph from a list of lines.
    pub fn with_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Line>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a line to the end of the paragraph.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Lines in source order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines in the paragraph.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the paragraph has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The paragraph's source bytes: lines joined by single newlines.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.write_bytes(&mut out);
        out
    }

    pub(crate) fn write_bytes(&self, out: &mut Vec<u8>) {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push(b'\n');
            }
            out.extend_from_slice(line.as_bytes());
        }
    }
}

/// A single line of text, stored as raw bytes without its terminating newline.
///
/// The bytes are usually UTF-8 but are not required to be; they are written
/// back verbatim and only interpreted when measuring display width.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Line(Vec<u8>);

impl Line {
    /// Create a line from bytes.
    ///
    /// The bytes must not contain a newline; the parser never produces one
    /// and the renderer relies on it.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        debug_assert!(!bytes.contains(&b'\n'), "line contains a newline byte");
        Self(bytes)
    }

    /// Raw bytes of the line.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the line has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lossily decoded text of the line.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }

    /// Width of the line in terminal columns.
    pub fn display_width(&self) -> usize {
        display_width(&self.0)
    }

    /// Consume the line and return its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Line::new(s.as_bytes())
    }
}

impl From<String> for Line {
    fn from(s: String) -> Self {
        Line::new(s.into_bytes())
    }
}

impl From<&[u8]> for Line {
    fn from(bytes: &[u8]) -> Self {
        Line::new(bytes)
    }
}

impl From<Vec<u8>> for Line {
    fn from(bytes: Vec<u8>) -> Self {
        Line::new(bytes)
    }
}

impl AsRef<[u8]> for Line {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Line {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(&self.0))
    }
}
