//! Plain-text document parser.

use crate::error::{Error, Result};
use crate::model::{Document, Line, Paragraph};

const PARAGRAPH_BREAK: &[u8] = b"\n\n";

/// Splits a byte buffer into paragraphs and lines.
///
/// The input is treated as ending at its first NUL byte. A run of two or
/// more newlines separates paragraphs; a single newline separates lines
/// within a paragraph. All other bytes are opaque.
#[derive(Debug, Clone, Copy)]
pub struct TextParser<'a> {
    input: &'a [u8],
}

impl<'a> TextParser<'a> {
    /// Create a parser over `input`.
    pub fn new(input: &'a [u8]) -> Self {
        let end = input.iter().position(|&b| b == 0).unwrap_or(input.len());
        if end < input.len() {
            log::debug!("input truncated at NUL byte, offset {end}");
        }
        Self {
            input: &input[..end],
        }
    }

    /// The bytes the parser will read.
    pub fn input(&self) -> &'a [u8] {
        self.input
    }

    /// Parse the input into a document.
    ///
    /// The only failure is running out of memory; any partially built
    /// document is dropped before the error is returned.
    pub fn parse(&self) -> Result<Document> {
        let mut document = Document::new();

        for block in self.paragraph_slices() {
            let paragraph = build_paragraph(block)?;
            document
                .paragraphs
                .try_reserve(1)
                .map_err(|_| Error::exhausted("adding a paragraph"))?;
            document.add_paragraph(paragraph);
        }

        log::debug!(
            "parsed {} paragraphs, {} lines",
            document.paragraph_count(),
            document.line_count()
        );
        Ok(document)
    }

    /// Iterate over the raw byte slice of each paragraph.
    pub fn paragraph_slices(&self) -> ParagraphSlices<'a> {
        ParagraphSlices { rest: self.input }
    }
}

/// Iterator over paragraph byte slices, produced by
/// [`TextParser::paragraph_slices`].
///
/// Each slice starts with a non-newline byte and contains no `"\n\n"`.
#[derive(Debug, Clone)]
pub struct ParagraphSlices<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for ParagraphSlices<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let start = self.rest.iter().position(|&b| b != b'\n')?;
        let rest = &self.rest[start..];

        match find(rest, PARAGRAPH_BREAK) {
            Some(end) => {
                self.rest = &rest[end + PARAGRAPH_BREAK.len()..];
                Some(&rest[..end])
            }
            None => {
                self.rest = &[];
                Some(rest)
            }
        }
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn build_paragraph(block: &[u8]) -> Result<Paragraph> {
    // A block running to end of input may keep one trailing newline; it ends
    // the last line rather than starting an empty one.
    let block = block.strip_suffix(b"\n").unwrap_or(block);

    let mut paragraph = Paragraph::new();
    for bytes in block.split(|&b| b == b'\n') {
        let mut owned = Vec::new();
        owned
            .try_reserve_exact(bytes.len())
            .map_err(|_| Error::exhausted("copying a line"))?;
        owned.extend_from_slice(bytes);

        paragraph
            .lines
            .try_reserve(1)
            .map_err(|_| Error::exhausted("adding a line"))?;
        paragraph.add_line(Line::new(owned));
    }
    Ok(paragraph)
}
