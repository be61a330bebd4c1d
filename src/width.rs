//! Display width measurement for terminal output.
//!
//! Widths are measured in terminal columns, not bytes. A line is decoded as
//! UTF-8 with [`Utf8Decoder`]; every decoded code point contributes its
//! East-Asian width, and every byte that does not start a well-formed
//! sequence contributes exactly one column. Measurement never fails, so
//! arbitrary input always yields a usable indent.
//!
//! # Example
//!
//! ```
//! use centerline::width::display_width;
//!
//! assert_eq!(display_width(b"hi"), 2);
//! assert_eq!(display_width("日本".as_bytes()), 4);
//! assert_eq!(display_width(b"\xFFok"), 3);
//! ```

use unicode_width::UnicodeWidthChar;

/// Column width of a single code point.
///
/// Returns 0 for combining marks and other zero-width characters, 2 for wide
/// and fullwidth East Asian characters, and 1 otherwise. Control characters,
/// which have no defined width, count as 1 so that they never collapse the
/// indent of a line.
pub fn code_point_width(c: char) -> usize {
    c.width().unwrap_or(1)
}

/// Column width of a byte string interpreted as UTF-8.
///
/// Measurement stops at the first NUL byte. Malformed or truncated sequences
/// are charged one column per byte.
pub fn display_width(bytes: &[u8]) -> usize {
    let mut width = 0;
    for decoded in Utf8Decoder::new(bytes) {
        match decoded {
            Decoded::Char { ch: '\0', .. } => break,
            Decoded::Char { ch, .. } => width += code_point_width(ch),
            Decoded::Invalid(_) => width += 1,
        }
    }
    width
}

/// One step of UTF-8 decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// A well-formed code point spanning `len` bytes.
    Char {
        /// Decoded character
        ch: char,
        /// Encoded length in bytes (1 to 4)
        len: usize,
    },

    /// A byte that does not begin a well-formed sequence at this position.
    Invalid(u8),
}

impl Decoded {
    /// Number of input bytes this step consumed.
    pub fn consumed(&self) -> usize {
        match self {
            Decoded::Char { len, .. } => *len,
            Decoded::Invalid(_) => 1,
        }
    }
}

/// Incremental UTF-8 decoder over a byte slice.
///
/// On a malformed or incomplete sequence the decoder yields
/// [`Decoded::Invalid`] for the first byte, advances by exactly one byte and
/// restarts decoding from a clean state at the next byte.
#[derive(Debug, Clone)]
pub struct Utf8Decoder<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Utf8Decoder<'a> {
    /// Create a decoder positioned at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Byte offset of the next undecoded byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet decoded.
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    fn decode_at(rest: &[u8]) -> Decoded {
        let lead = rest[0];
        let len = match lead {
            0x00..=0x7F => return Decoded::Char { ch: lead as char, len: 1 },
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Decoded::Invalid(lead),
        };

        if rest.len() < len {
            return Decoded::Invalid(lead);
        }

        // from_utf8 rejects overlong forms, surrogates and bad continuations.
        match std::str::from_utf8(&rest[..len]) {
            Ok(s) => match s.chars().next() {
                Some(ch) => Decoded::Char { ch, len },
                None => Decoded::Invalid(lead),
            },
            Err(_) => Decoded::Invalid(lead),
        }
    }
}

impl Iterator for Utf8Decoder<'_> {
    type Item = Decoded;

    fn next(&mut self) -> Option<Decoded> {
        let rest = self.remaining();
        if rest.is_empty() {
            return None;
        }
        let decoded = Self::decode_at(rest);
        self.pos += decoded.consumed();
        Some(decoded)
    }
}
