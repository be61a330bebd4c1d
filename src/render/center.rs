//! Centered plain-text rendering.

use std::io::{self, Read, Write};

use crate::error::Result;
use crate::model::Document;

use super::{Layout, LayoutEvent, RenderOptions, RenderStats};

/// Write `doc` to `out` with every line centered.
///
/// The column count is resolved once from `options` and used for the whole
/// document. Each line is written as padding spaces, the line's bytes and a
/// newline; one extra newline separates adjacent paragraphs.
pub fn render<W: Write>(
    doc: &Document,
    out: &mut W,
    options: &RenderOptions,
) -> Result<RenderStats> {
    let columns = options.resolve_columns()?;
    let layout = Layout::new(doc, columns);
    let mut stats = RenderStats::new(columns);

    for event in layout {
        match event {
            LayoutEvent::Line(placed) => {
                if placed.overflows(usize::from(columns)) {
                    log::debug!(
                        "line {} is {} columns wide, wider than {}",
                        stats.lines + 1,
                        placed.width,
                        columns
                    );
                    stats.overflowing_lines += 1;
                }
                write_padding(out, placed.padding)?;
                out.write_all(placed.line.as_bytes())?;
                out.write_all(b"\n")?;
                stats.lines += 1;
            }
            LayoutEvent::ParagraphBreak => {
                out.write_all(b"\n")?;
            }
        }
    }

    stats.paragraphs = doc.paragraph_count();
    log::debug!(
        "rendered {} paragraphs, {} lines at {} columns",
        stats.paragraphs,
        stats.lines,
        stats.columns
    );
    Ok(stats)
}

/// Render `doc` into a byte buffer.
pub fn to_centered(doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    render(doc, &mut output, options)?;
    Ok(output)
}

fn write_padding<W: Write>(out: &mut W, count: usize) -> io::Result<()> {
    if count > 0 {
        io::copy(&mut io::repeat(b' ').take(count as u64), out)?;
    }
    Ok(())
}
