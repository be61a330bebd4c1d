//! Rendering statistics.

use serde::Serialize;

/// Statistics collected while rendering a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    /// Column count the document was centered against
    pub columns: u16,

    /// Number of paragraphs rendered
    pub paragraphs: usize,

    /// Number of lines rendered (excluding paragraph separators)
    pub lines: usize,

    /// Number of lines wider than `columns`
    pub overflowing_lines: usize,
}

impl RenderStats {
    /// Create empty statistics for a render at `columns`.
    pub fn new(columns: u16) -> Self {
        Self {
            columns,
            ..Default::default()
        }
    }

    /// Check if every line fit within the output width.
    pub fn all_lines_fit(&self) -> bool {
        self.overflowing_lines == 0
    }
}
