//! Rendering options and configuration.

use crate::error::{Error, Result};
use crate::terminal::terminal_columns;

/// Options for rendering a centered document.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Where the output width comes from
    pub columns: Columns,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Center against a fixed number of columns.
    pub fn with_columns(mut self, columns: u16) -> Self {
        self.columns = Columns::Fixed(columns);
        self
    }

    /// Center against the terminal attached to standard output.
    pub fn with_terminal_columns(mut self) -> Self {
        self.columns = Columns::Terminal;
        self
    }

    /// Resolve the column count for one render.
    pub fn resolve_columns(&self) -> Result<u16> {
        self.columns.resolve()
    }
}

/// Source of the output width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Columns {
    /// Query standard output, falling back to 80 columns
    #[default]
    Terminal,
    /// A fixed column count
    Fixed(u16),
}

impl Columns {
    /// Resolve to a concrete column count.
    ///
    /// A fixed width of zero is rejected.
    pub fn resolve(self) -> Result<u16> {
        match self {
            Columns::Terminal => Ok(terminal_columns()),
            Columns::Fixed(0) => Err(Error::InvalidWidth(0)),
            Columns::Fixed(n) => Ok(n),
        }
    }

    /// Parse a width string: `"auto"` (or empty) for the terminal width, or a
    /// positive column count.
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        let s = s.trim();

        if s.is_empty() || s.eq_ignore_ascii_case("auto") {
            return Ok(Columns::Terminal);
        }

        let n: u16 = s
            .parse()
            .map_err(|_| format!("expected a column count or \"auto\", got {s:?}"))?;
        if n == 0 {
            return Err("column count must be at least 1".to_string());
        }
        Ok(Columns::Fixed(n))
    }
}
