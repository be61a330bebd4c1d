//! Terminal width probe.

use terminal_size::{terminal_size_of, Width};

/// Column count used when standard output is not a terminal or its size
/// cannot be queried.
pub const FALLBACK_COLUMNS: u16 = 80;

/// Current column count of the terminal attached to standard output.
///
/// Only standard output is queried: when output is piped or redirected to a
/// file this returns [`FALLBACK_COLUMNS`] even if stdin or stderr is a
/// terminal. A reported width of zero is treated as a failed query.
pub fn terminal_columns() -> u16 {
    match terminal_size_of(std::io::stdout()) {
        Some((Width(cols), _)) if cols > 0 => cols,
        Some(_) => {
            log::debug!("terminal reported zero columns, using {FALLBACK_COLUMNS}");
            FALLBACK_COLUMNS
        }
        None => {
            log::debug!("stdout is not a terminal, using {FALLBACK_COLUMNS} columns");
            FALLBACK_COLUMNS
        }
    }
}
