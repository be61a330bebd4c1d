//! Rendering module for writing centered documents.

mod center;
mod json;
pub mod layout;
mod options;
mod result;

pub use center::{render, to_centered};
pub use json::{to_json, JsonFormat};
pub use layout::{padding, Layout, LayoutEvent, PlacedLine};
pub use options::{Columns, RenderOptions};
pub use result::RenderStats;
