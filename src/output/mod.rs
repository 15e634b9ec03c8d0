//! Rendering of an index document for stdout
//!
//! - [`format_json`] - The document itself, for scripts and hooks
//! - [`format_table`] - A sorted, optionally filtered table for people

pub mod format;
pub mod json;
pub mod table;

pub use format::format_size;
pub use json::format_json;
pub use table::{format_table, matches_search};
