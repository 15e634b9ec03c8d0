//! Cell formatting helpers for the session table

use chrono::{DateTime, Local, Utc};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Files above this size get [`LARGE_FILE_MARKER`] next to their size
pub const LARGE_FILE_BYTES: u64 = MIB;

pub const LARGE_FILE_MARKER: &str = " *";

const ELLIPSIS: &str = "...";

/// Human-readable file size: `512 B`, `12 KB`, `3.4 MB`
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.0} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// Size cell including the large-file marker
pub fn format_size_cell(bytes: u64) -> String {
    let mut cell = format_size(bytes);
    if bytes > LARGE_FILE_BYTES {
        cell.push_str(LARGE_FILE_MARKER);
    }
    cell
}

/// Modification time in the local timezone, minute precision
pub fn format_local_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Cut `text` to `max_chars` characters, ending in `...` when cut
pub fn truncate_cell(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    text.chars().take(keep).collect::<String>() + ELLIPSIS
}

/// Tags as `#tag #tag`, or `-` when there are none
pub fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return "-".to_string();
    }
    tags.iter().map(|tag| format!("#{}", tag)).collect::<Vec<_>>().join(" ")
}
