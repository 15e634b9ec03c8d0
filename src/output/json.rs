use anyhow::{Context, Result};

use crate::models::IndexDocument;

/// The index document as pretty-printed JSON (non-ASCII text is kept as is)
pub fn format_json(document: &IndexDocument) -> Result<String> {
    serde_json::to_string_pretty(document).context("Failed to serialize index")
}
