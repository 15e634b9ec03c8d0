//! Index document persistence: load/save with atomic writes

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::config::INDEX_VERSION;
use crate::models::IndexDocument;

/// Load an index document
///
/// Returns `Ok(None)` when the file does not exist or was written by an incompatible
/// format version (caller should rebuild). Unreadable or malformed files are errors.
pub fn load_document(path: &Path) -> Result<Option<IndexDocument>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read index file: {}", path.display()))?;
    let document: IndexDocument = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse index JSON: {}", path.display()))?;

    if !is_compatible_version(&document.version) {
        log::warn!(
            "Index version mismatch (expected {}, found {}), rebuilding index",
            INDEX_VERSION,
            document.version
        );
        return Ok(None);
    }

    Ok(Some(document))
}

/// Save an index document atomically (temp file + rename)
pub fn save_document(path: &Path, document: &IndexDocument) -> Result<()> {
    let temp_path = temp_path_for(path)?;
    let json = serde_json::to_string_pretty(document).context("Failed to serialize index")?;

    fs::write(&temp_path, json)
        .with_context(|| format!("Failed to write index temp file: {}", temp_path.display()))?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e).with_context(|| format!("Failed to replace index file: {}", path.display()));
    }

    Ok(())
}

fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let Some(file_name) = path.file_name() else {
        bail!("Index path has no file name: {}", path.display());
    };
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

/// Documents sharing the current major version are readable
fn is_compatible_version(version: &str) -> bool {
    let major = |v: &str| v.split('.').next().map(str::to_string);
    major(version).is_some_and(|m| Some(m) == major(INDEX_VERSION))
}
