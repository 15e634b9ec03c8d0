//! File fingerprints for staleness detection

use std::fs::{self, Metadata};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Size and modification time of a log file when it was last indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint {
    pub size: u64,
    pub modified_at: DateTime<Utc>,
}

impl Fingerprint {
    pub fn from_metadata(metadata: &Metadata) -> Result<Self> {
        let modified = metadata.modified().context("File modification time unavailable")?;
        Ok(Self { size: metadata.len(), modified_at: DateTime::<Utc>::from(modified) })
    }

    /// Create fingerprint from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;
        Self::from_metadata(&metadata)
    }
}

/// Whether an index entry has to be rebuilt
///
/// Rebuild when forced, when there is no stored entry, or when either half of the
/// fingerprint differs. Any difference counts, including an older modification time.
pub fn needs_rebuild(stored: Option<&Fingerprint>, current: &Fingerprint, force: bool) -> bool {
    force || stored != Some(current)
}
