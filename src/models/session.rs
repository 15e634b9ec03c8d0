use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::INDEX_VERSION;
use crate::index_storage::Fingerprint;

/// Indexed summary of one session log file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// `sessionId` from the log content, or the file stem when the log never names one
    pub session_id: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub message_count: usize,
    pub file_size: u64,
    pub file_modified_at: DateTime<Utc>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub last_indexed_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint { size: self.file_size, modified_at: self.file_modified_at }
    }
}

/// Per-directory index document, keyed by log file stem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDocument {
    pub version: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sessions: BTreeMap<String, SessionRecord>,
}

impl IndexDocument {
    /// Empty document with the current format version
    pub fn empty() -> Self {
        Self { version: INDEX_VERSION.to_string(), updated_at: None, sessions: BTreeMap::new() }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Entries newest first by file modification time, ties broken by key
    pub fn by_recency(&self) -> Vec<(&str, &SessionRecord)> {
        let mut entries: Vec<(&str, &SessionRecord)> =
            self.sessions.iter().map(|(key, record)| (key.as_str(), record)).collect();
        entries.sort_by(|a, b| {
            b.1.file_modified_at.cmp(&a.1.file_modified_at).then_with(|| a.0.cmp(b.0))
        });
        entries
    }
}

impl Default for IndexDocument {
    fn default() -> Self {
        Self::empty()
    }
}
