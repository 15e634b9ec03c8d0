//! Indexer configuration
//!
//! Every location and limit the indexer uses lives in [`IndexerConfig`], which is
//! passed into the index store at construction. Nothing below the CLI reads the
//! environment, so tests can point the whole pipeline at a temporary directory.

use std::path::{Path, PathBuf};

use crate::error::IndexerError;
use crate::utils::get_claude_dir;

/// File name of the per-directory index document
pub const INDEX_FILE_NAME: &str = ".session-index.json";

/// Current index document format version
pub const INDEX_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerConfig {
    /// Directory holding one sub-directory of session logs per project
    pub projects_dir: PathBuf,
    pub index_file_name: String,
    /// Extension (without dot) of session log files
    pub log_extension: String,
    /// Log files whose name starts with this prefix are sub-agent logs and never indexed
    pub excluded_prefix: String,
    /// Number of leading lines read from each log file
    pub max_lines: usize,
    pub max_title_length: usize,
    pub max_tags: usize,
}

impl IndexerConfig {
    /// Build a configuration rooted at the given Claude directory
    pub fn from_claude_dir(claude_dir: &Path) -> Self {
        Self {
            projects_dir: claude_dir.join("projects"),
            index_file_name: INDEX_FILE_NAME.to_string(),
            log_extension: "jsonl".to_string(),
            excluded_prefix: "agent-".to_string(),
            max_lines: 500,
            max_title_length: 40,
            max_tags: 3,
        }
    }

    /// Build a configuration rooted at `$HOME/.claude`
    pub fn from_env() -> Result<Self, IndexerError> {
        Ok(Self::from_claude_dir(&get_claude_dir()?))
    }

    /// Whether a file name denotes a log file this indexer should pick up
    pub fn is_indexable_file_name(&self, file_name: &str) -> bool {
        if file_name.starts_with(&self.excluded_prefix) {
            return false;
        }
        Path::new(file_name).extension().is_some_and(|ext| ext == self.log_extension.as_str())
    }
}
