//! Session Indexer - Titles and tags for Claude Code session logs
//!
//! This library maintains a small JSON index next to a directory of Claude Code
//! session logs (`*.jsonl`), so sessions can be listed and searched without
//! re-reading every log. It supports:
//!
//! - Bounded, fault-tolerant parsing of session log lines
//! - Title extraction via an ordered waterfall of strategies
//! - Tiered keyword tagging (task type, then domain, then technology)
//! - Incremental updates keyed on file size and modification time
//! - JSON and table rendering with keyword search
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use session_indexer::{IndexStore, IndexerConfig};
//!
//! let config = IndexerConfig::from_env()?;
//! let store = IndexStore::open(Path::new("/Users/alice/.claude/projects/-Users-alice-shop"), config)?;
//! let outcome = store.update(false)?;
//! println!("Indexed {} sessions", outcome.document.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod index_storage;
pub mod indexer;
pub mod models;
pub mod output;
pub mod parsers;
pub mod tags;
pub mod title;
pub mod utils;

// Re-export commonly used types
pub use config::IndexerConfig;
pub use error::IndexerError;
pub use indexer::{IndexStore, ReconcileStats, UpdateOutcome, build_session_record, discover_session_dir};
pub use models::{IndexDocument, SessionRecord};
pub use tags::generate_tags;
pub use title::extract_title;
pub use utils::paths::encode_project_dir_name;
