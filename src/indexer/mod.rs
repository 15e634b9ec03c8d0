//! Incremental indexing of a session directory
//!
//! # Error Handling Strategy
//!
//! The indexer keeps going past anything scoped to a single file:
//!
//! - **File-level failures**: A log that cannot be read becomes a blank record, and a
//!   file whose metadata vanished mid-pass is skipped (and pruned). Both are logged at
//!   warn level.
//!
//! - **Index-level failures**: A corrupt or incompatible index file is discarded and
//!   rebuilt from the logs rather than reported.
//!
//! - **Fatal failures**: A missing session directory, an unreadable directory listing
//!   or a failed index write are returned to the caller.
//!
//! - **Parser integration**: Line-level error handling is delegated to
//!   [`crate::parsers`], which skips malformed lines without counting them.

pub mod builder;
pub mod discovery;
pub mod store;

pub use builder::{SessionSummary, build_session_record, is_valid_user_message, summarize_log};
pub use discovery::{LogFile, discover_log_files, discover_session_dir};
pub use store::{IndexStore, ReconcileStats, UpdateOutcome};
