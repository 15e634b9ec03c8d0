//! Bounded JSONL parsing for session log files
//!
//! # Error Handling Strategy
//!
//! Session logs are append-only and written by another process, so the parser
//! follows a **graceful degradation** approach:
//!
//! - **Individual line failures**: Blank, non-UTF-8 or malformed lines are skipped and
//!   logged at debug level. They never abort the file and are never counted.
//!
//! - **Field-level leniency**: A field with an unexpected shape (a numeric `type`, an
//!   unparsable `timestamp`, `content: null`) degrades to absent instead of rejecting
//!   the line, via the lenient deserializers in [`deserializers`].
//!
//! - **Bounded reads**: Only the leading lines of a file are read (see
//!   [`log_reader::DEFAULT_MAX_LINES`]), so indexing time is bounded per file.
//!
//! - **File-level failures**: Failing to open a file is returned as an
//!   `anyhow::Error` with context; the session builder turns it into a blank record.

pub mod content;
pub mod deserializers;
pub mod log_reader;

pub use content::{normalize_content, text_segments};
pub use log_reader::{LogReader, LogRecords, parse_line};
