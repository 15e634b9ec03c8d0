//! Data models for session logs and the session index.
//!
//! - [`LogRecord`] - One parsed line of a session log (ephemeral)
//! - [`MessageContent`] - Polymorphic `message.content` (plain text or typed blocks)
//! - [`SessionRecord`] - Indexed summary of one log file (persisted)
//! - [`IndexDocument`] - The per-directory index document (persisted)
//!
//! Raw line shapes use lenient serde deserializers from `parsers::deserializers`
//! so a single odd field never rejects a whole line.

pub mod record;
pub mod session;

pub use record::{ContentBlock, LogRecord, MessageContent, RawLogLine, RawMessage, RecordKind, TypedBlock};
pub use session::{IndexDocument, SessionRecord};
