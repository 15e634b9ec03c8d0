use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Role of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Assistant,
    Other,
}

impl RecordKind {
    pub fn from_type_field(value: Option<&str>) -> Self {
        match value {
            Some("user") => RecordKind::User,
            Some("assistant") => RecordKind::Assistant,
            _ => RecordKind::Other,
        }
    }
}

/// `message.content` of a log line: either a plain string or a list of blocks
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    PlainText(String),
    BlockSequence(Vec<ContentBlock>),
}

/// One element of a block sequence
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContentBlock {
    Bare(String),
    Typed(TypedBlock),
    Opaque(Value),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypedBlock {
    #[serde(rename = "type", default)]
    pub block_type: Option<String>,
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub content: Option<Value>,
}

/// Raw shape of one log line before normalization
///
/// Every field degrades to `None` on an unexpected shape so that only a line that
/// is not a JSON object at all gets rejected.
#[derive(Debug, Default, Deserialize)]
pub struct RawLogLine {
    #[serde(rename = "type", default, deserialize_with = "crate::parsers::deserializers::lenient_string")]
    pub entry_type: Option<String>,
    #[serde(
        rename = "sessionId",
        default,
        deserialize_with = "crate::parsers::deserializers::lenient_session_id"
    )]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::lenient_message")]
    pub message: Option<RawMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawMessage {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::lenient_content")]
    pub content: Option<MessageContent>,
}

/// One parsed log line
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub kind: RecordKind,
    pub session_id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    /// Normalized message content
    pub content: String,
    /// Plain-text pieces of the message: the string body, or each `text` block
    pub segments: Vec<String>,
}
