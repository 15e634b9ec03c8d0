//! Session record builder: one log file in, one [`SessionRecord`] out.
//!
//! # Error Handling Strategy
//!
//! Building a record never fails. Line-level problems are absorbed by the log reader;
//! a file that cannot be opened at all is logged as a warning and yields a blank
//! record (`untitled`, no tags, zero messages) so one bad file cannot abort the
//! directory pass.

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::config::IndexerConfig;
use crate::index_storage::Fingerprint;
use crate::models::{LogRecord, RecordKind, SessionRecord};
use crate::parsers::LogReader;
use crate::tags::generate_tags;
use crate::title::{MESSAGE_WINDOW, SEGMENT_CAPACITY, TitleContext, UNTITLED, extract_title};

/// Number of leading content strings fed to the tag classifier
const TAG_CONTENT_WINDOW: usize = 10;

/// Assistant messages are cut to this many characters before tagging
const ASSISTANT_TAG_CHARS: usize = 500;

/// Assistant messages this short carry no topical signal
const MIN_ASSISTANT_CHARS: usize = 10;

/// Shortest user message that counts as a real message
const MIN_USER_MESSAGE_CHARS: usize = 5;

/// Prefixes of user-role lines injected by the client or tools rather than typed
const INJECTED_PREFIXES: &[&str] = &[
    "<command-",
    "Caveat:",
    "<local-",
    "This session is being continued",
    "<system-reminder>",
    "```",
    "{\"type\":",
    "⏺",
    "1→",
    "total ",
];

/// Everything derived from a log file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub session_id: Option<String>,
    pub title: String,
    pub tags: Vec<String>,
    pub message_count: usize,
    pub created_at: Option<DateTime<Utc>>,
}

impl SessionSummary {
    /// Summary used when a log cannot be read
    pub fn blank() -> Self {
        Self {
            session_id: None,
            title: UNTITLED.to_string(),
            tags: Vec::new(),
            message_count: 0,
            created_at: None,
        }
    }
}

/// Whether a user-role line is a message the user actually wrote
pub fn is_valid_user_message(content: &str) -> bool {
    let trimmed = content.trim();
    if trimmed.chars().count() < MIN_USER_MESSAGE_CHARS {
        return false;
    }
    !INJECTED_PREFIXES.iter().any(|prefix| trimmed.starts_with(prefix))
}

/// Accumulates the bounded windows the title and tag strategies need
#[derive(Debug, Default)]
struct SummaryCollector {
    session_id: Option<String>,
    created_at: Option<DateTime<Utc>>,
    segments: Vec<String>,
    user_messages: Vec<String>,
    tag_content: Vec<String>,
    message_count: usize,
}

impl SummaryCollector {
    fn push(&mut self, record: LogRecord) {
        let LogRecord { kind, session_id, timestamp, content, segments } = record;

        if self.session_id.is_none() {
            self.session_id = session_id;
        }
        if self.created_at.is_none() {
            self.created_at = timestamp;
        }

        match kind {
            RecordKind::User => {
                let room = SEGMENT_CAPACITY.saturating_sub(self.segments.len());
                self.segments.extend(segments.into_iter().take(room));

                if is_valid_user_message(&content) {
                    self.message_count += 1;
                    if self.tag_content.len() < TAG_CONTENT_WINDOW {
                        self.tag_content.push(content.clone());
                    }
                    if self.user_messages.len() < MESSAGE_WINDOW {
                        self.user_messages.push(content);
                    }
                }
            }
            RecordKind::Assistant => {
                if content.chars().count() > MIN_ASSISTANT_CHARS && self.tag_content.len() < TAG_CONTENT_WINDOW {
                    self.tag_content.push(content.chars().take(ASSISTANT_TAG_CHARS).collect());
                }
            }
            RecordKind::Other => {}
        }
    }

    fn finish(self, config: &IndexerConfig) -> SessionSummary {
        let context = TitleContext {
            segments: &self.segments,
            user_messages: &self.user_messages,
            max_title_length: config.max_title_length,
        };

        SessionSummary {
            title: extract_title(&context),
            tags: generate_tags(&self.tag_content.join(" "), config.max_tags),
            session_id: self.session_id,
            message_count: self.message_count,
            created_at: self.created_at,
        }
    }
}

/// Summarize a sequence of records
pub fn summarize_records<I>(records: I, config: &IndexerConfig) -> SessionSummary
where
    I: IntoIterator<Item = LogRecord>,
{
    let mut collector = SummaryCollector::default();
    for record in records {
        collector.push(record);
    }
    collector.finish(config)
}

/// Read a log file (bounded) and summarize it
pub fn summarize_log(path: &Path, config: &IndexerConfig) -> Result<SessionSummary> {
    let reader = LogReader::with_max_lines(path, config.max_lines);
    Ok(summarize_records(reader.records()?, config))
}

/// Build the index entry for one log file
pub fn build_session_record(
    path: &Path,
    stem: &str,
    fingerprint: Fingerprint,
    config: &IndexerConfig,
    indexed_at: DateTime<Utc>,
) -> SessionRecord {
    let summary = summarize_log(path, config).unwrap_or_else(|e| {
        log::warn!("Failed to index {}: {:#}", path.display(), e);
        SessionSummary::blank()
    });

    SessionRecord {
        session_id: summary.session_id.unwrap_or_else(|| stem.to_string()),
        title: summary.title,
        tags: summary.tags,
        message_count: summary.message_count,
        file_size: fingerprint.size,
        file_modified_at: fingerprint.modified_at,
        created_at: summary.created_at,
        last_indexed_at: indexed_at,
    }
}
