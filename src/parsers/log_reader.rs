use std::fs::File;
use std::io::{BufRead, BufReader, Split};
use std::iter::Take;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::models::{LogRecord, RawLogLine, RecordKind};
use crate::parsers::content::{normalize_content, text_segments};

/// Default number of leading lines read from a log file
pub const DEFAULT_MAX_LINES: usize = 500;

/// Bounded reader over one session log file
///
/// Only the first `max_lines` physical lines are ever read, so a pathologically
/// large log costs at most that many lines of work. Each call to
/// [`LogReader::records`] re-opens the file and starts over.
#[derive(Debug, Clone)]
pub struct LogReader {
    path: PathBuf,
    max_lines: usize,
}

impl LogReader {
    pub fn new(path: &Path) -> Self {
        Self::with_max_lines(path, DEFAULT_MAX_LINES)
    }

    pub fn with_max_lines(path: &Path, max_lines: usize) -> Self {
        Self { path: path.to_path_buf(), max_lines }
    }

    /// Open the file and return a lazy sequence of parsed records
    ///
    /// Empty lines, non-UTF-8 lines and lines that are not a JSON object are skipped.
    pub fn records(&self) -> Result<LogRecords> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open log file: {}", self.path.display()))?;

        Ok(LogRecords {
            lines: BufReader::new(file).split(b'\n').take(self.max_lines),
            path: self.path.clone(),
            line_num: 0,
            done: false,
        })
    }
}

/// Iterator returned by [`LogReader::records`]
pub struct LogRecords {
    lines: Take<Split<BufReader<File>>>,
    path: PathBuf,
    line_num: usize,
    done: bool,
}

impl Iterator for LogRecords {
    type Item = LogRecord;

    fn next(&mut self) -> Option<LogRecord> {
        while !self.done {
            let bytes = match self.lines.next() {
                Some(Ok(bytes)) => bytes,
                Some(Err(e)) => {
                    log::warn!(
                        "Stopped reading {} after line {}: {}",
                        self.path.display(),
                        self.line_num,
                        e
                    );
                    self.done = true;
                    return None;
                }
                None => {
                    self.done = true;
                    return None;
                }
            };
            self.line_num += 1;

            let Ok(text) = std::str::from_utf8(&bytes) else {
                log::debug!("Skipping non-UTF-8 line {} in {}", self.line_num, self.path.display());
                continue;
            };
            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            match parse_line(text) {
                Some(record) => return Some(record),
                None => {
                    log::debug!("Skipping malformed line {} in {}", self.line_num, self.path.display());
                }
            }
        }
        None
    }
}

/// Parse one trimmed log line; `None` when it is not a JSON object
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let value: Value = serde_json::from_str(line).ok()?;
    if !value.is_object() {
        return None;
    }
    let raw: RawLogLine = serde_json::from_value(value).ok()?;

    let content = raw.message.as_ref().and_then(|message| message.content.as_ref());
    Some(LogRecord {
        kind: RecordKind::from_type_field(raw.entry_type.as_deref()),
        session_id: raw.session_id,
        timestamp: raw.timestamp,
        content: normalize_content(content),
        segments: text_segments(content),
    })
}
