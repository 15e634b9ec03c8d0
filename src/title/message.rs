//! Heuristic titles from user messages
//!
//! The first user message that reads like a one-line description of the session
//! becomes the title. Tool output pasted back into the conversation, shell
//! listings, bare greetings and similar noise are filtered out first.

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

use super::{MESSAGE_WINDOW, TitleContext};

/// Messages shorter than this never make a title
const MIN_TITLE_CHARS: usize = 8;

/// Short messages mentioning a model id are "which model are you" questions
const MODEL_QUESTION_MAX_CHARS: usize = 20;

const ELLIPSIS: &str = "...";

/// Lowercase prefixes of messages that are not titles
const NOISE_PREFIXES: &[&str] = &[
    // context command echoes
    "# 恢复会话上下文",
    "# 列出保存的会话上下文",
    "# 搜索会话上下文",
    "# 加载会话上下文",
    "# 保存会话上下文",
    "# 项目架构师",
    "/recover-context",
    "/save-context",
    "/list-contexts",
    "/load-context",
    "/search-context",
    "> /",
    // tool output
    "📁",
    "📋",
    "❌",
    "✅",
    "⏺",
    "💡",
    "exit code",
    "<tool_use_error>",
    "| 序号 |",
    "todos have been",
    "(eval):",
    "no matches found",
    "shell cwd",
    "the file",
    "here's the result",
    "file created",
    "file updated",
    "successfully",
    "file content",
    "file size",
    "user has answered",
    "file-history",
    "bash(",
    // shell listings
    "ls:",
    "-rw",
    "-r-",
    "drw",
    "===",
    "user:",
    "null caveat",
    // injected markers
    "<system-reminder>",
    "<command-",
    "caveat:",
];

static NOISE_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        r"(?i)^\d+\s+total",
        r"^[\d\s]+$",
        // uuids, git hashes and other pasted hex ids
        r"(?i)^[0-9a-f-]{36}",
        r"^\s*$",
        r"(?i)^\d+\s+/users",
        r"(?i)^total\s+\d+",
        r"^\d+→",
        r"^\[\s*\{",
        r"(?i)^null\s",
        r"(?i)^/users/",
        r"^[📄📝📁📋❌✅⏺💡🔍]",
    ])
    .expect("valid regex set")
});

/// A greeting followed by punctuation/whitespace or the end of the message
static GREETING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(你好|您好|hi|hello|hey|嗨|ok|好的|谢谢|thanks)(?:[,，。.!！?？~\s]+|$)")
        .expect("valid regex")
});

/// Greetings stripped from the front of a title
///
/// Chinese greetings need no separator; English ones must end at a word boundary.
static LEADING_GREETING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(?:你好|您好|嗨)[,，。.!！\s]*|(?:hi|hello|hey)(?:[,，。.!！\s]+|$))")
        .expect("valid regex")
});

/// Whether a message is suitable as a session title
pub fn is_good_title(content: &str) -> bool {
    let trimmed = content.trim();
    let lower = trimmed.to_lowercase();

    if NOISE_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
        return false;
    }
    if NOISE_PATTERNS.is_match(trimmed) {
        return false;
    }

    let char_count = trimmed.chars().count();
    if char_count < MIN_TITLE_CHARS {
        return false;
    }

    // "hello!!!" or "thanks, ..." with nothing after the greeting
    if let Some(greeting) = GREETING_RE.find(trimmed) {
        let rest = &trimmed[greeting.end()..];
        if !rest.chars().any(char::is_alphanumeric) {
            return false;
        }
    }

    if char_count < MODEL_QUESTION_MAX_CHARS
        && (trimmed.contains("模型") || lower.contains("model"))
        && lower.contains("id")
    {
        return false;
    }

    true
}

/// Title text for an accepted message, with a leading greeting removed
pub fn extract_title_from_message(content: &str, max_len: usize) -> String {
    let trimmed = content.trim();

    if let Some(greeting) = LEADING_GREETING_RE.find(trimmed) {
        let remaining = trimmed[greeting.end()..].trim();
        if remaining.chars().count() >= MIN_TITLE_CHARS {
            return truncate_title(remaining, max_len);
        }
    }

    truncate_title(trimmed, max_len)
}

/// Collapse whitespace and truncate to `max_len` characters
///
/// Truncated titles end with `...`; the cut moves back to the last space when that
/// space lies past 60% of `max_len`.
pub fn truncate_title(text: &str, max_len: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_len {
        return collapsed;
    }

    let keep = max_len.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = collapsed.chars().take(keep).collect();
    truncated.truncate(truncated.trim_end().len());

    let chars: Vec<char> = truncated.chars().collect();
    if let Some(last_space) = chars.iter().rposition(|&c| c == ' ')
        && last_space as f64 > max_len as f64 * 0.6
    {
        truncated = chars[..last_space].iter().collect();
    }

    truncated + ELLIPSIS
}

pub fn message_title(context: &TitleContext<'_>) -> Option<String> {
    context
        .user_messages
        .iter()
        .take(MESSAGE_WINDOW)
        .find(|message| is_good_title(message))
        .map(|message| extract_title_from_message(message, context.max_title_length))
}
