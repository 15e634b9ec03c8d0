//! Titles derived from slash commands

use once_cell::sync::Lazy;
use regex::Regex;

use super::{COMMAND_WINDOW, TitleContext};

static COMMAND_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<command-name>/([^<]+)</command-name>").expect("valid regex"));
static COMMAND_MESSAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<command-message>([^<]+)</command-message>").expect("valid regex"));

/// Longest readable command name that still gets a synthesized title
const MAX_SYNTHESIZED_CHARS: usize = 20;

const SYNTHESIZED_SUFFIX: &str = "Command";

/// Commands that say nothing about the session's content
const SKIP_COMMANDS: &[&str] = &["clear"];

const COMMAND_TITLES: &[(&str, &str)] = &[
    ("recover-context", "Recover session context"),
    ("load-context", "Load session context"),
    ("save-context", "Save session context"),
    ("list-contexts", "List session contexts"),
    ("search-context", "Search session context"),
    ("analysis", "Project architecture analysis"),
    ("company", "Page feature analysis"),
    ("git", "Git operations"),
    ("commit", "Code commit"),
    ("code-explain", "Code explanation"),
    ("ai-review", "AI code review"),
    ("smart-debug", "Smart debugging"),
    ("test-generate", "Generate test cases"),
    ("doc-generate", "Generate documentation"),
    ("rust-project", "Rust project setup"),
    ("typescript-scaffold", "TypeScript project setup"),
    ("blog", "Technical blog writing"),
    ("feature-development", "Feature development"),
    ("frontend-design", "Frontend design"),
];

/// Command name embedded in a message, from `<command-name>` or `<command-message>`
pub fn extract_command_name(text: &str) -> Option<&str> {
    COMMAND_NAME_RE
        .captures(text)
        .or_else(|| COMMAND_MESSAGE_RE.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
}

/// Title for a command name, if the command is eligible
pub fn title_for_command(name: &str) -> Option<String> {
    let name = name.trim_start_matches('/');
    if name.is_empty() || SKIP_COMMANDS.contains(&name) {
        return None;
    }

    if let Some((_, title)) = COMMAND_TITLES.iter().find(|(command, _)| *command == name) {
        return Some(title.to_string());
    }

    let readable = name
        .replace(['-', '_'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");
    if readable.is_empty() || readable.chars().count() > MAX_SYNTHESIZED_CHARS {
        return None;
    }
    Some(format!("{} {}", readable, SYNTHESIZED_SUFFIX))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn command_title(context: &TitleContext<'_>) -> Option<String> {
    context
        .segments
        .iter()
        .take(COMMAND_WINDOW)
        .find_map(|segment| extract_command_name(segment).and_then(title_for_command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_command_name_tag() {
        assert_eq!(
            extract_command_name("<command-name>/recover-context</command-name>"),
            Some("recover-context")
        );
    }

    #[test]
    fn test_extract_command_message_tag() {
        let text = "<command-message>smart-debug is running…</command-message>";
        assert_eq!(extract_command_name(text), Some("smart-debug is running…"));
        assert_eq!(
            extract_command_name("<command-message> commit </command-message>"),
            Some("commit")
        );
    }

    #[test]
    fn test_command_name_preferred_over_message() {
        let text = "<command-message>a</command-message><command-name>/b</command-name>";
        assert_eq!(extract_command_name(text), Some("b"));
    }

    #[test]
    fn test_no_command_marker() {
        assert_eq!(extract_command_name("just text"), None);
        assert_eq!(extract_command_name("<command-name>/</command-name>"), None);
    }

    #[test]
    fn test_mapped_titles() {
        assert_eq!(title_for_command("commit"), Some("Code commit".to_string()));
        assert_eq!(title_for_command("/save-context"), Some("Save session context".to_string()));
    }

    #[test]
    fn test_skip_commands() {
        assert_eq!(title_for_command("clear"), None);
        assert_eq!(title_for_command("/clear"), None);
    }

    #[test]
    fn test_synthesized_title() {
        assert_eq!(title_for_command("db-migrate"), Some("Db Migrate Command".to_string()));
        assert_eq!(title_for_command("run_all_checks"), Some("Run All Checks Command".to_string()));
        assert_eq!(title_for_command("LINT"), Some("Lint Command".to_string()));
    }

    #[test]
    fn test_synthesized_title_too_long() {
        assert_eq!(title_for_command("generate-release-notes-draft"), None);
    }

    #[test]
    fn test_command_title_skips_ineligible_and_continues() {
        let segments = vec![
            "<command-name>/clear</command-name>".to_string(),
            "<command-name>/generate-release-notes-draft</command-name>".to_string(),
            "<command-name>/commit</command-name>".to_string(),
        ];
        let ctx = TitleContext { segments: &segments, user_messages: &[], max_title_length: 40 };
        assert_eq!(command_title(&ctx), Some("Code commit".to_string()));
    }

    #[test]
    fn test_command_title_window() {
        let mut segments = vec!["plain".to_string(); COMMAND_WINDOW];
        segments.push("<command-name>/commit</command-name>".to_string());
        let ctx = TitleContext { segments: &segments, user_messages: &[], max_title_length: 40 };
        assert_eq!(command_title(&ctx), None);
    }
}
