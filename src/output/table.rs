//! Human-readable session table

use std::path::Path;

use super::format::{format_local_time, format_size_cell, format_tags, truncate_cell};
use crate::models::{IndexDocument, SessionRecord};
use crate::utils::sanitize_cell;

/// Title column width in characters
const TITLE_CHARS: usize = 32;

/// Width of each column's content, matching [`format_row`]
const COLUMN_WIDTHS: [usize; 6] = [4, 36, 16, TITLE_CHARS, 35, 8];
const COLUMN_NAMES: [&str; 6] = ["#", "File", "Modified", "Title", "Tags", "Size"];

pub const EMPTY_INDEX_MESSAGE: &str = "No sessions to recover";

/// Whether a session matches a case-insensitive search term
///
/// Title, space-joined tags, the stored modification time (RFC 3339 and the
/// displayed local form) and the session key are searched.
pub fn matches_search(key: &str, record: &SessionRecord, term: &str) -> bool {
    let needle = term.to_lowercase();
    let haystacks = [
        record.title.to_lowercase(),
        record.tags.join(" ").to_lowercase(),
        record.file_modified_at.to_rfc3339().to_lowercase(),
        format_local_time(&record.file_modified_at),
        key.to_lowercase(),
    ];
    haystacks.iter().any(|haystack| haystack.contains(&needle))
}

fn header_lines() -> [String; 2] {
    let names: Vec<String> =
        COLUMN_NAMES.iter().zip(COLUMN_WIDTHS).map(|(name, width)| format!(" {:<width$} ", name)).collect();
    let rules: Vec<String> = COLUMN_WIDTHS.iter().map(|width| "-".repeat(width + 2)).collect();
    [format!("|{}|", names.join("|")), format!("|{}|", rules.join("|"))]
}

fn format_row(position: usize, key: &str, record: &SessionRecord) -> String {
    let file_name = sanitize_cell(&format!("{}.jsonl", key));
    let title = truncate_cell(&sanitize_cell(&record.title), TITLE_CHARS);
    let tags = sanitize_cell(&format_tags(&record.tags));

    format!(
        "| [{:>2}] | {:<36} | {:<16} | {:<32} | {:<35} | {:<8} |",
        position,
        file_name,
        format_local_time(&record.file_modified_at),
        title,
        tags,
        format_size_cell(record.file_size)
    )
}

/// Render the index as a table, newest session first
///
/// With a search term every match is shown; otherwise at most `limit` rows
/// (0 = no limit).
pub fn format_table(session_dir: &Path, document: &IndexDocument, limit: usize, search: Option<&str>) -> String {
    if document.is_empty() {
        return EMPTY_INDEX_MESSAGE.to_string();
    }

    let all = document.by_recency();
    let total = all.len();
    let search = search.filter(|term| !term.is_empty());

    let mut lines = vec![format!("Session directory: {}", session_dir.display()), String::new()];

    let rows: Vec<(&str, &SessionRecord)> = match search {
        Some(term) => {
            let hits: Vec<_> = all.into_iter().filter(|(key, record)| matches_search(key, record, term)).collect();
            if hits.is_empty() {
                lines.push(format!("No sessions match \"{}\" ({} sessions total)", term, total));
                lines.push(String::new());
                lines.push("Try another keyword, or use `--limit 0` to list every session".to_string());
                return lines.join("\n");
            }
            lines.push(format!("Search \"{}\" matched {} of {} sessions:", term, hits.len(), total));
            hits
        }
        None if limit > 0 && total > limit => {
            lines.push(format!("Recoverable sessions (newest first, showing {} of {}):", limit, total));
            all.into_iter().take(limit).collect()
        }
        None => {
            lines.push(format!("Recoverable sessions (newest first, {} total):", total));
            all
        }
    };

    lines.push(String::new());
    lines.extend(header_lines());
    for (position, (key, record)) in rows.into_iter().enumerate() {
        lines.push(format_row(position + 1, key, record));
    }

    lines.push(String::new());
    lines.push("---".to_string());
    if search.is_none() {
        if limit > 0 && total > limit {
            lines.push("Use `--limit 0` to show all sessions, or `--limit 50` for the first 50".to_string());
        }
        lines.push("Use `--search <keyword>` to filter sessions (e.g. `--search login`)".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    fn ts(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn record(title: &str, tags: &[&str], modified_secs: i64) -> SessionRecord {
        SessionRecord {
            session_id: "id".to_string(),
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            message_count: 1,
            file_size: 2048,
            file_modified_at: ts(modified_secs),
            created_at: None,
            last_indexed_at: ts(0),
        }
    }

    fn document(entries: Vec<(&str, SessionRecord)>) -> IndexDocument {
        let mut doc = IndexDocument::empty();
        for (key, record) in entries {
            doc.sessions.insert(key.to_string(), record);
        }
        doc
    }

    fn data_rows(output: &str) -> Vec<&str> {
        output.lines().filter(|line| line.starts_with("| [")).collect()
    }

    #[test]
    fn test_header_aligns_with_rows() {
        let [header, rule] = header_lines();
        let row = format_row(1, "s1", &record("Title", &["api"], 10));
        assert_eq!(header.chars().count(), rule.chars().count());
        assert_eq!(header.chars().count(), row.chars().count());
        assert!(header.starts_with("| #    | File "));
    }

    #[test]
    fn test_empty_index() {
        let out = format_table(Path::new("/tmp/s"), &IndexDocument::empty(), 10, None);
        assert_eq!(out, EMPTY_INDEX_MESSAGE);
    }

    #[test]
    fn test_rows_newest_first() {
        let doc = document(vec![
            ("old", record("Old session", &[], 1_700_000_000)),
            ("new", record("New session", &["api"], 1_700_100_000)),
        ]);
        let out = format_table(Path::new("/tmp/s"), &doc, 10, None);
        let rows = data_rows(&out);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("| [ 1] | new.jsonl"));
        assert!(rows[0].contains("#api"));
        assert!(rows[1].contains("Old session"));
        assert!(rows[1].contains(" - "));
        assert!(out.starts_with("Session directory: /tmp/s"));
    }

    #[test]
    fn test_limit_and_hint() {
        let doc = document((0..5).map(|i| (["a", "b", "c", "d", "e"][i], record("t", &[], i as i64))).collect());
        let out = format_table(Path::new("/tmp/s"), &doc, 2, None);
        assert_eq!(data_rows(&out).len(), 2);
        assert!(out.contains("showing 2 of 5"));
        assert!(out.contains("--limit 0"));
        assert!(out.contains("--search"));

        let unlimited = format_table(Path::new("/tmp/s"), &doc, 0, None);
        assert_eq!(data_rows(&unlimited).len(), 5);
        assert!(!unlimited.contains("--limit 50"));
    }

    #[test]
    fn test_search_ignores_limit() {
        let doc = document((0..5).map(|i| (["a", "b", "c", "d", "e"][i], record("修复登录错误", &[], i as i64))).collect());
        let out = format_table(Path::new("/tmp/s"), &doc, 2, Some("登录"));
        assert_eq!(data_rows(&out).len(), 5);
        assert!(out.contains("matched 5 of 5"));
        assert!(!out.contains("--search <keyword>"));
    }

    #[test]
    fn test_search_filters() {
        let doc = document(vec![
            ("s1", record("修复登录错误", &["bug-fix"], 10)),
            ("s2", record("新增订单接口", &["feature"], 20)),
        ]);
        let out = format_table(Path::new("/tmp/s"), &doc, 10, Some("登录"));
        let rows = data_rows(&out);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains("s1.jsonl"));
    }

    #[test]
    fn test_search_no_results() {
        let doc = document(vec![("s1", record("Fix cache", &[], 10))]);
        let out = format_table(Path::new("/tmp/s"), &doc, 10, Some("nothing-like-this"));
        assert!(out.contains("No sessions match \"nothing-like-this\" (1 sessions total)"));
        assert!(data_rows(&out).is_empty());
    }

    #[test]
    fn test_matches_search_fields() {
        let rec = record("Fix Cache", &["bug-fix", "cache"], 1_700_000_000);
        assert!(matches_search("key-1", &rec, "cache"));
        assert!(matches_search("key-1", &rec, "FIX"));
        assert!(matches_search("key-1", &rec, "bug-fix cache"));
        assert!(matches_search("key-1", &rec, "KEY-1"));
        assert!(matches_search("key-1", &rec, "2023-11-14"));
        assert!(!matches_search("key-1", &rec, "deploy"));
    }

    #[test]
    fn test_row_sanitizes_and_truncates_title() {
        let long = format!("\x1b[31m{}\x1b[0m", "t".repeat(40));
        let doc = document(vec![("s1", record(&long, &[], 10))]);
        let out = format_table(Path::new("/tmp/s"), &doc, 10, None);
        let row = data_rows(&out)[0];
        assert!(!row.contains('\x1b'));
        assert!(row.contains(&format!("{}...", "t".repeat(29))));
    }
}
