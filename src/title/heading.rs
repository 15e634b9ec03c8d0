//! Titles from a markdown heading opening a prompt

use once_cell::sync::Lazy;
use regex::Regex;

use super::{COMMAND_WINDOW, TitleContext};

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,2}\s+(.+)$").expect("valid regex"));

/// Headings longer than this are the start of a full prompt, not a title
const MAX_HEADING_CHARS: usize = 20;

/// Level-1 or level-2 heading on the first non-blank line of a prompt
pub fn heading_from_prompt(text: &str) -> Option<String> {
    let first_line = text.lines().map(str::trim).find(|line| !line.is_empty())?;
    let caps = HEADING_RE.captures(first_line)?;
    let heading = caps.get(1)?.as_str().trim();

    if heading.is_empty() || heading.chars().count() > MAX_HEADING_CHARS {
        return None;
    }
    Some(heading.to_string())
}

pub fn heading_title(context: &TitleContext<'_>) -> Option<String> {
    context.segments.iter().take(COMMAND_WINDOW).find_map(|segment| heading_from_prompt(segment))
}
