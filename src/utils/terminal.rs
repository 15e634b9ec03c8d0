//! Terminal output sanitization for table cells
//!
//! Titles and tags are derived from log content, which is user- and tool-controlled.
//! Before they are written into a table row, ANSI escape sequences are removed and
//! every other control character becomes a space so a cell stays on one line.

/// Strips ANSI CSI escape sequences and flattens control characters to spaces
///
/// # Examples
///
/// ```
/// use session_indexer::utils::terminal::sanitize_cell;
///
/// assert_eq!(sanitize_cell("\x1b[31mRed\x1b[0m\ttext"), "Red text");
/// ```
pub fn sanitize_cell(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // CSI sequence: ESC [ params... final letter
            if chars.peek() == Some(&'[') {
                chars.next();
                while let Some(next_ch) = chars.next() {
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }

        if ch == '\n' || ch == '\r' || ch == '\t' {
            result.push(' ');
        } else if ch == '|' {
            // Would split the markdown-style row
            result.push('/');
        } else if !ch.is_control() {
            result.push(ch);
        }
    }

    result
}
