//! Content normalization: `message.content` in any supported shape to one string

use serde_json::Value;

use crate::models::{ContentBlock, MessageContent, TypedBlock};

const BLOCK_TYPE_TEXT: &str = "text";
const BLOCK_TYPE_TOOL_RESULT: &str = "tool_result";

/// Reduce message content to a single string
///
/// Plain text is returned unchanged. A block sequence yields the space-joined text of
/// bare string blocks, `text` blocks and `tool_result` blocks whose content is a
/// string, in order. Absent or unsupported content yields an empty string.
pub fn normalize_content(content: Option<&MessageContent>) -> String {
    match content {
        Some(MessageContent::PlainText(text)) => text.clone(),
        Some(MessageContent::BlockSequence(blocks)) => {
            blocks.iter().filter_map(block_text).collect::<Vec<_>>().join(" ")
        }
        None => String::new(),
    }
}

/// Plain-text pieces typed by the user: the string body, or each `text` block
///
/// Tool results are left out; command and heading markers only appear in text the
/// user (or the client on the user's behalf) wrote.
pub fn text_segments(content: Option<&MessageContent>) -> Vec<String> {
    match content {
        Some(MessageContent::PlainText(text)) => vec![text.clone()],
        Some(MessageContent::BlockSequence(blocks)) => blocks
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Typed(typed) if is_type(typed, BLOCK_TYPE_TEXT) => {
                    value_str(typed.text.as_ref()).map(str::to_string)
                }
                _ => None,
            })
            .collect(),
        None => Vec::new(),
    }
}

fn block_text(block: &ContentBlock) -> Option<&str> {
    match block {
        ContentBlock::Bare(text) => Some(text.as_str()),
        ContentBlock::Typed(typed) if is_type(typed, BLOCK_TYPE_TEXT) => value_str(typed.text.as_ref()),
        ContentBlock::Typed(typed) if is_type(typed, BLOCK_TYPE_TOOL_RESULT) => {
            value_str(typed.content.as_ref())
        }
        _ => None,
    }
}

fn is_type(block: &TypedBlock, expected: &str) -> bool {
    block.block_type.as_deref() == Some(expected)
}

fn value_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Option<MessageContent> {
        serde_json::from_str(json).ok()
    }

    #[test]
    fn test_plain_text_unchanged() {
        let content = parse(r#""  hello\nworld ""#);
        assert_eq!(normalize_content(content.as_ref()), "  hello\nworld ");
    }

    #[test]
    fn test_blocks_joined_in_order() {
        let content = parse(
            r#"[{"type":"text","text":"first"},{"type":"tool_result","tool_use_id":"t1","content":"second"},"third"]"#,
        );
        assert_eq!(normalize_content(content.as_ref()), "first second third");
    }

    #[test]
    fn test_blocks_without_extractable_text_skipped() {
        let content = parse(
            r#"[{"type":"thinking","thinking":"hmm"},{"type":"tool_use","id":"x","name":"read","input":{}},{"type":"text","text":"answer"},{"type":"tool_result","content":[{"type":"text","text":"nested"}]},{"type":"image","source":{}},7]"#,
        );
        assert_eq!(normalize_content(content.as_ref()), "answer");
    }

    #[test]
    fn test_absent_content_is_empty() {
        assert_eq!(normalize_content(None), "");
        assert_eq!(normalize_content(parse("[]").as_ref()), "");
    }

    #[test]
    fn test_text_segments_exclude_tool_results() {
        let content = parse(
            r#"[{"type":"tool_result","content":"<command-name>/x</command-name>"},{"type":"text","text":"one"},{"type":"text","text":"two"}]"#,
        );
        assert_eq!(text_segments(content.as_ref()), vec!["one", "two"]);
    }

    #[test]
    fn test_text_segments_plain_text() {
        let content = parse(r##""# Heading""##);
        assert_eq!(text_segments(content.as_ref()), vec!["# Heading"]);
        assert!(text_segments(None).is_empty());
    }
}
