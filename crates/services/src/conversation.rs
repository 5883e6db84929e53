//! Conversation summaries.

/// Maximum number of characters kept before a summary is truncated.
pub const SUMMARY_LIMIT: usize = 200;

/// Summarize a conversation by truncating it to [`SUMMARY_LIMIT`]
/// characters, appending an ellipsis when anything was cut.
///
/// Truncation counts characters, not bytes, so multi-byte text is never
/// split mid-character.
pub fn summarize(conversation: &str) -> String {
    let mut chars = conversation.char_indices();
    match chars.nth(SUMMARY_LIMIT) {
        Some((byte_offset, _)) => format!("{}...", &conversation[..byte_offset]),
        None => conversation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_returned_verbatim() {
        assert_eq!(summarize("hello"), "hello");
        assert_eq!(summarize(""), "");
    }

    #[test]
    fn test_exactly_at_limit_not_truncated() {
        let text = "a".repeat(SUMMARY_LIMIT);
        assert_eq!(summarize(&text), text);
    }

    #[test]
    fn test_long_text_truncated_with_ellipsis() {
        let text = "a".repeat(SUMMARY_LIMIT + 50);
        let summary = summarize(&text);
        assert_eq!(summary.chars().count(), SUMMARY_LIMIT + 3);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_multibyte_text_not_split() {
        let text = "é".repeat(SUMMARY_LIMIT + 10);
        let summary = summarize(&text);
        assert!(summary.ends_with("..."));
        assert_eq!(summary.chars().count(), SUMMARY_LIMIT + 3);
    }
}
