//! Linear text search over extracted document lines.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single query hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchMatch {
    /// 1-based line number of the match.
    pub line: usize,
    /// The matched line, original case, trimmed.
    pub text: String,
    /// The line before, the matched line, and the line after (clamped at
    /// document boundaries), joined with newlines, original text.
    pub context: String,
}

/// Scan every line for a substring match.
///
/// Both the line and the query are lowercased unless `case_sensitive` is
/// set. Matches come back in ascending line order; there is no result limit.
pub fn search_lines(full_text: &str, query: &str, case_sensitive: bool) -> Vec<SearchMatch> {
    let lines: Vec<&str> = full_text.split('\n').collect();
    let needle = if case_sensitive { query.to_string() } else { query.to_lowercase() };

    let mut matches = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        let haystack = if case_sensitive { (*line).to_string() } else { line.to_lowercase() };
        if !haystack.contains(&needle) {
            continue;
        }

        let context_start = index.saturating_sub(1);
        let context_end = (index + 1).min(lines.len() - 1);
        let context = lines[context_start..=context_end].join("\n");

        matches.push(SearchMatch { line: index + 1, text: line.trim().to_string(), context });
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "alpha one\nfoo bar\ncharlie three\nFoo again\nlast line";

    #[test]
    fn test_case_insensitive_matches_both() {
        let matches = search_lines(TEXT, "Foo", false);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].line, 2);
        assert_eq!(matches[1].line, 4);
    }

    #[test]
    fn test_case_sensitive_skips_lowercase() {
        let matches = search_lines(TEXT, "Foo", true);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].line, 4);
        assert_eq!(matches[0].text, "Foo again");
    }

    #[test]
    fn test_context_has_both_neighbors() {
        let matches = search_lines(TEXT, "charlie", false);
        assert_eq!(matches[0].context, "foo bar\ncharlie three\nFoo again");
    }

    #[test]
    fn test_context_clamps_at_first_line() {
        let matches = search_lines(TEXT, "alpha", false);
        assert_eq!(matches[0].line, 1);
        assert_eq!(matches[0].context, "alpha one\nfoo bar");
    }

    #[test]
    fn test_context_clamps_at_last_line() {
        let matches = search_lines(TEXT, "last", false);
        assert_eq!(matches[0].context, "Foo again\nlast line");
    }

    #[test]
    fn test_match_text_is_trimmed_original_case() {
        let matches = search_lines("  Padded Line  \nother", "padded", false);
        assert_eq!(matches[0].text, "Padded Line");
        // Context keeps the original, untrimmed text.
        assert_eq!(matches[0].context, "  Padded Line  \nother");
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(search_lines(TEXT, "zebra", false).is_empty());
    }

    #[test]
    fn test_matches_ascend_by_line() {
        let matches = search_lines("x\ny x\nx\n", "x", false);
        let lines: Vec<usize> = matches.iter().map(|m| m.line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }
}
