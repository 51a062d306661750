//! Regex-based matcher
//!
//! Backed by `fancy_regex` so patterns may use lookaround (the generic
//! number pattern needs both lookbehind and lookahead). Patterns without
//! fancy features are delegated to the `regex` engine internally.

use super::Matcher;
use crate::domain::{Result, VeilError};
use fancy_regex::{Regex, RegexBuilder};
use std::ops::Range;

/// Compiled regex matcher
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
    source: String,
}

impl RegexMatcher {
    /// Compile a pattern
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| VeilError::Pattern(format!("Invalid regex '{pattern}': {e}")))?;
        Ok(Self {
            regex,
            source: pattern.to_string(),
        })
    }

    /// Compile a pattern with a custom backtracking limit
    ///
    /// Exceeding the limit while matching is an error from `find_at`, which
    /// the engine records as a failure for that category.
    pub fn with_backtrack_limit(pattern: &str, limit: usize) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .backtrack_limit(limit)
            .build()
            .map_err(|e| VeilError::Pattern(format!("Invalid regex '{pattern}': {e}")))?;
        Ok(Self {
            regex,
            source: pattern.to_string(),
        })
    }

    /// Whether the pattern matches anywhere in `text`
    pub fn is_match(&self, text: &str) -> bool {
        matches!(self.regex.is_match(text), Ok(true))
    }
}

impl Matcher for RegexMatcher {
    fn find_at(&self, text: &str, start: usize) -> anyhow::Result<Option<Range<usize>>> {
        let found = self.regex.find_from_pos(text, start)?;
        Ok(found.map(|m| m.start()..m.end()))
    }

    fn describe(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_is_pattern_error() {
        let result = RegexMatcher::new("(unclosed");
        assert!(matches!(result, Err(VeilError::Pattern(_))));
    }

    #[test]
    fn test_find_at_respects_start() {
        let matcher = RegexMatcher::new(r"\d+").unwrap();
        assert_eq!(matcher.find_at("a1 b22", 0).unwrap(), Some(1..2));
        assert_eq!(matcher.find_at("a1 b22", 2).unwrap(), Some(4..6));
        assert_eq!(matcher.find_at("a1 b22", 6).unwrap(), None);
    }

    #[test]
    fn test_lookbehind_sees_text_before_start() {
        let matcher = RegexMatcher::new(r"(?<!\w)\d+").unwrap();
        // The digit at offset 1 is preceded by a word character
        assert_eq!(matcher.find_at("x12 34", 1).unwrap(), Some(4..6));
    }

    #[test]
    fn test_describe_returns_source() {
        let matcher = RegexMatcher::new(r"\bMRN\b").unwrap();
        assert_eq!(matcher.describe(), r"\bMRN\b");
        assert!(matcher.is_match("MRN 1"));
    }
}
