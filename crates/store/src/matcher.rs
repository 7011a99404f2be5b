//! Pattern matching for stored patterns
//!
//! A pattern is either a literal (case-insensitive substring test) or a
//! `regex:`-prefixed expression (case-insensitive search over the whole
//! message). Malformed regexes are logged once and treated as permanent
//! non-matches; matching never fails.

use dashmap::DashMap;
use regex::{Regex, RegexBuilder};

const REGEX_PREFIX: &str = "regex:";

/// Matcher with a cache of compiled regex patterns.
///
/// Compilation results are cached by pattern text, including failures, so
/// a malformed pattern is compiled (and warned about) only once.
#[derive(Debug, Default)]
pub struct PatternMatcher {
    compiled: DashMap<String, Option<Regex>>,
}

impl PatternMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test whether `message` matches `pattern`. Side-effect free apart
    /// from the compile cache; never panics or returns an error.
    pub fn matches(&self, message: &str, pattern: &str) -> bool {
        match pattern.strip_prefix(REGEX_PREFIX) {
            Some(expr) => self.regex_matches(message, expr),
            None => {
                let message = message.to_lowercase();
                message.contains(&pattern.to_lowercase())
            }
        }
    }

    fn regex_matches(&self, message: &str, expr: &str) -> bool {
        if let Some(cached) = self.compiled.get(expr) {
            return cached
                .as_ref()
                .map(|re| re.is_match(message))
                .unwrap_or(false);
        }

        let compiled = match RegexBuilder::new(expr).case_insensitive(true).build() {
            Ok(re) => Some(re),
            Err(err) => {
                tracing::warn!(pattern = expr, error = %err, "Malformed stored regex pattern, treating as non-match");
                None
            }
        };

        let matched = compiled
            .as_ref()
            .map(|re| re.is_match(message))
            .unwrap_or(false);
        self.compiled.insert(expr.to_string(), compiled);
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_substring_case_insensitive() {
        let matcher = PatternMatcher::new();
        assert!(matcher.matches("Show My Unread Emails", "unread emails"));
        assert!(matcher.matches("show my unread emails", "UNREAD"));
        assert!(!matcher.matches("show my calendar", "unread"));
    }

    #[test]
    fn test_regex_search_semantics() {
        let matcher = PatternMatcher::new();
        assert!(matcher.matches(
            "what's the status of OCPBUGS-1234",
            "regex:[A-Z]+-\\d+"
        ));
        // search, not full match
        assert!(matcher.matches("prefix list pods suffix", "regex:list\\s+pods"));
    }

    #[test]
    fn test_regex_case_insensitive() {
        let matcher = PatternMatcher::new();
        assert!(matcher.matches("ADD COMMENT TO ocpqe-1", "regex:add comment"));
    }

    #[test]
    fn test_malformed_regex_is_non_match() {
        let matcher = PatternMatcher::new();
        assert!(!matcher.matches("anything", "regex:[unclosed"));
        // cached failure path
        assert!(!matcher.matches("anything else", "regex:[unclosed"));
    }

    #[test]
    fn test_empty_message() {
        let matcher = PatternMatcher::new();
        assert!(!matcher.matches("", "unread"));
        assert!(matcher.matches("", ""));
    }
}
