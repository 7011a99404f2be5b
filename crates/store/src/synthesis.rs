//! Generalized-pattern synthesis from corrected interactions
//!
//! Turns a concrete message into a reusable pattern by abstracting
//! volatile tokens (issue keys, email addresses, a small dictionary of
//! known free-text words) into placeholders. A message with nothing to
//! abstract yields no pattern at all.

use once_cell::sync::Lazy;
use regex::RegexBuilder;

static ISSUE_KEY_RE: Lazy<regex::Regex> = Lazy::new(|| {
    RegexBuilder::new(r"\b[A-Z]+-\d+\b")
        .case_insensitive(true)
        .build()
        .unwrap()
});

static EMAIL_RE: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

/// Literal word -> placeholder replacements, applied after the regex passes.
const WORD_REPLACEMENTS: &[(&str, &str)] = &[
    ("skundu", "[USERNAME]"),
    ("rahul", "[USERNAME]"),
    ("working on it", "[COMMENT]"),
    ("testing", "[COMMENT]"),
    ("done", "[STATUS]"),
    ("in progress", "[STATUS]"),
    ("to do", "[STATUS]"),
];

/// Synthesize a generalized pattern from `message`, or `None` when no
/// volatile token could be abstracted.
pub fn generalize_message(message: &str) -> Option<String> {
    let lowered = message.to_lowercase();

    let mut pattern = ISSUE_KEY_RE.replace_all(&lowered, "[ISSUE_KEY]").into_owned();
    pattern = EMAIL_RE.replace_all(&pattern, "[EMAIL]").into_owned();
    for (word, placeholder) in WORD_REPLACEMENTS {
        pattern = pattern.replace(word, placeholder);
    }

    if pattern == lowered {
        None
    } else {
        Some(pattern)
    }
}
