//! Jira entity extraction

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use workmate_core::Entities;

use crate::EMAIL_RE;

/// Searched against the original-case message so prose words never look
/// like issue keys.
static ISSUE_KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z]+-\d+)").unwrap());

static COMMENT_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"add\s+comment\s+to\s+jira\s+[a-z]+-\d+\s+(.+)",
        r"add\s+comment\s+to\s+[a-z]+-\d+\s+(.+)",
        r"comment\s+on\s+[a-z]+-\d+\s+(.+)",
        r"reply\s+to\s+[a-z]+-\d+\s+(.+)",
        r"add\s+comment\s+[a-z]+-\d+\s+(.+)",
        r"comment\s+[a-z]+-\d+\s+(.+)",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

static ASSIGNEE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"assign(?:ed)?\s+to\s+([^\s,]+)",
        r"assignee[:\s]\s*([^\s,]+)",
        r"give\s+to\s+([^\s,]+)",
        r"hand\s+over\s+to\s+([^\s,]+)",
        r"transfer\s+to\s+([^\s,]+)",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

const ASSIGNEE_STOPWORDS: &[&str] = &["me", "myself", "the", "a", "an", "someone", "it"];

static TO_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bto\s+([^\s,]+)").unwrap());

/// Token to canonical status name. Longer and more specific tokens come
/// first so "on qa" wins over "qa" and "in progress" over "progress".
const STATUS_TABLE: &[(&str, &str)] = &[
    ("in progress", "In Progress"),
    ("code review", "Code Review"),
    ("peer review", "Peer Review"),
    ("inprogress", "In Progress"),
    ("codereview", "Code Review"),
    ("peerreview", "Peer Review"),
    ("completed", "Completed"),
    ("cancelled", "Cancelled"),
    ("duplicate", "Duplicate"),
    ("on hold", "On Hold"),
    ("rejected", "Rejected"),
    ("resolved", "Resolved"),
    ("verified", "Verified"),
    ("wontfix", "WON'T FIX"),
    ("blocked", "Blocked"),
    ("invalid", "Invalid"),
    ("pending", "Pending"),
    ("wontdo", "Won't Do"),
    ("closed", "Closed"),
    ("onhold", "On Hold"),
    ("to do", "To Do"),
    ("on qa", "ON_QA"),
    ("ready", "Ready"),
    ("done", "Done"),
    ("onqa", "ON_QA"),
    ("open", "Open"),
    ("todo", "To Do"),
    ("new", "New"),
    ("qa", "QA"),
];

/// Issue key, status, assignee and comment text.
pub fn extract_jira_entities(message: &str) -> Entities {
    let mut entities = Entities::new();
    let lower = message.to_lowercase();

    let issue_key = ISSUE_KEY_RE
        .captures(message)
        .map(|m| m[1].to_uppercase());
    if let Some(key) = &issue_key {
        entities.insert("issue_key".to_string(), json!(key));
    }

    if let Some(status) = extract_status(&lower) {
        entities.insert("status".to_string(), json!(status));
    }

    if let Some(assignee) = extract_assignee(message, &lower, issue_key.as_deref()) {
        entities.insert("assignee".to_string(), json!(assignee));
    }

    if let Some(comment) = extract_comment_text(&lower, issue_key.as_deref()) {
        entities.insert("comment_text".to_string(), json!(comment));
    }

    entities
}

static STATUS_RES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    STATUS_TABLE
        .iter()
        .map(|(token, canonical)| {
            let pattern = format!(r"\b{}\b", regex::escape(token));
            (Regex::new(&pattern).unwrap(), *canonical)
        })
        .collect()
});

/// Every canonical status named in the message, for combined filters
/// like "open and to do".
pub fn extract_status_filters(message: &str) -> Vec<String> {
    let lower = message.to_lowercase();
    let mut found = Vec::new();
    for (re, canonical) in STATUS_RES.iter() {
        if !found.iter().any(|s: &String| s == *canonical) && re.is_match(&lower) {
            found.push((*canonical).to_string());
        }
    }
    found
}

fn extract_status(lower: &str) -> Option<String> {
    STATUS_RES
        .iter()
        .find(|(re, _)| re.is_match(lower))
        .map(|(_, canonical)| (*canonical).to_string())
}

fn extract_assignee(message: &str, lower: &str, issue_key: Option<&str>) -> Option<String> {
    if let Some(m) = EMAIL_RE.find(message) {
        return Some(m.as_str().to_string());
    }

    let key_lower = issue_key.map(|k| k.to_lowercase());
    let is_candidate = |token: &str| {
        !ASSIGNEE_STOPWORDS.contains(&token) && key_lower.as_deref() != Some(token)
    };

    for re in ASSIGNEE_RES.iter() {
        if let Some(m) = re.captures(lower) {
            let token = m[1].trim().to_string();
            if is_candidate(&token) {
                return Some(token);
            }
        }
    }

    // "assign OCPQE-5 to skundu" puts the key between the verb and the
    // recipient, so fall back to the last "to <token>" in assignment
    // phrasing only
    if lower.contains("assign") || lower.contains("hand over") || lower.contains("transfer") {
        for m in TO_TOKEN_RE.captures_iter(lower) {
            let token = m[1].trim().to_string();
            if is_candidate(&token) {
                return Some(token);
            }
        }
    }
    None
}

fn extract_comment_text(lower: &str, issue_key: Option<&str>) -> Option<String> {
    for re in COMMENT_RES.iter() {
        if let Some(m) = re.captures(lower) {
            let text = m[1].trim().to_string();
            if !text.is_empty() {
                return Some(text);
            }
        }
    }

    // fall back to everything after the issue key with leading filler
    // verbs stripped, but only when the message sounds like a comment
    if !["comment", "reply", "saying", "note"].iter().any(|w| lower.contains(w)) {
        return None;
    }
    let key = issue_key?.to_lowercase();
    let idx = lower.find(&key)?;
    let mut rest = lower[idx + key.len()..].trim_start_matches([':', '-', ',']).trim();
    for filler in ["saying", "with", "that"] {
        if let Some(stripped) = rest.strip_prefix(filler) {
            rest = stripped.trim_start();
        }
    }
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_key_uppercase_only() {
        let entities = extract_jira_entities("what's the status of OCPBUGS-1234");
        assert_eq!(entities["issue_key"], json!("OCPBUGS-1234"));
        assert!(extract_jira_entities("fix the abc-123 thing").get("issue_key").is_none());
    }

    #[test]
    fn test_comment_text_family() {
        let entities = extract_jira_entities("add comment to OCPQE-30241 working on it");
        assert_eq!(entities["comment_text"], json!("working on it"));

        let entities = extract_jira_entities("comment on OCPQE-1 testing done");
        assert_eq!(entities["comment_text"], json!("testing done"));
    }

    #[test]
    fn test_comment_text_fallback_after_key() {
        let entities = extract_jira_entities("OCPQE-30241 saying looks good to me");
        assert_eq!(entities["comment_text"], json!("looks good to me"));
    }

    #[test]
    fn test_status_longest_token_first() {
        let entities = extract_jira_entities("move OCPBUGS-9 to on qa");
        assert_eq!(entities["status"], json!("ON_QA"));

        let entities = extract_jira_entities("update OCPBUGS-9 to in progress");
        assert_eq!(entities["status"], json!("In Progress"));
    }

    #[test]
    fn test_status_filters_combined() {
        let filters = extract_status_filters("show my issues with open and to do status");
        assert!(filters.contains(&"Open".to_string()));
        assert!(filters.contains(&"To Do".to_string()));
    }

    #[test]
    fn test_assignee_email_wins() {
        let entities = extract_jira_entities("assign OCPQE-5 to skundu@example.com");
        assert_eq!(entities["assignee"], json!("skundu@example.com"));
    }

    #[test]
    fn test_assignee_token() {
        let entities = extract_jira_entities("assign OCPQE-5 to skundu");
        assert_eq!(entities["assignee"], json!("skundu"));
    }

    #[test]
    fn test_assignee_skips_issue_key() {
        let entities = extract_jira_entities("assign to OCPQE-5");
        assert!(entities.get("assignee").is_none());
    }

    #[test]
    fn test_no_signal() {
        assert!(extract_jira_entities("hello there").is_empty());
    }
}
