//! Email entity extraction

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use workmate_core::Entities;

use crate::EMAIL_RE;

static SUBJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:subject|titled|about):\s*(.+)").unwrap());
static BODY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:message|body|text):\s*(.+)").unwrap());
static SUBJECT_TRAILER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+and\s+(?:message|body|text)\b.*$").unwrap());
static COUNT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*emails?").unwrap());
static SENDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:from|sender)\s+([^\s]+@[^\s]+)").unwrap());
static EMAIL_NUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"email\s*#?(\d+)").unwrap());
static BARE_NUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\d+)").unwrap());

const ORDINALS: &[(&str, i64)] = &[
    ("first", 1),
    ("second", 2),
    ("third", 3),
    ("fourth", 4),
    ("fifth", 5),
    ("sixth", 6),
    ("seventh", 7),
    ("eighth", 8),
    ("ninth", 9),
    ("tenth", 10),
];

static ORDINAL_RES: Lazy<Vec<(Regex, i64)>> = Lazy::new(|| {
    ORDINALS
        .iter()
        .map(|(word, number)| (Regex::new(&format!(r"\b{word}\b")).unwrap(), *number))
        .collect()
});

/// Recipient, subject and body for send-style requests, plus sender and
/// count signals for search-style ones.
pub fn extract_email_entities(message: &str) -> Entities {
    let mut entities = Entities::new();
    let lower = message.to_lowercase();

    if let Some(m) = SENDER_RE.captures(&lower) {
        entities.insert("sender".to_string(), json!(m[1].to_string()));
    }
    if let Some(m) = EMAIL_RE.find(message) {
        entities.insert("to_email".to_string(), json!(m.as_str().to_string()));
    }
    if let Some(m) = COUNT_RE.captures(&lower) {
        if let Ok(count) = m[1].parse::<i64>() {
            entities.insert("count".to_string(), json!(count));
        }
    }
    if let Some(m) = SUBJECT_RE.captures(&lower) {
        let subject = SUBJECT_TRAILER_RE.replace(m[1].trim(), "").trim().to_string();
        if !subject.is_empty() {
            entities.insert("subject".to_string(), json!(subject));
        }
    }
    if let Some(m) = BODY_RE.captures(&lower) {
        let body = m[1].trim().to_string();
        if !body.is_empty() {
            entities.insert("body".to_string(), json!(body));
        }
    }

    entities
}

/// Which email an ordinal-style request refers to. Ordinal words win over
/// numeric forms; nothing found defaults to the first email.
pub fn extract_email_number(message: &str) -> i64 {
    let lower = message.to_lowercase();

    for (re, number) in ORDINAL_RES.iter() {
        if re.is_match(&lower) {
            return *number;
        }
    }

    if let Some(m) = EMAIL_NUM_RE.captures(&lower) {
        if let Ok(n) = m[1].parse() {
            return n;
        }
    }
    if let Some(m) = BARE_NUM_RE.captures(&lower) {
        if let Ok(n) = m[1].parse() {
            return n;
        }
    }

    1
}
