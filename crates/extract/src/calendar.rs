//! Calendar entity extraction

use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use workmate_core::Entities;

use crate::EMAIL_RE;

static EXPLICIT_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:titled|title|called):\s*([^,\n]+)").unwrap());
static EVENT_TITLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"event:\s*([^,\n]+)").unwrap());
static TITLE_TRAILER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+(?:at|on|with)\s+.*$").unwrap());

static AMPM_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2}):(\d{2})\s*(am|pm)\b").unwrap());
static AMPM_HOUR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{1,2})\s*(am|pm)\b").unwrap());
static CLOCK_24H_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{1,2}):(\d{2})\b").unwrap());
static RELATIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bin\s+(\d+)\s+(hours?|minutes?)\b").unwrap());

/// Title, attendee emails and a best-effort start time (RFC 3339).
pub fn extract_calendar_entities(message: &str) -> Entities {
    let mut entities = Entities::new();
    let lower = message.to_lowercase();

    if let Some(title) = extract_title(&lower) {
        entities.insert("title".to_string(), json!(title));
    }

    let mut attendees: Vec<String> = Vec::new();
    for m in EMAIL_RE.find_iter(message) {
        let email = m.as_str().to_string();
        if !attendees.contains(&email) {
            attendees.push(email);
        }
    }
    if !attendees.is_empty() {
        entities.insert("attendees".to_string(), json!(attendees));
    }

    let time = parse_time(&lower, Utc::now());
    entities.insert("time".to_string(), json!(time.to_rfc3339()));

    entities
}

fn extract_title(lower: &str) -> Option<String> {
    let captured = EXPLICIT_TITLE_RE
        .captures(lower)
        .or_else(|| EVENT_TITLE_RE.captures(lower))?;
    let title = TITLE_TRAILER_RE.replace(captured[1].trim(), "").trim().to_string();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// `H:MM am/pm`, bare hour am/pm, 24-hour `H:MM` or relative
/// "in N hours/minutes", anchored to `now`'s date. Nothing parseable
/// defaults to one hour from now.
pub fn parse_time(lower: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    if let Some(m) = AMPM_TIME_RE.captures(lower) {
        if let (Ok(hour), Ok(minute)) = (m[1].parse::<u32>(), m[2].parse::<u32>()) {
            return at_clock(now, to_24h(hour, &m[3]), minute);
        }
    }
    if let Some(m) = AMPM_HOUR_RE.captures(lower) {
        if let Ok(hour) = m[1].parse::<u32>() {
            return at_clock(now, to_24h(hour, &m[2]), 0);
        }
    }
    if let Some(m) = CLOCK_24H_RE.captures(lower) {
        if let (Ok(hour), Ok(minute)) = (m[1].parse::<u32>(), m[2].parse::<u32>()) {
            if hour < 24 && minute < 60 {
                return at_clock(now, hour, minute);
            }
        }
    }
    if let Some(m) = RELATIVE_RE.captures(lower) {
        if let Ok(n) = m[1].parse::<i64>() {
            let delta = if m[2].starts_with("hour") {
                Duration::hours(n)
            } else {
                Duration::minutes(n)
            };
            return now + delta;
        }
    }
    now + Duration::hours(1)
}

fn to_24h(hour: u32, meridiem: &str) -> u32 {
    match (hour % 12, meridiem) {
        (h, "pm") => h + 12,
        (h, _) => h,
    }
}

fn at_clock(now: DateTime<Utc>, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(
        &now.date_naive()
            .and_hms_opt(hour.min(23), minute.min(59), 0)
            .unwrap_or_else(|| now.naive_utc()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> DateTime<Utc> {
        Utc.from_utc_datetime(
            &NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_title_explicit_beats_event() {
        let entities =
            extract_calendar_entities("schedule event: weekly sync titled: sprint review");
        assert_eq!(entities["title"], json!("sprint review"));
    }

    #[test]
    fn test_title_trailer_trimmed() {
        let entities = extract_calendar_entities("create meeting titled: planning at 3pm");
        assert_eq!(entities["title"], json!("planning"));
    }

    #[test]
    fn test_attendees_deduplicated() {
        let entities = extract_calendar_entities(
            "invite a@example.com and b@example.com and a@example.com",
        );
        assert_eq!(entities["attendees"], json!(["a@example.com", "b@example.com"]));
    }

    #[test]
    fn test_parse_time_ampm_with_minutes() {
        let t = parse_time("meet at 3:30 pm", noon());
        assert_eq!((t.hour(), t.minute()), (15, 30));
    }

    #[test]
    fn test_parse_time_bare_hour() {
        let t = parse_time("meet at 9am", noon());
        assert_eq!((t.hour(), t.minute()), (9, 0));
        let t = parse_time("meet at 12pm", noon());
        assert_eq!(t.hour(), 12);
    }

    #[test]
    fn test_parse_time_24h() {
        let t = parse_time("meet at 14:45", noon());
        assert_eq!((t.hour(), t.minute()), (14, 45));
    }

    #[test]
    fn test_parse_time_relative() {
        let t = parse_time("remind me in 2 hours", noon());
        assert_eq!(t, noon() + Duration::hours(2));
        let t = parse_time("remind me in 30 minutes", noon());
        assert_eq!(t, noon() + Duration::minutes(30));
    }

    #[test]
    fn test_parse_time_default() {
        assert_eq!(parse_time("schedule a meeting", noon()), noon() + Duration::hours(1));
    }
}
