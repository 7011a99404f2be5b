//! Entity extraction
//!
//! One pure function per intent family. Every extractor is total: absence
//! of a signal yields an omitted key or an empty map, never an error. The
//! classifier attaches these to its rules so a classification carries its
//! structured entities from the start.

pub mod calendar;
pub mod email;
pub mod github;
pub mod jira;
pub mod kubernetes;

pub use calendar::extract_calendar_entities;
pub use email::{extract_email_entities, extract_email_number};
pub use github::extract_github_entities;
pub use jira::{extract_jira_entities, extract_status_filters};
pub use kubernetes::extract_kubernetes_entities;

use once_cell::sync::Lazy;
use regex::Regex;

/// RFC-ish email address, shared across families.
pub(crate) static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap()
});
