//! Jira rules
//!
//! The sub-cascade is gated on an issue key or a Jira keyword. Comment
//! phrases come first so "add comment to KEY assign it later" is not
//! shadowed by the assign branch, and update verbs are checked after the
//! plain status lookup. Fetch variants keep the qa-contact precedence of
//! combined filters.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use workmate_core::{intents, Entities};
use workmate_extract::{extract_jira_entities, extract_status_filters};

use super::{CascadeRule, RuleContext, RuleSet};

static ISSUE_KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]+-\d+").unwrap());

const JIRA_KEYWORDS: &[&str] = &["jira", "sprint", "backlog", "issue"];

/// Shared with the Kubernetes gate: cluster command phrases are skipped
/// whenever a Jira signal is present.
pub fn has_jira_signal(ctx: &RuleContext) -> bool {
    ISSUE_KEY_RE.is_match(ctx.message) || JIRA_KEYWORDS.iter().any(|w| ctx.lower.contains(w))
}

/// Family extractor plus the multi-status filter list.
fn filter_entities(message: &str) -> Entities {
    let mut entities = extract_jira_entities(message);
    let filters = extract_status_filters(message);
    if !filters.is_empty() {
        entities.insert("status_filter".to_string(), json!(filters));
    }
    entities
}

fn fetch_entities_with(message: &str, filter: &str) -> Entities {
    let mut entities = filter_entities(message);
    entities.insert("filter".to_string(), json!(filter));
    entities
}

fn fetch_qa_contact_entities(message: &str) -> Entities {
    fetch_entities_with(message, "qa_contact")
}

fn fetch_assigned_entities(message: &str) -> Entities {
    fetch_entities_with(message, "assigned")
}

fn fetch_reported_entities(message: &str) -> Entities {
    fetch_entities_with(message, "reported")
}

fn fetch_mine_entities(message: &str) -> Entities {
    fetch_entities_with(message, "mine")
}

pub fn rules() -> RuleSet {
    RuleSet {
        name: "jira",
        gate: has_jira_signal,
        rules: vec![
            CascadeRule {
                name: "add_comment",
                intent: intents::ADD_JIRA_COMMENT,
                confidence: 0.95,
                predicate: |ctx| {
                    ctx.contains_any(&["add comment", "comment on", "add a comment"])
                        || (ctx.contains("reply to") && ISSUE_KEY_RE.is_match(ctx.message))
                },
                extractor: Some(extract_jira_entities),
            },
            CascadeRule {
                name: "assign",
                intent: intents::ASSIGN_JIRA_ISSUE,
                confidence: 0.95,
                predicate: |ctx| {
                    (ctx.contains("assign")
                        && !ctx.contains_any(&["assigned to me", "my assigned"]))
                        || ctx.contains_any(&["hand over", "transfer"])
                },
                extractor: Some(extract_jira_entities),
            },
            CascadeRule {
                name: "status_lookup",
                intent: intents::JIRA_STATUS_LOOKUP,
                confidence: 0.95,
                predicate: |ctx| {
                    ctx.contains("status")
                        && !ctx.contains_any(&["update", "change", "move", "set"])
                        && ISSUE_KEY_RE.is_match(ctx.message)
                },
                extractor: Some(extract_jira_entities),
            },
            CascadeRule {
                name: "update_status",
                intent: intents::UPDATE_JIRA_STATUS,
                confidence: 0.9,
                predicate: |ctx| {
                    ctx.contains_any(&["update", "change", "move", "set"])
                        && ISSUE_KEY_RE.is_match(ctx.message)
                },
                extractor: Some(extract_jira_entities),
            },
            CascadeRule {
                name: "metadata_query",
                intent: intents::JIRA_METADATA_QUERY,
                confidence: 0.85,
                predicate: |ctx| {
                    ctx.contains_any(&[
                        "when was",
                        "who is working on",
                        "who created",
                        "who reported",
                        "fix version",
                    ])
                },
                extractor: Some(extract_jira_entities),
            },
            CascadeRule {
                name: "advanced_filter",
                intent: intents::JIRA_ADVANCED_FILTER,
                confidence: 0.8,
                predicate: |ctx| {
                    ctx.contains_any(&["priority", "due date", "due this", "due by"])
                },
                extractor: Some(filter_entities),
            },
            CascadeRule {
                name: "sprint_query",
                intent: intents::JIRA_SPRINT_QUERY,
                confidence: 0.8,
                predicate: |ctx| ctx.contains_any(&["sprint", "backlog"]),
                extractor: Some(filter_entities),
            },
            // several named statuses at once is an advanced filter;
            // sprint wording takes precedence when both appear
            CascadeRule {
                name: "multi_status_filter",
                intent: intents::JIRA_ADVANCED_FILTER,
                confidence: 0.8,
                predicate: |ctx| extract_status_filters(ctx.message).len() > 1,
                extractor: Some(filter_entities),
            },
            CascadeRule {
                name: "create_issue",
                intent: intents::CREATE_JIRA_ISSUE,
                confidence: 0.9,
                predicate: |ctx| {
                    ctx.contains_any(&[
                        "create issue",
                        "create a new issue",
                        "new issue",
                        "file a bug",
                        "create a ticket",
                        "raise a bug",
                    ]) || (ctx.contains("create") && ctx.contains("jira"))
                },
                extractor: Some(extract_jira_entities),
            },
            // combined filters keep qa-contact precedence
            CascadeRule {
                name: "fetch_qa_contact",
                intent: intents::FETCH_JIRA_ISSUES,
                confidence: 0.8,
                predicate: |ctx| ctx.contains("qa contact"),
                extractor: Some(fetch_qa_contact_entities),
            },
            CascadeRule {
                name: "fetch_assigned",
                intent: intents::FETCH_JIRA_ISSUES,
                confidence: 0.8,
                predicate: |ctx| ctx.contains_any(&["assigned to me", "my assigned"]),
                extractor: Some(fetch_assigned_entities),
            },
            CascadeRule {
                name: "fetch_reported",
                intent: intents::FETCH_JIRA_ISSUES,
                confidence: 0.8,
                predicate: |ctx| ctx.contains_any(&["reported by me", "i reported"]),
                extractor: Some(fetch_reported_entities),
            },
            CascadeRule {
                name: "fetch_mine",
                intent: intents::FETCH_JIRA_ISSUES,
                confidence: 0.8,
                predicate: |ctx| ctx.contains_any(&["my issues", "all my jira"]),
                extractor: Some(fetch_mine_entities),
            },
            CascadeRule {
                name: "fetch_generic",
                intent: intents::FETCH_JIRA_ISSUES,
                confidence: 0.6,
                predicate: |_| true,
                extractor: Some(filter_entities),
            },
        ],
    }
}
