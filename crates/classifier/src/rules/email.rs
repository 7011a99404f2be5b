//! Email action rules
//!
//! The main sub-cascade is gated on an email/mail/inbox mention. A small
//! second set covers standalone ordinal actions ("mark the second one as
//! read") that never say the word "email".

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use workmate_core::{intents, Entities};
use workmate_extract::{extract_email_entities, extract_email_number};

use super::{CascadeRule, RuleContext, RuleSet};

static HASH_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\d+").unwrap());

const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth",
];

fn mentions_mail(ctx: &RuleContext) -> bool {
    ctx.contains_any(&["email", "mail", "inbox"])
}

fn has_ordinal_reference(ctx: &RuleContext) -> bool {
    ORDINAL_WORDS.iter().any(|w| {
        ctx.lower
            .split(|c: char| !c.is_alphanumeric())
            .any(|token| token == *w)
    }) || HASH_NUMBER_RE.is_match(&ctx.lower)
}

/// Family extractor plus the ordinal email number.
fn numbered_email_entities(message: &str) -> Entities {
    let mut entities = extract_email_entities(message);
    entities.insert("email_number".to_string(), json!(extract_email_number(message)));
    entities
}

pub fn rules() -> RuleSet {
    RuleSet {
        name: "email",
        gate: mentions_mail,
        rules: vec![
            CascadeRule {
                name: "mark_all_read",
                intent: intents::MARK_ALL_EMAILS_READ,
                confidence: 0.9,
                predicate: |ctx| ctx.contains("mark all") && ctx.contains("read"),
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "mark_unread",
                intent: intents::MARK_EMAIL_UNREAD,
                confidence: 0.9,
                predicate: |ctx| ctx.contains("mark") && ctx.contains("unread"),
                extractor: Some(numbered_email_entities),
            },
            CascadeRule {
                name: "mark_read",
                intent: intents::MARK_EMAIL_READ,
                confidence: 0.9,
                predicate: |ctx| ctx.contains("mark") && ctx.contains("read"),
                extractor: Some(numbered_email_entities),
            },
            CascadeRule {
                name: "summarize_unread",
                intent: intents::SUMMARIZE_UNREAD_EMAILS,
                confidence: 0.9,
                predicate: |ctx| {
                    ctx.contains_any(&["summarize", "summary"]) && ctx.contains("unread")
                },
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "summarize_email",
                intent: intents::SUMMARIZE_EMAIL,
                confidence: 0.9,
                predicate: |ctx| ctx.contains_any(&["summarize", "summary"]),
                extractor: Some(numbered_email_entities),
            },
            CascadeRule {
                name: "categorize",
                intent: intents::CATEGORIZE_EMAILS,
                confidence: 0.9,
                predicate: |ctx| ctx.contains_any(&["categorize", "organize", "group my"]),
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "action_items",
                intent: intents::EXTRACT_ACTION_ITEMS,
                confidence: 0.9,
                predicate: |ctx| ctx.contains_any(&["action item", "action items", "to-dos"]),
                extractor: Some(numbered_email_entities),
            },
            CascadeRule {
                name: "generate_reply",
                intent: intents::GENERATE_EMAIL_REPLY,
                confidence: 0.9,
                predicate: |ctx| {
                    ctx.contains("reply")
                        && ctx.contains_any(&["generate", "draft", "write", "compose"])
                },
                extractor: Some(numbered_email_entities),
            },
            CascadeRule {
                name: "use_template",
                intent: intents::USE_EMAIL_TEMPLATE,
                confidence: 0.9,
                predicate: |ctx| ctx.contains("template"),
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "attachments",
                intent: intents::FIND_ATTACHMENTS,
                confidence: 0.9,
                predicate: |ctx| ctx.contains("attachment"),
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "important",
                intent: intents::FIND_IMPORTANT_EMAILS,
                confidence: 0.9,
                predicate: |ctx| ctx.contains_any(&["important", "urgent", "priority"]),
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "spam",
                intent: intents::DETECT_SPAM,
                confidence: 0.9,
                predicate: |ctx| ctx.contains_any(&["spam", "junk"]),
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "by_sender",
                intent: intents::SEARCH_EMAILS_BY_SENDER,
                confidence: 0.9,
                predicate: |ctx| ctx.contains("from") && ctx.contains("@"),
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "by_date",
                intent: intents::SEARCH_EMAILS_BY_DATE,
                confidence: 0.9,
                predicate: |ctx| {
                    ctx.contains_any(&["today", "yesterday", "this week", "last week"])
                },
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "pending",
                intent: intents::FIND_PENDING_EMAILS,
                confidence: 0.9,
                predicate: |ctx| ctx.contains_any(&["pending", "awaiting"]),
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "unread",
                intent: intents::FIND_UNREAD_EMAILS,
                confidence: 0.9,
                predicate: |ctx| ctx.contains("unread"),
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "show_body",
                intent: intents::SHOW_EMAIL_BODY,
                confidence: 0.9,
                predicate: |ctx| {
                    ctx.contains_any(&["email body", "full email", "open email", "show body"])
                },
                extractor: Some(numbered_email_entities),
            },
            CascadeRule {
                name: "translate",
                intent: intents::TRANSLATE_EMAIL,
                confidence: 0.9,
                predicate: |ctx| ctx.contains("translate"),
                extractor: Some(numbered_email_entities),
            },
            CascadeRule {
                name: "sentiment",
                intent: intents::ANALYZE_EMAIL_SENTIMENT,
                confidence: 0.9,
                predicate: |ctx| ctx.contains_any(&["sentiment", "tone of"]),
                extractor: Some(numbered_email_entities),
            },
            CascadeRule {
                name: "send",
                intent: intents::SEND_EMAIL,
                confidence: 0.9,
                predicate: |ctx| ctx.contains_any(&["send", "compose", "write an email"]),
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "read_generic",
                intent: intents::READ_EMAILS,
                confidence: 0.6,
                predicate: |_| true,
                extractor: Some(extract_email_entities),
            },
        ],
    }
}

/// Ordinal actions that never say "email".
pub fn standalone_action_rules() -> RuleSet {
    RuleSet {
        name: "email_standalone",
        gate: |ctx| !mentions_mail(ctx) && has_ordinal_reference(ctx),
        rules: vec![
            CascadeRule {
                name: "mark_unread_standalone",
                intent: intents::MARK_EMAIL_UNREAD,
                confidence: 0.85,
                predicate: |ctx| ctx.contains("mark") && ctx.contains("unread"),
                extractor: Some(numbered_email_entities),
            },
            CascadeRule {
                name: "mark_read_standalone",
                intent: intents::MARK_EMAIL_READ,
                confidence: 0.85,
                predicate: |ctx| ctx.contains("mark") && ctx.contains("read"),
                extractor: Some(numbered_email_entities),
            },
            CascadeRule {
                name: "summarize_standalone",
                intent: intents::SUMMARIZE_EMAIL,
                confidence: 0.85,
                predicate: |ctx| ctx.contains_any(&["summarize", "summary"]),
                extractor: Some(numbered_email_entities),
            },
        ],
    }
}
