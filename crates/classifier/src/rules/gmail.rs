//! Mailbox natural-language-query rules
//!
//! Literal phrase tables checked before the generic email sub-cascade.
//! First intent whose phrase list hits wins, at 0.95.

use workmate_core::intents;
use workmate_extract::extract_email_entities;

use super::{CascadeRule, RuleContext, RuleSet};

fn mentions_mail(ctx: &RuleContext) -> bool {
    ctx.contains_any(&["email", "mail", "inbox"])
}

pub fn rules() -> RuleSet {
    RuleSet {
        name: "mailbox_query",
        gate: |_| true,
        rules: vec![
            CascadeRule {
                name: "unread_query",
                intent: intents::FIND_UNREAD_EMAILS,
                confidence: 0.95,
                predicate: |ctx| {
                    ctx.contains_any(&[
                        "unread emails",
                        "unread email",
                        "unread mail",
                        "any unread",
                        "show unread",
                        "unseen emails",
                        "new emails",
                    ])
                },
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "important_query",
                intent: intents::FIND_IMPORTANT_EMAILS,
                confidence: 0.95,
                predicate: |ctx| {
                    ctx.contains_any(&["important emails", "priority emails", "urgent emails"])
                },
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "sender_query",
                intent: intents::SEARCH_EMAILS_BY_SENDER,
                confidence: 0.95,
                predicate: |ctx| {
                    ctx.contains_any(&["emails from", "mail from", "messages from"])
                        && ctx.contains("@")
                },
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "date_query",
                intent: intents::SEARCH_EMAILS_BY_DATE,
                confidence: 0.95,
                predicate: |ctx| {
                    mentions_mail(ctx)
                        && ctx.contains_any(&[
                            "from today",
                            "from yesterday",
                            "this week",
                            "last week",
                            "received today",
                            "received yesterday",
                        ])
                },
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "attachment_query",
                intent: intents::FIND_ATTACHMENTS,
                confidence: 0.95,
                predicate: |ctx| {
                    mentions_mail(ctx)
                        && ctx.contains_any(&["with attachment", "attachments", "has attachment"])
                },
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "pending_query",
                intent: intents::FIND_PENDING_EMAILS,
                confidence: 0.95,
                predicate: |ctx| {
                    ctx.contains_any(&[
                        "pending emails",
                        "awaiting reply",
                        "waiting for reply",
                        "waiting for a reply",
                        "emails awaiting",
                    ])
                },
                extractor: Some(extract_email_entities),
            },
            CascadeRule {
                name: "spam_query",
                intent: intents::DETECT_SPAM,
                confidence: 0.95,
                predicate: |ctx| ctx.contains_any(&["spam", "junk mail", "junk emails"]),
                extractor: Some(extract_email_entities),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(message: &str) -> Option<String> {
        rules().evaluate(&RuleContext::new(message)).map(|r| r.intent)
    }

    #[test]
    fn test_unread_beats_sender() {
        assert_eq!(
            classify("show unread emails from bob@example.com").as_deref(),
            Some(intents::FIND_UNREAD_EMAILS)
        );
    }

    #[test]
    fn test_sender_query_needs_an_address() {
        assert_eq!(
            classify("emails from alice@example.com").as_deref(),
            Some(intents::SEARCH_EMAILS_BY_SENDER)
        );
        assert!(classify("emails from the team").is_none());
    }

    #[test]
    fn test_date_query() {
        assert_eq!(
            classify("any emails from yesterday?").as_deref(),
            Some(intents::SEARCH_EMAILS_BY_DATE)
        );
    }

    #[test]
    fn test_spam_query() {
        assert_eq!(classify("check my spam folder").as_deref(), Some(intents::DETECT_SPAM));
    }

    #[test]
    fn test_no_match_falls_through() {
        assert!(classify("mark email 2 as read").is_none());
    }
}
