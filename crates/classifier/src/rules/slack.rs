//! Slack rules

use workmate_core::intents;

use super::{CascadeRule, RuleContext, RuleSet};

pub fn rules() -> RuleSet {
    RuleSet {
        name: "slack",
        gate: |ctx| ctx.contains("slack"),
        rules: vec![
            CascadeRule {
                name: "send_message",
                intent: intents::SEND_SLACK_MESSAGE,
                confidence: 0.9,
                predicate: |ctx| ctx.contains_any(&["send", "post", "message to"]),
                extractor: None,
            },
            CascadeRule {
                name: "read_messages",
                intent: intents::READ_SLACK_MESSAGES,
                confidence: 0.85,
                predicate: |ctx| {
                    ctx.contains_any(&["read", "show", "check", "messages", "unread"])
                },
                extractor: None,
            },
        ],
    }
}
