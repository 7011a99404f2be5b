//! Declarative cascade rules
//!
//! Each domain contributes one ordered [`RuleSet`]. Priority is the
//! position in the table, never implicit code order, so every tie-break
//! is auditable and testable per rule.

use workmate_core::{ClassificationResult, Entities};

pub mod calendar;
pub mod contacts;
pub mod email;
pub mod github;
pub mod gmail;
pub mod jira;
pub mod kubernetes;
pub mod model;
pub mod mustgather;
pub mod slack;

/// Message under classification, lower-cased once up front.
pub struct RuleContext<'a> {
    pub message: &'a str,
    pub lower: String,
}

impl<'a> RuleContext<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            lower: message.to_lowercase(),
        }
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.lower.contains(phrase)
    }

    pub fn contains_any(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|p| self.lower.contains(p))
    }
}

/// One classification branch: a predicate over the message, the intent
/// and confidence it commits to, and the entity extractor that rides
/// along.
pub struct CascadeRule {
    pub name: &'static str,
    pub intent: &'static str,
    pub confidence: f64,
    pub predicate: fn(&RuleContext) -> bool,
    pub extractor: Option<fn(&str) -> Entities>,
}

/// An ordered list of rules for one domain, guarded by a gate predicate
/// that can skip the whole set.
pub struct RuleSet {
    pub name: &'static str,
    pub gate: fn(&RuleContext) -> bool,
    pub rules: Vec<CascadeRule>,
}

impl RuleSet {
    /// First rule whose predicate fires wins; a closed gate skips the
    /// set entirely.
    pub fn evaluate(&self, ctx: &RuleContext) -> Option<ClassificationResult> {
        if !(self.gate)(ctx) {
            return None;
        }
        for rule in &self.rules {
            if (rule.predicate)(ctx) {
                let entities = rule
                    .extractor
                    .map(|extract| extract(ctx.message))
                    .unwrap_or_default();
                tracing::debug!(
                    domain = self.name,
                    rule = rule.name,
                    intent = rule.intent,
                    confidence = rule.confidence,
                    "Cascade rule matched"
                );
                return Some(ClassificationResult::new(
                    rule.intent.to_string(),
                    rule.confidence,
                    entities,
                ));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_rule_wins() {
        let set = RuleSet {
            name: "test",
            gate: |_| true,
            rules: vec![
                CascadeRule {
                    name: "narrow",
                    intent: "a",
                    confidence: 0.9,
                    predicate: |ctx| ctx.contains("foo bar"),
                    extractor: None,
                },
                CascadeRule {
                    name: "broad",
                    intent: "b",
                    confidence: 0.8,
                    predicate: |ctx| ctx.contains("foo"),
                    extractor: None,
                },
            ],
        };

        let ctx = RuleContext::new("FOO BAR baz");
        let result = set.evaluate(&ctx).unwrap();
        assert_eq!(result.intent, "a");
    }

    #[test]
    fn test_closed_gate_skips_set() {
        let set = RuleSet {
            name: "test",
            gate: |_| false,
            rules: vec![CascadeRule {
                name: "always",
                intent: "a",
                confidence: 0.9,
                predicate: |_| true,
                extractor: None,
            }],
        };
        assert!(set.evaluate(&RuleContext::new("anything")).is_none());
    }
}
