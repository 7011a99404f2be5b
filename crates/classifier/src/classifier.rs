//! The cascade walk and the keyword-overlap fallback

use unicode_segmentation::UnicodeSegmentation;
use workmate_core::{intents, ClassificationResult};

use crate::rules::{self, RuleContext, RuleSet};

/// Domain keyword lists for the fallback scorer, paired with the
/// domain's generic intent.
const DOMAIN_KEYWORDS: &[(&str, &[&str])] = &[
    (
        intents::READ_EMAILS,
        &["gmail", "message", "messages", "sender", "recipient"],
    ),
    (
        intents::GITHUB_LIST_PRS,
        &["github", "repository", "branch", "commit", "pull"],
    ),
    (
        intents::FETCH_JIRA_ISSUES,
        &["ticket", "tickets", "bug", "bugs", "epic"],
    ),
    (
        intents::SHOW_CALENDAR,
        &["schedule", "appointment", "agenda", "tomorrow"],
    ),
    (
        intents::KUBERNETES_HELP,
        &["pod", "pods", "kubectl", "container", "cluster"],
    ),
];

/// Walks the domain rule-sets in fixed priority order and returns the
/// first hit. Always produces a result; the floor is
/// `general_conversation` at 0.5.
pub struct IntentClassifier {
    sets: Vec<RuleSet>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    pub fn new() -> Self {
        Self {
            sets: vec![
                rules::github::pr_url_rules(),
                rules::gmail::rules(),
                rules::kubernetes::rules(),
                rules::github::keyword_rules(),
                rules::model::rules(),
                rules::calendar::rules(),
                rules::email::rules(),
                rules::email::standalone_action_rules(),
                rules::contacts::rules(),
                rules::mustgather::rules(),
                rules::mustgather::troubleshoot_rules(),
                rules::jira::rules(),
                rules::slack::rules(),
            ],
        }
    }

    pub fn classify(&self, message: &str) -> ClassificationResult {
        let ctx = RuleContext::new(message);

        for set in &self.sets {
            if let Some(result) = set.evaluate(&ctx) {
                return result;
            }
        }

        self.fallback(&ctx)
    }

    /// Keyword-overlap scorer for messages no rule claimed. Two or more
    /// domain keywords commit to that domain's generic intent at 0.6; a
    /// single keyword keeps the conversation general but signals weak
    /// domain affinity at 0.6; silence scores 0.5.
    fn fallback(&self, ctx: &RuleContext) -> ClassificationResult {
        let tokens: Vec<&str> = ctx.lower.unicode_words().collect();

        let mut best: Option<(&str, usize)> = None;
        for (intent, keywords) in DOMAIN_KEYWORDS {
            let score = tokens
                .iter()
                .filter(|t| keywords.contains(&**t))
                .count();
            if score > best.map(|(_, s)| s).unwrap_or(0) {
                best = Some((intent, score));
            }
        }

        match best {
            Some((intent, score)) if score >= 2 => {
                tracing::debug!(intent, score, "Fallback keyword overlap");
                ClassificationResult::new(intent.to_string(), 0.6, Default::default())
            }
            Some((_, 1)) => ClassificationResult::general_fallback(0.6),
            _ => ClassificationResult::general_fallback(0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classify(message: &str) -> ClassificationResult {
        IntentClassifier::new().classify(message)
    }

    #[test]
    fn test_pr_url_review() {
        let result = classify("review https://github.com/acme/widgets/pull/42");
        assert_eq!(result.intent, intents::GITHUB_REVIEW_PR);
        assert!(result.confidence >= 0.9);
        assert_eq!(result.entities["owner"], json!("acme"));
        assert_eq!(result.entities["repo"], json!("widgets"));
        assert_eq!(result.entities["pr_number"], json!(42));
    }

    #[test]
    fn test_mark_email_read() {
        let result = classify("mark email 2 as read");
        assert_eq!(result.intent, intents::MARK_EMAIL_READ);
        assert_eq!(result.entities["email_number"], json!(2));
    }

    #[test]
    fn test_jira_status_lookup() {
        let result = classify("what's the status of OCPBUGS-1234");
        assert_eq!(result.intent, intents::JIRA_STATUS_LOOKUP);
        assert_eq!(result.entities["issue_key"], json!("OCPBUGS-1234"));
    }

    #[test]
    fn test_add_jira_comment() {
        let result = classify("add comment to OCPQE-30241 working on it");
        assert_eq!(result.intent, intents::ADD_JIRA_COMMENT);
        assert_eq!(result.entities["issue_key"], json!("OCPQE-30241"));
        assert_eq!(result.entities["comment_text"], json!("working on it"));
    }

    #[test]
    fn test_list_pods_in_namespace() {
        let result = classify("list pods in ns kube-system");
        assert_eq!(result.intent, intents::LIST_PODS);
        assert_eq!(result.entities["namespace"], json!("kube-system"));
    }

    #[test]
    fn test_greeting_is_general_conversation() {
        let result = classify("hi");
        assert_eq!(result.intent, intents::GENERAL_CONVERSATION);
        assert!((0.5..=0.6).contains(&result.confidence));
    }

    #[test]
    fn test_empty_message_never_fails() {
        let result = classify("");
        assert!(!result.intent.is_empty());
        assert!((0.0..=1.0).contains(&result.confidence));
    }

    #[test]
    fn test_jira_signal_shadows_kubernetes() {
        let result = classify("list my jira issues in the current sprint");
        assert_ne!(result.intent, intents::LIST_PODS);
    }

    #[test]
    fn test_fallback_keyword_overlap() {
        let result = classify("anything interesting about that ticket or the related bug?");
        assert_eq!(result.intent, intents::FETCH_JIRA_ISSUES);
        assert_eq!(result.confidence, 0.6);
    }
}
