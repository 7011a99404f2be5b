//! GitHub pull-request rules
//!
//! Two sets: URL-anchored actions at 0.95, then keyword rules reached
//! later in the cascade. Verb priority is the same in both: summarize
//! before review before comment before label, approve only when no
//! comment verb is present, then close and merge.

use once_cell::sync::Lazy;
use regex::Regex;
use workmate_core::intents;
use workmate_extract::extract_github_entities;

use super::{CascadeRule, RuleContext, RuleSet};

static PR_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://github\.com/[^/\s]+/[^/\s]+/pull/\d+").unwrap());

pub fn has_pr_url(ctx: &RuleContext) -> bool {
    PR_URL_RE.is_match(ctx.message)
}

/// URL-anchored PR actions. The generic catch-all at the end means a PR
/// URL never falls through to lower-priority domains.
pub fn pr_url_rules() -> RuleSet {
    RuleSet {
        name: "github_pr_url",
        gate: has_pr_url,
        rules: vec![
            CascadeRule {
                name: "summarize_pr",
                intent: intents::GITHUB_SUMMARIZE_PR,
                confidence: 0.95,
                predicate: |ctx| ctx.contains_any(&["summarize", "summary"]),
                extractor: Some(extract_github_entities),
            },
            CascadeRule {
                name: "review_pr",
                intent: intents::GITHUB_REVIEW_PR,
                confidence: 0.95,
                predicate: |ctx| ctx.contains_any(&["review", "analyze", "analyse"]),
                extractor: Some(extract_github_entities),
            },
            CascadeRule {
                name: "comment_pr",
                intent: intents::GITHUB_COMMENT_PR,
                confidence: 0.95,
                predicate: |ctx| ctx.contains("comment"),
                extractor: Some(extract_github_entities),
            },
            CascadeRule {
                name: "label_pr",
                intent: intents::GITHUB_LABEL_PR,
                confidence: 0.95,
                predicate: |ctx| ctx.contains("label"),
                extractor: Some(extract_github_entities),
            },
            CascadeRule {
                name: "approve_pr",
                intent: intents::GITHUB_APPROVE_PR,
                confidence: 0.95,
                predicate: |ctx| ctx.contains("approve") && !ctx.contains("comment"),
                extractor: Some(extract_github_entities),
            },
            CascadeRule {
                name: "close_pr",
                intent: intents::GITHUB_CLOSE_PR,
                confidence: 0.95,
                predicate: |ctx| ctx.contains("close"),
                extractor: Some(extract_github_entities),
            },
            CascadeRule {
                name: "merge_pr",
                intent: intents::GITHUB_MERGE_PR,
                confidence: 0.95,
                predicate: |ctx| ctx.contains("merge"),
                extractor: Some(extract_github_entities),
            },
            CascadeRule {
                name: "generic_pr_action",
                intent: intents::GITHUB_PR_ACTION,
                confidence: 0.95,
                predicate: |_| true,
                extractor: Some(extract_github_entities),
            },
        ],
    }
}

fn mentions_pr(ctx: &RuleContext) -> bool {
    ctx.contains_any(&["pull request", "pull requests", " pr ", " prs"])
        || ctx.lower.starts_with("pr ")
        || ctx.lower.ends_with(" pr")
        || ctx.contains("pr #")
}

/// Keyword rules for messages that name PRs without a URL.
pub fn keyword_rules() -> RuleSet {
    RuleSet {
        name: "github_keywords",
        gate: |ctx| {
            !has_pr_url(ctx) && (mentions_pr(ctx) || ctx.contains_any(&["github", "repo "]))
        },
        rules: vec![
            CascadeRule {
                name: "list_prs",
                intent: intents::GITHUB_LIST_PRS,
                confidence: 0.9,
                predicate: |ctx| ctx.contains_any(&["list", "show", "open prs", "my prs"]),
                extractor: Some(extract_github_entities),
            },
            CascadeRule {
                name: "create_pr",
                intent: intents::GITHUB_CREATE_PR,
                confidence: 0.9,
                predicate: |ctx| ctx.contains_any(&["create", "open a pull request", "raise"]),
                extractor: Some(extract_github_entities),
            },
            CascadeRule {
                name: "review_pr_keyword",
                intent: intents::GITHUB_REVIEW_PR,
                confidence: 0.9,
                predicate: |ctx| ctx.contains_any(&["review", "analyze"]) && mentions_pr(ctx),
                extractor: Some(extract_github_entities),
            },
            CascadeRule {
                name: "comment_pr_keyword",
                intent: intents::GITHUB_COMMENT_PR,
                confidence: 0.9,
                predicate: |ctx| ctx.contains("comment") && mentions_pr(ctx),
                extractor: Some(extract_github_entities),
            },
            CascadeRule {
                name: "label_pr_keyword",
                intent: intents::GITHUB_LABEL_PR,
                confidence: 0.9,
                predicate: |ctx| ctx.contains("label") && mentions_pr(ctx),
                extractor: Some(extract_github_entities),
            },
            CascadeRule {
                name: "approve_pr_keyword",
                intent: intents::GITHUB_APPROVE_PR,
                confidence: 0.9,
                predicate: |ctx| {
                    ctx.contains("approve") && !ctx.contains("comment") && mentions_pr(ctx)
                },
                extractor: Some(extract_github_entities),
            },
            CascadeRule {
                name: "close_pr_keyword",
                intent: intents::GITHUB_CLOSE_PR,
                confidence: 0.9,
                predicate: |ctx| ctx.contains("close") && mentions_pr(ctx),
                extractor: Some(extract_github_entities),
            },
            CascadeRule {
                name: "merge_pr_keyword",
                intent: intents::GITHUB_MERGE_PR,
                confidence: 0.9,
                predicate: |ctx| ctx.contains("merge") && mentions_pr(ctx),
                extractor: Some(extract_github_entities),
            },
        ],
    }
}
