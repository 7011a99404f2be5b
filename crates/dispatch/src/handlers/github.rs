//! GitHub family handler

use async_trait::async_trait;
use serde_json::json;
use workmate_core::{intents, Entities, HandlerError, HandlerResult};

use super::{entity_i64, entity_str};
use crate::registry::IntentHandler;

pub struct GitHubHandler;

const SUGGESTIONS: &[&str] = &["List open PRs", "Review a PR", "Merge a PR", "Create a PR"];

fn pr_reference(entities: &Entities) -> String {
    match (
        entity_str(entities, "owner"),
        entity_str(entities, "repo"),
        entity_i64(entities, "pr_number"),
    ) {
        (Some(owner), Some(repo), Some(n)) => format!("{owner}/{repo}#{n}"),
        (_, _, Some(n)) => format!("PR #{n}"),
        _ => "the pull request".to_string(),
    }
}

#[async_trait]
impl IntentHandler for GitHubHandler {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn handle(
        &self,
        intent: &str,
        _message: &str,
        entities: &Entities,
    ) -> Result<HandlerResult, HandlerError> {
        let pr = pr_reference(entities);

        let response = match intent {
            intents::GITHUB_SUMMARIZE_PR => format!("Here is a summary of {pr}."),
            intents::GITHUB_REVIEW_PR => format!("Reviewed {pr} and posted the findings."),
            intents::GITHUB_COMMENT_PR => format!("Added your comment to {pr}."),
            intents::GITHUB_LABEL_PR => format!("Applied the labels to {pr}."),
            intents::GITHUB_APPROVE_PR => format!("Approved {pr}."),
            intents::GITHUB_CLOSE_PR => format!("Closed {pr}."),
            intents::GITHUB_MERGE_PR => format!("Merged {pr}."),
            intents::GITHUB_PR_ACTION => format!("Fetched the details of {pr}."),
            intents::GITHUB_LIST_PRS => match entity_str(entities, "repository") {
                Some(repository) => format!("Here are the open pull requests in {repository}."),
                None => "Here are your open pull requests.".to_string(),
            },
            intents::GITHUB_CREATE_PR => "Opened the new pull request.".to_string(),
            _ => format!("Handled the GitHub request for {pr}."),
        };

        let mut result = HandlerResult::new(response, intent)
            .with_suggestions(SUGGESTIONS.iter().copied());
        if let Some(model) = entity_str(entities, "model") {
            result = result.with_data(json!({ "model": model }));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_review_pr_reference() {
        let mut entities = Entities::new();
        entities.insert("owner".to_string(), json!("acme"));
        entities.insert("repo".to_string(), json!("widgets"));
        entities.insert("pr_number".to_string(), json!(42));

        let result = GitHubHandler
            .handle(intents::GITHUB_REVIEW_PR, "review it", &entities)
            .await
            .unwrap();
        assert!(result.response.contains("acme/widgets#42"));
    }

    #[tokio::test]
    async fn test_model_preference_in_data() {
        let mut entities = Entities::new();
        entities.insert("model".to_string(), json!("granite"));

        let result = GitHubHandler
            .handle(intents::GITHUB_REVIEW_PR, "review with granite", &entities)
            .await
            .unwrap();
        assert_eq!(result.data.unwrap()["model"], json!("granite"));
    }
}
