//! Jira family handler

use async_trait::async_trait;
use workmate_core::{intents, Entities, HandlerError, HandlerResult};

use super::entity_str;
use crate::registry::IntentHandler;

pub struct JiraHandler;

const SUGGESTIONS: &[&str] = &["Fetch my issues", "Create new issue", "Add a comment", "Check status"];

fn required_key(entities: &Entities) -> Result<&str, HandlerError> {
    entity_str(entities, "issue_key")
        .ok_or_else(|| HandlerError::MissingEntity("issue_key".to_string()))
}

#[async_trait]
impl IntentHandler for JiraHandler {
    fn name(&self) -> &'static str {
        "jira"
    }

    async fn handle(
        &self,
        intent: &str,
        _message: &str,
        entities: &Entities,
    ) -> Result<HandlerResult, HandlerError> {
        let response = match intent {
            intents::ADD_JIRA_COMMENT => {
                let key = required_key(entities)?;
                match entity_str(entities, "comment_text") {
                    Some(text) => format!("Added the comment \"{text}\" to {key}."),
                    None => format!("Added your comment to {key}."),
                }
            }
            intents::ASSIGN_JIRA_ISSUE => {
                let key = required_key(entities)?;
                match entity_str(entities, "assignee") {
                    Some(assignee) => format!("Assigned {key} to {assignee}."),
                    None => return Err(HandlerError::MissingEntity("assignee".to_string())),
                }
            }
            intents::JIRA_STATUS_LOOKUP => {
                let key = required_key(entities)?;
                format!("Looked up the current status of {key}.")
            }
            intents::UPDATE_JIRA_STATUS => {
                let key = required_key(entities)?;
                match entity_str(entities, "status") {
                    Some(status) => format!("Moved {key} to {status}."),
                    None => return Err(HandlerError::MissingEntity("status".to_string())),
                }
            }
            intents::JIRA_METADATA_QUERY => match entity_str(entities, "issue_key") {
                Some(key) => format!("Here are the details you asked about for {key}."),
                None => "Here are the issue details you asked about.".to_string(),
            },
            intents::JIRA_ADVANCED_FILTER => {
                match entities.get("status_filter").and_then(|v| v.as_array()) {
                    Some(filters) => {
                        let names: Vec<String> = filters
                            .iter()
                            .filter_map(|v| v.as_str().map(|s| s.to_string()))
                            .collect();
                        format!("Fetched your issues filtered by: {}.", names.join(", "))
                    }
                    None => "Fetched your issues with the requested filter.".to_string(),
                }
            }
            intents::JIRA_SPRINT_QUERY => "Here are the issues in the current sprint.".to_string(),
            intents::CREATE_JIRA_ISSUE => "Created the new Jira issue.".to_string(),
            intents::FETCH_JIRA_ISSUES => match entity_str(entities, "filter") {
                Some("qa_contact") => "Fetched the issues where you are the QA contact.".to_string(),
                Some("assigned") => "Fetched the issues assigned to you.".to_string(),
                Some("reported") => "Fetched the issues you reported.".to_string(),
                Some("mine") => "Fetched all of your issues.".to_string(),
                _ => "Fetched your Jira issues.".to_string(),
            },
            _ => "Handled the Jira request.".to_string(),
        };

        Ok(HandlerResult::new(response, intent)
            .with_suggestions(SUGGESTIONS.iter().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_add_comment() {
        let mut entities = Entities::new();
        entities.insert("issue_key".to_string(), json!("OCPQE-30241"));
        entities.insert("comment_text".to_string(), json!("working on it"));

        let result = JiraHandler
            .handle(intents::ADD_JIRA_COMMENT, "", &entities)
            .await
            .unwrap();
        assert_eq!(result.response, "Added the comment \"working on it\" to OCPQE-30241.");
    }

    #[tokio::test]
    async fn test_comment_without_key_is_an_error() {
        let err = JiraHandler
            .handle(intents::ADD_JIRA_COMMENT, "", &Entities::new())
            .await
            .unwrap_err();
        assert!(matches!(err, HandlerError::MissingEntity(_)));
    }

    #[tokio::test]
    async fn test_fetch_with_qa_contact_filter() {
        let mut entities = Entities::new();
        entities.insert("filter".to_string(), json!("qa_contact"));

        let result = JiraHandler
            .handle(intents::FETCH_JIRA_ISSUES, "", &entities)
            .await
            .unwrap();
        assert!(result.response.contains("QA contact"));
    }
}
