//! General-conversation handler, also the sink for unknown intents

use async_trait::async_trait;
use workmate_core::{Entities, HandlerError, HandlerResult};

use crate::registry::IntentHandler;

pub struct GeneralHandler;

#[async_trait]
impl IntentHandler for GeneralHandler {
    fn name(&self) -> &'static str {
        "general"
    }

    async fn handle(
        &self,
        intent: &str,
        _message: &str,
        _entities: &Entities,
    ) -> Result<HandlerResult, HandlerError> {
        Ok(HandlerResult::new(
            "I can help with email, calendar, GitHub, Jira, Kubernetes, Slack and contacts. \
             What would you like to do?",
            intent,
        )
        .with_suggestions(vec![
            "Read emails".to_string(),
            "Show calendar".to_string(),
            "Fetch my Jira issues".to_string(),
            "List open PRs".to_string(),
        ]))
    }
}
