//! Slack family handler

use async_trait::async_trait;
use workmate_core::{intents, Entities, HandlerError, HandlerResult};

use crate::registry::IntentHandler;

pub struct SlackHandler;

#[async_trait]
impl IntentHandler for SlackHandler {
    fn name(&self) -> &'static str {
        "slack"
    }

    async fn handle(
        &self,
        intent: &str,
        _message: &str,
        _entities: &Entities,
    ) -> Result<HandlerResult, HandlerError> {
        let response = match intent {
            intents::SEND_SLACK_MESSAGE => "Sent your Slack message.".to_string(),
            intents::READ_SLACK_MESSAGES => "Here are your recent Slack messages.".to_string(),
            _ => "Handled the Slack request.".to_string(),
        };

        Ok(HandlerResult::new(response, intent).with_suggestions(vec![
            "Send a message".to_string(),
            "Read messages".to_string(),
        ]))
    }
}
