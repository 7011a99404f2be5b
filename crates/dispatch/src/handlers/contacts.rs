//! Contacts family handler

use async_trait::async_trait;
use workmate_core::{intents, Entities, HandlerError, HandlerResult};

use crate::registry::IntentHandler;

pub struct ContactsHandler;

#[async_trait]
impl IntentHandler for ContactsHandler {
    fn name(&self) -> &'static str {
        "contacts"
    }

    async fn handle(
        &self,
        intent: &str,
        _message: &str,
        _entities: &Entities,
    ) -> Result<HandlerResult, HandlerError> {
        let response = match intent {
            intents::FIND_CONTACT => "Here is the contact I found.".to_string(),
            intents::LIST_CONTACTS => "Here are your contacts.".to_string(),
            _ => "Here are your contacts.".to_string(),
        };

        Ok(HandlerResult::new(response, intent).with_suggestions(vec![
            "Find a contact".to_string(),
            "List contacts".to_string(),
        ]))
    }
}
