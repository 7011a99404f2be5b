//! Model-management handler

use async_trait::async_trait;
use serde_json::json;
use workmate_core::{intents, Entities, HandlerError, HandlerResult};

use super::entity_str;
use crate::registry::IntentHandler;

pub struct ModelHandler;

#[async_trait]
impl IntentHandler for ModelHandler {
    fn name(&self) -> &'static str {
        "model"
    }

    async fn handle(
        &self,
        intent: &str,
        _message: &str,
        entities: &Entities,
    ) -> Result<HandlerResult, HandlerError> {
        match intent {
            intents::SWITCH_MODEL => {
                let model = entity_str(entities, "model")
                    .ok_or_else(|| HandlerError::MissingEntity("model".to_string()))?;
                Ok(
                    HandlerResult::new(format!("Switched the active model to {model}."), intent)
                        .with_data(json!({ "model": model })),
                )
            }
            _ => Ok(HandlerResult::new(
                "Here is the model currently in use.",
                intent,
            )),
        }
    }
}
