//! The engine facade
//!
//! Single entry point for a turn: stored patterns first, the rule
//! cascade second, then dispatch, with both sides of the exchange
//! appended to the conversation log.

use std::time::Duration;

use serde::Serialize;
use workmate_classifier::IntentClassifier;
use workmate_config::EngineConfig;
use workmate_core::{ClassificationResult, ConversationLog, ConversationTurn, Entities, HandlerResult};
use workmate_dispatch::{default_registry, HandlerRegistry};
use workmate_store::{PatternStore, StoreError};

/// One processed turn: how the message was classified and what the
/// handler produced.
#[derive(Debug, Clone, Serialize)]
pub struct EngineResponse {
    pub classification: ClassificationResult,
    pub result: HandlerResult,
}

pub struct Engine {
    store: PatternStore,
    classifier: IntentClassifier,
    registry: HandlerRegistry,
    conversation: ConversationLog,
}

impl Engine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            store: PatternStore::open(&config.store_path)
                .with_learned_confidence(config.learned_pattern_confidence),
            classifier: IntentClassifier::new(),
            registry: default_registry(Duration::from_millis(config.dispatch_timeout_ms)),
            conversation: ConversationLog::new(config.max_history),
        }
    }

    /// Classify a message. Learned patterns take absolute priority over
    /// the built-in cascade; the result is never absent.
    pub fn classify_intent(&self, message: &str) -> ClassificationResult {
        if let Some(stored) = self.store.classify_via_store(message) {
            return stored;
        }
        self.classifier.classify(message)
    }

    /// Classify, dispatch and log one message.
    pub async fn process_message(&self, message: &str) -> EngineResponse {
        let classification = self.classify_intent(message);
        tracing::info!(
            intent = %classification.intent,
            confidence = classification.confidence,
            "Classified message"
        );

        let result = self
            .registry
            .route(&classification.intent, message, &classification.entities)
            .await;

        self.conversation.append(ConversationTurn::user(message));
        self.conversation.append(
            ConversationTurn::assistant(result.response.clone())
                .with_intent(classification.intent.clone()),
        );

        EngineResponse {
            classification,
            result,
        }
    }

    /// Feed one feedback event into the trainer.
    pub fn learn_from_interaction(
        &self,
        message: &str,
        detected_intent: &str,
        actual_intent: &str,
        entities: Entities,
        success: bool,
    ) -> Result<(), StoreError> {
        self.store
            .learn_from_interaction(message, detected_intent, actual_intent, entities, success)
    }

    pub fn store(&self) -> &PatternStore {
        &self.store
    }

    pub fn conversation(&self) -> &ConversationLog {
        &self.conversation
    }
}
