//! Classification and dispatch result types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::intents;

/// Named parameter values extracted from an utterance
pub type Entities = HashMap<String, serde_json::Value>;

/// Outcome of classifying a single message.
///
/// The engine contract guarantees a resolvable intent for every input;
/// there is no "unclassified" variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Canonical intent name (e.g. `github_review_pr`)
    pub intent: String,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f64,
    /// Extracted entities
    #[serde(default)]
    pub entities: Entities,
}

impl ClassificationResult {
    pub fn new(intent: impl Into<String>, confidence: f64, entities: Entities) -> Self {
        Self {
            intent: intent.into(),
            confidence: confidence.clamp(0.0, 1.0),
            entities,
        }
    }

    /// The catch-all result returned when no rule or stored pattern fires.
    pub fn general_fallback(confidence: f64) -> Self {
        Self::new(intents::GENERAL_CONVERSATION, confidence, Entities::new())
    }

    pub fn with_entity(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.entities.insert(key.into(), value);
        self
    }
}

/// Structured response produced by an intent handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandlerResult {
    /// User-facing response text
    pub response: String,
    /// Canonical name of the action that was taken
    pub action_taken: String,
    /// Follow-up actions offered to the user
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    /// Optional structured payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Set only on the dispatch-boundary error fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HandlerResult {
    pub fn new(response: impl Into<String>, action_taken: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            action_taken: action_taken.into(),
            suggestions: Vec::new(),
            data: None,
            error: None,
        }
    }

    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// The safe fallback the dispatcher emits when a handler fails.
    /// Handler failures never propagate past the dispatch boundary.
    pub fn error_fallback(intent: &str, error: &HandlerError) -> Self {
        Self {
            response: format!(
                "I understand you want to {intent}, but I encountered an error \
                 processing your request. Please try again."
            ),
            action_taken: "error_fallback".to_string(),
            suggestions: Vec::new(),
            data: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Errors an intent handler may surface to the dispatcher
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Missing required entity: {0}")]
    MissingEntity(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Handler timed out after {0}ms")]
    Timeout(u64),

    #[error("Internal handler error: {0}")]
    Internal(String),
}
