//! Persisted store document model
//!
//! The on-disk shape is a single JSON document with four top-level keys:
//! `patterns` (id -> record), `intents` (intent -> ordered id list),
//! `interactions` (append-only log) and `metadata`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use workmate_core::Entities;

pub const STORE_VERSION: &str = "1.0";

/// A learned classification pattern
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRecord {
    /// Opaque unique id, immutable once created
    pub id: String,
    /// The single intent this pattern belongs to
    pub intent: String,
    /// Literal substring or `regex:`-prefixed expression
    pub pattern: String,
    /// Template entity values associated with this pattern
    #[serde(default)]
    pub entities: Entities,
    /// Classification confidence reported on a match
    pub confidence: f64,
    /// Feedback-driven quality score, clamped to [0, 1]
    pub success_rate: f64,
    /// Number of successful interactions this pattern matched
    pub usage_count: u64,
    /// Last successful use, if any
    #[serde(default)]
    pub last_used: Option<DateTime<Utc>>,
    /// Creation time
    pub created: DateTime<Utc>,
}

/// One feedback event, never mutated after creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub message: String,
    pub detected_intent: String,
    pub actual_intent: String,
    #[serde(default)]
    pub entities: Entities,
    pub success: bool,
    pub timestamp: DateTime<Utc>,
}

/// Store-level bookkeeping, refreshed on every persisted write
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMetadata {
    pub created: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub version: String,
}

impl Default for StoreMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created: now,
            last_updated: now,
            version: STORE_VERSION.to_string(),
        }
    }
}

/// The full persisted document
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreDocument {
    #[serde(default)]
    pub patterns: HashMap<String, PatternRecord>,
    #[serde(default)]
    pub intents: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub interactions: Vec<InteractionRecord>,
    #[serde(default)]
    pub metadata: StoreMetadata,
}

impl StoreDocument {
    /// Every pattern id must appear in exactly one intent's list.
    /// Used by tests and the import merge path.
    pub fn is_consistent(&self) -> bool {
        let indexed: usize = self.intents.values().map(|ids| ids.len()).sum();
        if indexed != self.patterns.len() {
            return false;
        }
        self.intents.iter().all(|(intent, ids)| {
            ids.iter().all(|id| {
                self.patterns
                    .get(id)
                    .map(|record| &record.intent == intent)
                    .unwrap_or(false)
            })
        })
    }
}
