//! Learned-pattern store, matcher and trainer
//!
//! Persistent repository of (intent, pattern) records learned from user
//! feedback, with a matcher supporting literal-substring and `regex:`
//! prefixed patterns. Stored patterns take absolute priority over the
//! built-in rule cascade: callers consult [`PatternStore::classify_via_store`]
//! before any heuristic classification.

pub mod matcher;
pub mod record;
pub mod store;
pub mod synthesis;

pub use matcher::PatternMatcher;
pub use record::{InteractionRecord, PatternRecord, StoreDocument, StoreMetadata};
pub use store::{IntentStatistics, PatternStore, StoreError, StoreStatistics};
pub use synthesis::generalize_message;
