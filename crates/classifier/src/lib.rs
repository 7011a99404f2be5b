//! Rule-cascade intent classification
//!
//! A fixed-priority walk over declarative per-domain rule tables. Called
//! only when no stored pattern matched the message; the floor is always
//! `general_conversation`, never an absent result.

pub mod classifier;
pub mod rules;

pub use classifier::IntentClassifier;
pub use rules::{CascadeRule, RuleContext, RuleSet};
