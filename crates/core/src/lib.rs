//! Core types for the workspace assistant intent engine
//!
//! This crate provides the foundational types shared across all other crates:
//! - Classification and entity types
//! - Handler result/error contract for dispatch
//! - Canonical intent names
//! - Conversation turn log

pub mod conversation;
pub mod intents;
pub mod types;

pub use conversation::{ConversationLog, ConversationTurn, TurnRole};
pub use types::{ClassificationResult, Entities, HandlerError, HandlerResult};
