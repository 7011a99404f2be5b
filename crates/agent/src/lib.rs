//! Workmate engine
//!
//! The top-level facade over the pattern store, rule-cascade classifier
//! and dispatcher. A host embeds [`Engine`] and drives it one message at
//! a time; transports and provider clients live outside this workspace.

pub mod engine;
pub mod telemetry;

pub use engine::{Engine, EngineResponse};
pub use workmate_config::EngineConfig;
