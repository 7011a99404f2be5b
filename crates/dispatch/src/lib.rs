//! Intent dispatch
//!
//! Maps resolved intents to async family handlers behind a single safe
//! boundary: handler errors and timeouts become a user-visible fallback
//! response, never a propagated failure.

pub mod handlers;
pub mod registry;

pub use registry::{default_registry, HandlerRegistry, IntentHandler};
