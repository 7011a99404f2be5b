//! Family handlers
//!
//! Template responders: each echoes the structured entities into a
//! deterministic response with contextual suggestions. Provider SDK
//! calls live behind these seams and are out of scope here.

pub mod calendar;
pub mod contacts;
pub mod email;
pub mod general;
pub mod github;
pub mod jira;
pub mod kubernetes;
pub mod model;
pub mod mustgather;
pub mod slack;

use workmate_core::Entities;

pub(crate) fn entity_str<'a>(entities: &'a Entities, key: &str) -> Option<&'a str> {
    entities.get(key).and_then(|v| v.as_str())
}

pub(crate) fn entity_i64(entities: &Entities, key: &str) -> Option<i64> {
    entities.get(key).and_then(|v| v.as_i64())
}
