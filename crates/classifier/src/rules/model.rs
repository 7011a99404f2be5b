//! Model-management rules

use workmate_core::intents;
use workmate_extract::extract_github_entities;

use super::{CascadeRule, RuleContext, RuleSet};

pub fn rules() -> RuleSet {
    RuleSet {
        name: "model",
        gate: |ctx| ctx.contains("model"),
        rules: vec![
            CascadeRule {
                name: "switch_model",
                intent: intents::SWITCH_MODEL,
                confidence: 0.9,
                predicate: |ctx| {
                    ctx.contains_any(&["switch model", "change model", "switch to", "use the"])
                },
                // picks up the granite/gemini/openai/ollama keyword
                extractor: Some(extract_github_entities),
            },
            CascadeRule {
                name: "show_model",
                intent: intents::SHOW_MODEL,
                confidence: 0.9,
                predicate: |ctx| {
                    ctx.contains_any(&["show model", "current model", "which model", "what model"])
                },
                extractor: None,
            },
        ],
    }
}
