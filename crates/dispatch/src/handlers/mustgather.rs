//! Cluster diagnostics handler

use async_trait::async_trait;
use workmate_core::{intents, Entities, HandlerError, HandlerResult};

use crate::registry::IntentHandler;

pub struct DiagnosticsHandler;

const SUGGESTIONS: &[&str] = &["Analyze must-gather", "Run health check", "Troubleshoot cluster"];

#[async_trait]
impl IntentHandler for DiagnosticsHandler {
    fn name(&self) -> &'static str {
        "diagnostics"
    }

    async fn handle(
        &self,
        intent: &str,
        _message: &str,
        _entities: &Entities,
    ) -> Result<HandlerResult, HandlerError> {
        let response = match intent {
            intents::ANALYZE_MUST_GATHER => {
                "Analyzed the must-gather archive and summarized the findings.".to_string()
            }
            intents::CLUSTER_HEALTH_CHECK => {
                "Ran a health check across cluster operators and nodes.".to_string()
            }
            intents::TROUBLESHOOT_OPENSHIFT => {
                "Here is a troubleshooting plan for the reported problem.".to_string()
            }
            _ => "Ran the cluster diagnostics.".to_string(),
        };

        Ok(HandlerResult::new(response, intent)
            .with_suggestions(SUGGESTIONS.iter().copied()))
    }
}
