//! Cluster diagnostics rules
//!
//! Must-gather analysis and health checks first, then the broader
//! OpenShift troubleshooting net.

use workmate_core::intents;
use workmate_extract::extract_kubernetes_entities;

use super::{CascadeRule, RuleContext, RuleSet};

pub fn rules() -> RuleSet {
    RuleSet {
        name: "must_gather",
        gate: |ctx| {
            ctx.contains_any(&["must-gather", "must gather", "health check", "cluster health"])
        },
        rules: vec![
            CascadeRule {
                name: "analyze_must_gather",
                intent: intents::ANALYZE_MUST_GATHER,
                confidence: 0.9,
                predicate: |ctx| ctx.contains_any(&["must-gather", "must gather"]),
                extractor: Some(extract_kubernetes_entities),
            },
            CascadeRule {
                name: "cluster_health_check",
                intent: intents::CLUSTER_HEALTH_CHECK,
                confidence: 0.9,
                predicate: |ctx| ctx.contains_any(&["health check", "cluster health"]),
                extractor: Some(extract_kubernetes_entities),
            },
        ],
    }
}

pub fn troubleshoot_rules() -> RuleSet {
    RuleSet {
        name: "openshift_troubleshoot",
        gate: |ctx| ctx.contains_any(&["openshift", "cluster", "operator", "node"]),
        rules: vec![CascadeRule {
            name: "troubleshoot",
            intent: intents::TROUBLESHOOT_OPENSHIFT,
            confidence: 0.8,
            predicate: |ctx| {
                ctx.contains_any(&[
                    "troubleshoot",
                    "debug",
                    "not working",
                    "failing",
                    "degraded",
                    "crashloop",
                    "not ready",
                ])
            },
            extractor: Some(extract_kubernetes_entities),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_must_gather() {
        let ctx = RuleContext::new("analyze the must-gather from cluster prod");
        assert_eq!(rules().evaluate(&ctx).unwrap().intent, intents::ANALYZE_MUST_GATHER);
    }

    #[test]
    fn test_health_check() {
        let ctx = RuleContext::new("run a cluster health check");
        assert_eq!(rules().evaluate(&ctx).unwrap().intent, intents::CLUSTER_HEALTH_CHECK);
    }

    #[test]
    fn test_troubleshoot() {
        let ctx = RuleContext::new("my openshift ingress is failing");
        assert_eq!(
            troubleshoot_rules().evaluate(&ctx).unwrap().intent,
            intents::TROUBLESHOOT_OPENSHIFT
        );
    }
}
