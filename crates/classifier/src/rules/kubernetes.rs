//! Kubernetes / OpenShift command rules
//!
//! The whole set is skipped when the message carries Jira signals, so
//! "list my jira issues in the current sprint" never lands on a cluster
//! command. Phrases are ordered most-specific first within the set.

use workmate_core::intents;
use workmate_extract::extract_kubernetes_entities;

use super::jira::has_jira_signal;
use super::{CascadeRule, RuleContext, RuleSet};

pub fn rules() -> RuleSet {
    RuleSet {
        name: "kubernetes",
        gate: |ctx| !has_jira_signal(ctx),
        rules: vec![
            CascadeRule {
                name: "port_forward",
                intent: intents::PORT_FORWARD,
                confidence: 0.9,
                predicate: |ctx| ctx.contains_any(&["port forward", "port-forward"]),
                extractor: Some(extract_kubernetes_entities),
            },
            CascadeRule {
                name: "exec_pod",
                intent: intents::EXEC_POD,
                confidence: 0.9,
                predicate: |ctx| {
                    ctx.contains_any(&["exec into", "execute in pod", "run in pod", "shell into"])
                },
                extractor: Some(extract_kubernetes_entities),
            },
            CascadeRule {
                name: "describe_pod",
                intent: intents::DESCRIBE_POD,
                confidence: 0.9,
                predicate: |ctx| ctx.contains("describe pod"),
                extractor: Some(extract_kubernetes_entities),
            },
            CascadeRule {
                name: "pod_logs",
                intent: intents::GET_POD_LOGS,
                confidence: 0.9,
                predicate: |ctx| {
                    ctx.contains_any(&[
                        "pod logs",
                        "logs for pod",
                        "logs from pod",
                        "logs of pod",
                        "get logs",
                        "show logs",
                    ])
                },
                extractor: Some(extract_kubernetes_entities),
            },
            CascadeRule {
                name: "list_namespaces",
                intent: intents::LIST_NAMESPACES,
                confidence: 0.9,
                predicate: |ctx| {
                    ctx.contains_any(&[
                        "list namespaces",
                        "show namespaces",
                        "get namespaces",
                        "all namespaces",
                    ])
                },
                extractor: Some(extract_kubernetes_entities),
            },
            CascadeRule {
                name: "list_services",
                intent: intents::LIST_SERVICES,
                confidence: 0.9,
                predicate: |ctx| {
                    ctx.contains_any(&["list services", "show services", "get services"])
                },
                extractor: Some(extract_kubernetes_entities),
            },
            CascadeRule {
                name: "list_deployments",
                intent: intents::LIST_DEPLOYMENTS,
                confidence: 0.9,
                predicate: |ctx| {
                    ctx.contains_any(&["list deployments", "show deployments", "get deployments"])
                },
                extractor: Some(extract_kubernetes_entities),
            },
            CascadeRule {
                name: "list_pods",
                intent: intents::LIST_PODS,
                confidence: 0.9,
                predicate: |ctx| {
                    ctx.contains_any(&["list pods", "show pods", "get pods", "all pods", "pods in"])
                },
                extractor: Some(extract_kubernetes_entities),
            },
            CascadeRule {
                name: "kubernetes_help",
                intent: intents::KUBERNETES_HELP,
                confidence: 0.7,
                predicate: |ctx| {
                    ctx.contains_any(&["kubernetes", "k8s", "kubectl", "openshift", "oc "])
                        && ctx.contains_any(&["how do i", "how to", "what is", "help"])
                },
                extractor: Some(extract_kubernetes_entities),
            },
        ],
    }
}
