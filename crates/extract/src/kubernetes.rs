//! Kubernetes entity extraction

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use workmate_core::Entities;

static NAMESPACE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"--namespace[=\s]+([\w-]+)",
        r"-n\s+([\w-]+)",
        r"in\s+namespace\s+([\w-]+)",
        r"in\s+ns\s+([\w-]+)",
        r"in\s+([\w-]+)\s+namespace",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:pod|deployment|service|node|configmap|secret|route)\s+([a-z0-9][\w.-]*)")
        .unwrap()
});

const RESOURCE_TABLE: &[(&str, &str)] = &[
    ("deployments", "deployment"),
    ("deployment", "deployment"),
    ("namespaces", "namespace"),
    ("namespace", "namespace"),
    ("configmaps", "configmap"),
    ("configmap", "configmap"),
    ("services", "service"),
    ("service", "service"),
    ("ingress", "ingress"),
    ("secrets", "secret"),
    ("secret", "secret"),
    ("routes", "route"),
    ("route", "route"),
    ("nodes", "node"),
    ("pods", "pod"),
    ("node", "node"),
    ("pod", "pod"),
    ("svc", "service"),
    ("ns", "namespace"),
];

const COMMAND_TABLE: &[(&str, &str)] = &[
    ("port-forward", "port-forward"),
    ("port forward", "port-forward"),
    ("describe", "describe"),
    ("delete", "delete"),
    ("remove", "delete"),
    ("create", "create"),
    ("apply", "apply"),
    ("logs", "logs"),
    ("exec", "exec"),
    ("list", "get"),
    ("show", "get"),
    ("log", "logs"),
    ("get", "get"),
];

const NAME_SKIP_WORDS: &[&str] = &[
    "in", "on", "the", "a", "an", "all", "list", "logs", "log", "status", "named", "called",
    "for", "from", "with", "to", "of", "and",
];

fn compile_word_table(table: &[(&'static str, &'static str)]) -> Vec<(Regex, &'static str)> {
    table
        .iter()
        .map(|(token, canonical)| {
            let pattern = format!(r"\b{}\b", regex::escape(token));
            (Regex::new(&pattern).unwrap(), *canonical)
        })
        .collect()
}

static RESOURCE_RES: Lazy<Vec<(Regex, &'static str)>> =
    Lazy::new(|| compile_word_table(RESOURCE_TABLE));
static COMMAND_RES: Lazy<Vec<(Regex, &'static str)>> =
    Lazy::new(|| compile_word_table(COMMAND_TABLE));

/// Namespace, resource type, command verb and resource name.
pub fn extract_kubernetes_entities(message: &str) -> Entities {
    let mut entities = Entities::new();
    let lower = message.to_lowercase();

    for re in NAMESPACE_RES.iter() {
        if let Some(m) = re.captures(&lower) {
            entities.insert("namespace".to_string(), json!(m[1].to_string()));
            break;
        }
    }

    if let Some((_, resource)) = RESOURCE_RES.iter().find(|(re, _)| re.is_match(&lower)) {
        entities.insert("resource_type".to_string(), json!(resource.to_string()));
    }

    if let Some((_, command)) = COMMAND_RES.iter().find(|(re, _)| re.is_match(&lower)) {
        entities.insert("command_type".to_string(), json!(command.to_string()));
    }

    for m in NAME_RE.captures_iter(&lower) {
        let name = m[1].to_string();
        if NAME_SKIP_WORDS.contains(&name.as_str()) {
            continue;
        }
        // the namespace grabbed by "in X namespace" is not a resource name
        if entities.get("namespace").and_then(|v| v.as_str()) == Some(name.as_str()) {
            continue;
        }
        entities.insert("resource_name".to_string(), json!(name));
        break;
    }

    entities
}
