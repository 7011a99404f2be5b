//! Kubernetes family handler

use async_trait::async_trait;
use workmate_core::{intents, Entities, HandlerError, HandlerResult};

use super::entity_str;
use crate::registry::IntentHandler;

pub struct KubernetesHandler;

const SUGGESTIONS: &[&str] = &["List pods", "List namespaces", "Get pod logs", "Describe a pod"];

#[async_trait]
impl IntentHandler for KubernetesHandler {
    fn name(&self) -> &'static str {
        "kubernetes"
    }

    async fn handle(
        &self,
        intent: &str,
        _message: &str,
        entities: &Entities,
    ) -> Result<HandlerResult, HandlerError> {
        let namespace = entity_str(entities, "namespace").unwrap_or("default");
        let name = entity_str(entities, "resource_name");

        let response = match intent {
            intents::LIST_PODS => format!("Here are the pods in namespace {namespace}."),
            intents::LIST_NAMESPACES => "Here are the namespaces in the cluster.".to_string(),
            intents::LIST_SERVICES => format!("Here are the services in namespace {namespace}."),
            intents::LIST_DEPLOYMENTS => {
                format!("Here are the deployments in namespace {namespace}.")
            }
            intents::DESCRIBE_POD => match name {
                Some(pod) => format!("Described pod {pod} in namespace {namespace}."),
                None => return Err(HandlerError::MissingEntity("resource_name".to_string())),
            },
            intents::GET_POD_LOGS => match name {
                Some(pod) => format!("Here are the logs for pod {pod} in namespace {namespace}."),
                None => format!("Here are the pod logs from namespace {namespace}."),
            },
            intents::EXEC_POD => match name {
                Some(pod) => format!("Opened a shell into pod {pod}."),
                None => return Err(HandlerError::MissingEntity("resource_name".to_string())),
            },
            intents::PORT_FORWARD => match name {
                Some(pod) => format!("Started a port-forward to {pod}."),
                None => return Err(HandlerError::MissingEntity("resource_name".to_string())),
            },
            intents::KUBERNETES_HELP => {
                "Here is how to do that with kubectl or oc.".to_string()
            }
            _ => "Ran the cluster command.".to_string(),
        };

        Ok(HandlerResult::new(response, intent)
            .with_suggestions(SUGGESTIONS.iter().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_pods_in_namespace() {
        let mut entities = Entities::new();
        entities.insert("namespace".to_string(), json!("kube-system"));

        let result = KubernetesHandler
            .handle(intents::LIST_PODS, "", &entities)
            .await
            .unwrap();
        assert_eq!(result.response, "Here are the pods in namespace kube-system.");
    }

    #[tokio::test]
    async fn test_describe_pod_requires_name() {
        let err = KubernetesHandler
            .handle(intents::DESCRIBE_POD, "", &Entities::new())
            .await
            .unwrap_err();
        assert!(matches!(err, HandlerError::MissingEntity(_)));
    }
}
