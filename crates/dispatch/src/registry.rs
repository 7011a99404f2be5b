//! Handler registry and the dispatch boundary
//!
//! A static table maps every intent the classifier can produce to
//! exactly one async handler. Handler failures and timeouts are
//! converted into a user-safe fallback response at this boundary and
//! never propagate to the caller.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use workmate_core::{intents, Entities, HandlerError, HandlerResult};

use crate::handlers;

#[async_trait]
pub trait IntentHandler: Send + Sync {
    fn name(&self) -> &'static str;

    async fn handle(
        &self,
        intent: &str,
        message: &str,
        entities: &Entities,
    ) -> Result<HandlerResult, HandlerError>;
}

pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn IntentHandler>>,
    general: Arc<dyn IntentHandler>,
    timeout: Duration,
}

impl HandlerRegistry {
    pub fn new(timeout: Duration) -> Self {
        Self {
            handlers: HashMap::new(),
            general: Arc::new(handlers::general::GeneralHandler),
            timeout,
        }
    }

    pub fn register(&mut self, intent: &str, handler: Arc<dyn IntentHandler>) {
        self.handlers.insert(intent.to_string(), handler);
    }

    pub fn registered_intents(&self) -> Vec<String> {
        self.handlers.keys().cloned().collect()
    }

    /// Dispatch one resolved intent. Unknown intents go to the general
    /// handler; errors and timeouts become the fallback result.
    pub async fn route(&self, intent: &str, message: &str, entities: &Entities) -> HandlerResult {
        let handler = self.handlers.get(intent).unwrap_or(&self.general);

        match tokio::time::timeout(self.timeout, handler.handle(intent, message, entities)).await
        {
            Ok(Ok(result)) => result,
            Ok(Err(err)) => {
                tracing::warn!(intent, handler = handler.name(), error = %err, "Handler failed");
                HandlerResult::error_fallback(intent, &err)
            }
            Err(_) => {
                let err = HandlerError::Timeout(self.timeout.as_millis() as u64);
                tracing::warn!(intent, handler = handler.name(), "Handler timed out");
                HandlerResult::error_fallback(intent, &err)
            }
        }
    }
}

/// The full intent table: every dispatchable intent mapped to its
/// family handler.
pub fn default_registry(timeout: Duration) -> HandlerRegistry {
    let mut registry = HandlerRegistry::new(timeout);

    let email = Arc::new(handlers::email::EmailHandler);
    let github = Arc::new(handlers::github::GitHubHandler);
    let jira = Arc::new(handlers::jira::JiraHandler);
    let kubernetes = Arc::new(handlers::kubernetes::KubernetesHandler);
    let calendar = Arc::new(handlers::calendar::CalendarHandler);
    let contacts = Arc::new(handlers::contacts::ContactsHandler);
    let slack = Arc::new(handlers::slack::SlackHandler);
    let diagnostics = Arc::new(handlers::mustgather::DiagnosticsHandler);
    let model = Arc::new(handlers::model::ModelHandler);

    for intent in intents::ALL {
        let handler: Arc<dyn IntentHandler> = match family_of(intent) {
            IntentFamily::Email => email.clone(),
            IntentFamily::GitHub => github.clone(),
            IntentFamily::Jira => jira.clone(),
            IntentFamily::Kubernetes => kubernetes.clone(),
            IntentFamily::Calendar => calendar.clone(),
            IntentFamily::Contacts => contacts.clone(),
            IntentFamily::Slack => slack.clone(),
            IntentFamily::Diagnostics => diagnostics.clone(),
            IntentFamily::Model => model.clone(),
            IntentFamily::General => Arc::new(handlers::general::GeneralHandler),
        };
        registry.register(intent, handler);
    }

    registry
}

enum IntentFamily {
    Email,
    GitHub,
    Jira,
    Kubernetes,
    Calendar,
    Contacts,
    Slack,
    Diagnostics,
    Model,
    General,
}

fn family_of(intent: &str) -> IntentFamily {
    match intent {
        i if i.starts_with("github_") => IntentFamily::GitHub,
        intents::ADD_JIRA_COMMENT
        | intents::ASSIGN_JIRA_ISSUE
        | intents::JIRA_STATUS_LOOKUP
        | intents::UPDATE_JIRA_STATUS
        | intents::JIRA_METADATA_QUERY
        | intents::JIRA_ADVANCED_FILTER
        | intents::JIRA_SPRINT_QUERY
        | intents::CREATE_JIRA_ISSUE
        | intents::FETCH_JIRA_ISSUES => IntentFamily::Jira,
        intents::LIST_PODS
        | intents::LIST_NAMESPACES
        | intents::LIST_SERVICES
        | intents::LIST_DEPLOYMENTS
        | intents::DESCRIBE_POD
        | intents::GET_POD_LOGS
        | intents::EXEC_POD
        | intents::PORT_FORWARD
        | intents::KUBERNETES_HELP => IntentFamily::Kubernetes,
        intents::ACCEPT_MEETING
        | intents::SCHEDULE_CALL
        | intents::SET_MEETING_REMINDER
        | intents::SEND_INVITE
        | intents::SHOW_CALENDAR
        | intents::SHOW_EVENTS
        | intents::SCHEDULE_MEETING
        | intents::CALENDAR_SEARCH => IntentFamily::Calendar,
        intents::FIND_CONTACT | intents::LIST_CONTACTS => IntentFamily::Contacts,
        intents::SEND_SLACK_MESSAGE | intents::READ_SLACK_MESSAGES => IntentFamily::Slack,
        intents::ANALYZE_MUST_GATHER
        | intents::CLUSTER_HEALTH_CHECK
        | intents::TROUBLESHOOT_OPENSHIFT => IntentFamily::Diagnostics,
        intents::SHOW_MODEL | intents::SWITCH_MODEL => IntentFamily::Model,
        intents::GENERAL_CONVERSATION => IntentFamily::General,
        // the remaining intents are all email actions
        _ => IntentFamily::Email,
    }
}
