//! Canonical intent names
//!
//! Every intent the classifier can produce and the dispatcher can route.
//! Handlers and rule tables refer to these constants rather than repeating
//! string literals.

// GitHub / pull requests
pub const GITHUB_SUMMARIZE_PR: &str = "github_summarize_pr";
pub const GITHUB_REVIEW_PR: &str = "github_review_pr";
pub const GITHUB_COMMENT_PR: &str = "github_comment_pr";
pub const GITHUB_LABEL_PR: &str = "github_label_pr";
pub const GITHUB_APPROVE_PR: &str = "github_approve_pr";
pub const GITHUB_CLOSE_PR: &str = "github_close_pr";
pub const GITHUB_MERGE_PR: &str = "github_merge_pr";
pub const GITHUB_PR_ACTION: &str = "github_pr_action";
pub const GITHUB_LIST_PRS: &str = "github_list_prs";
pub const GITHUB_CREATE_PR: &str = "github_create_pr";

// Email
pub const FIND_UNREAD_EMAILS: &str = "find_unread_emails";
pub const FIND_IMPORTANT_EMAILS: &str = "find_important_emails";
pub const SEARCH_EMAILS_BY_SENDER: &str = "search_emails_by_sender";
pub const SEARCH_EMAILS_BY_DATE: &str = "search_emails_by_date";
pub const FIND_ATTACHMENTS: &str = "find_attachments";
pub const FIND_PENDING_EMAILS: &str = "find_pending_emails";
pub const DETECT_SPAM: &str = "detect_spam";
pub const MARK_EMAIL_READ: &str = "mark_email_read";
pub const MARK_EMAIL_UNREAD: &str = "mark_email_unread";
pub const MARK_ALL_EMAILS_READ: &str = "mark_all_emails_read";
pub const SUMMARIZE_EMAIL: &str = "summarize_email";
pub const SUMMARIZE_UNREAD_EMAILS: &str = "summarize_unread_emails";
pub const CATEGORIZE_EMAILS: &str = "categorize_emails";
pub const EXTRACT_ACTION_ITEMS: &str = "extract_action_items";
pub const GENERATE_EMAIL_REPLY: &str = "generate_email_reply";
pub const USE_EMAIL_TEMPLATE: &str = "use_email_template";
pub const SHOW_EMAIL_BODY: &str = "show_email_body";
pub const TRANSLATE_EMAIL: &str = "translate_email";
pub const ANALYZE_EMAIL_SENTIMENT: &str = "analyze_email_sentiment";
pub const SEND_EMAIL: &str = "send_email";
pub const READ_EMAILS: &str = "read_emails";

// Model management
pub const SHOW_MODEL: &str = "show_model";
pub const SWITCH_MODEL: &str = "switch_model";

// Meetings / calendar
pub const ACCEPT_MEETING: &str = "accept_meeting";
pub const SCHEDULE_CALL: &str = "schedule_call";
pub const SET_MEETING_REMINDER: &str = "set_meeting_reminder";
pub const SEND_INVITE: &str = "send_invite";
pub const SHOW_CALENDAR: &str = "show_calendar";
pub const SHOW_EVENTS: &str = "show_events";
pub const SCHEDULE_MEETING: &str = "schedule_meeting";
pub const CALENDAR_SEARCH: &str = "calendar_search";

// Contacts
pub const FIND_CONTACT: &str = "find_contact";
pub const LIST_CONTACTS: &str = "list_contacts";

// Cluster diagnostics
pub const ANALYZE_MUST_GATHER: &str = "analyze_must_gather";
pub const CLUSTER_HEALTH_CHECK: &str = "cluster_health_check";
pub const TROUBLESHOOT_OPENSHIFT: &str = "troubleshoot_openshift";

// Kubernetes / OpenShift commands
pub const LIST_PODS: &str = "list_pods";
pub const LIST_NAMESPACES: &str = "list_namespaces";
pub const LIST_SERVICES: &str = "list_services";
pub const LIST_DEPLOYMENTS: &str = "list_deployments";
pub const DESCRIBE_POD: &str = "describe_pod";
pub const GET_POD_LOGS: &str = "get_pod_logs";
pub const EXEC_POD: &str = "exec_pod";
pub const PORT_FORWARD: &str = "port_forward";
pub const KUBERNETES_HELP: &str = "kubernetes_help";

// Jira
pub const ADD_JIRA_COMMENT: &str = "add_jira_comment";
pub const ASSIGN_JIRA_ISSUE: &str = "assign_jira_issue";
pub const JIRA_STATUS_LOOKUP: &str = "jira_status_lookup";
pub const UPDATE_JIRA_STATUS: &str = "update_jira_status";
pub const JIRA_METADATA_QUERY: &str = "jira_metadata_query";
pub const JIRA_ADVANCED_FILTER: &str = "jira_advanced_filter";
pub const JIRA_SPRINT_QUERY: &str = "jira_sprint_query";
pub const CREATE_JIRA_ISSUE: &str = "create_jira_issue";
pub const FETCH_JIRA_ISSUES: &str = "fetch_jira_issues";

// Slack
pub const SEND_SLACK_MESSAGE: &str = "send_slack_message";
pub const READ_SLACK_MESSAGES: &str = "read_slack_messages";

// Catch-all
pub const GENERAL_CONVERSATION: &str = "general_conversation";

/// All dispatchable intents, used to build the default handler registry.
pub const ALL: &[&str] = &[
    GITHUB_SUMMARIZE_PR,
    GITHUB_REVIEW_PR,
    GITHUB_COMMENT_PR,
    GITHUB_LABEL_PR,
    GITHUB_APPROVE_PR,
    GITHUB_CLOSE_PR,
    GITHUB_MERGE_PR,
    GITHUB_PR_ACTION,
    GITHUB_LIST_PRS,
    GITHUB_CREATE_PR,
    FIND_UNREAD_EMAILS,
    FIND_IMPORTANT_EMAILS,
    SEARCH_EMAILS_BY_SENDER,
    SEARCH_EMAILS_BY_DATE,
    FIND_ATTACHMENTS,
    FIND_PENDING_EMAILS,
    DETECT_SPAM,
    MARK_EMAIL_READ,
    MARK_EMAIL_UNREAD,
    MARK_ALL_EMAILS_READ,
    SUMMARIZE_EMAIL,
    SUMMARIZE_UNREAD_EMAILS,
    CATEGORIZE_EMAILS,
    EXTRACT_ACTION_ITEMS,
    GENERATE_EMAIL_REPLY,
    USE_EMAIL_TEMPLATE,
    SHOW_EMAIL_BODY,
    TRANSLATE_EMAIL,
    ANALYZE_EMAIL_SENTIMENT,
    SEND_EMAIL,
    READ_EMAILS,
    SHOW_MODEL,
    SWITCH_MODEL,
    ACCEPT_MEETING,
    SCHEDULE_CALL,
    SET_MEETING_REMINDER,
    SEND_INVITE,
    SHOW_CALENDAR,
    SHOW_EVENTS,
    SCHEDULE_MEETING,
    CALENDAR_SEARCH,
    FIND_CONTACT,
    LIST_CONTACTS,
    ANALYZE_MUST_GATHER,
    CLUSTER_HEALTH_CHECK,
    TROUBLESHOOT_OPENSHIFT,
    LIST_PODS,
    LIST_NAMESPACES,
    LIST_SERVICES,
    LIST_DEPLOYMENTS,
    DESCRIBE_POD,
    GET_POD_LOGS,
    EXEC_POD,
    PORT_FORWARD,
    KUBERNETES_HELP,
    ADD_JIRA_COMMENT,
    ASSIGN_JIRA_ISSUE,
    JIRA_STATUS_LOOKUP,
    UPDATE_JIRA_STATUS,
    JIRA_METADATA_QUERY,
    JIRA_ADVANCED_FILTER,
    JIRA_SPRINT_QUERY,
    CREATE_JIRA_ISSUE,
    FETCH_JIRA_ISSUES,
    SEND_SLACK_MESSAGE,
    READ_SLACK_MESSAGES,
    GENERAL_CONVERSATION,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_intents_unique() {
        let mut seen = std::collections::HashSet::new();
        for intent in ALL {
            assert!(seen.insert(intent), "duplicate intent name: {intent}");
        }
    }

    #[test]
    fn test_all_intents_snake_case() {
        for intent in ALL {
            assert!(
                intent
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "intent not snake_case: {intent}"
            );
        }
    }
}
