//! Email family handler

use async_trait::async_trait;
use workmate_core::{intents, Entities, HandlerError, HandlerResult};

use super::{entity_i64, entity_str};
use crate::registry::IntentHandler;

pub struct EmailHandler;

const SUGGESTIONS: &[&str] = &["Read emails", "Send email", "Search emails", "Find important emails"];

#[async_trait]
impl IntentHandler for EmailHandler {
    fn name(&self) -> &'static str {
        "email"
    }

    async fn handle(
        &self,
        intent: &str,
        _message: &str,
        entities: &Entities,
    ) -> Result<HandlerResult, HandlerError> {
        let number = entity_i64(entities, "email_number").unwrap_or(1);

        let response = match intent {
            intents::MARK_EMAIL_READ => format!("Marked email {number} as read."),
            intents::MARK_EMAIL_UNREAD => format!("Marked email {number} as unread."),
            intents::MARK_ALL_EMAILS_READ => "Marked all emails in your inbox as read.".to_string(),
            intents::SUMMARIZE_EMAIL => format!("Here is a summary of email {number}."),
            intents::SUMMARIZE_UNREAD_EMAILS => {
                "Here is a summary of your unread emails.".to_string()
            }
            intents::CATEGORIZE_EMAILS => {
                "Grouped your recent emails into categories.".to_string()
            }
            intents::EXTRACT_ACTION_ITEMS => {
                format!("Extracted the action items from email {number}.")
            }
            intents::GENERATE_EMAIL_REPLY => format!("Drafted a reply to email {number}."),
            intents::USE_EMAIL_TEMPLATE => "Applied your email template.".to_string(),
            intents::FIND_ATTACHMENTS => "Found the emails with attachments.".to_string(),
            intents::FIND_IMPORTANT_EMAILS => "Found your important emails.".to_string(),
            intents::DETECT_SPAM => "Scanned your inbox for spam.".to_string(),
            intents::SEARCH_EMAILS_BY_SENDER => match entity_str(entities, "sender") {
                Some(sender) => format!("Found the emails from {sender}."),
                None => "Found the emails matching that sender.".to_string(),
            },
            intents::SEARCH_EMAILS_BY_DATE => "Found the emails in that date range.".to_string(),
            intents::FIND_PENDING_EMAILS => {
                "Found the emails still awaiting a reply.".to_string()
            }
            intents::FIND_UNREAD_EMAILS => "Here are your unread emails.".to_string(),
            intents::SHOW_EMAIL_BODY => format!("Here is the full body of email {number}."),
            intents::TRANSLATE_EMAIL => format!("Translated email {number}."),
            intents::ANALYZE_EMAIL_SENTIMENT => {
                format!("Analyzed the sentiment of email {number}.")
            }
            intents::SEND_EMAIL => {
                let to = entity_str(entities, "to_email").ok_or_else(|| {
                    HandlerError::MissingEntity("to_email".to_string())
                })?;
                match entity_str(entities, "subject") {
                    Some(subject) => format!("Sent the email to {to} with subject \"{subject}\"."),
                    None => format!("Sent the email to {to}."),
                }
            }
            _ => "Here are your recent emails.".to_string(),
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
    async fn test_mark_read_echoes_number() {
        let mut entities = Entities::new();
        entities.insert("email_number".to_string(), json!(3));

        let result = EmailHandler
            .handle(intents::MARK_EMAIL_READ, "mark email 3 as read", &entities)
            .await
            .unwrap();
        assert_eq!(result.response, "Marked email 3 as read.");
        assert_eq!(result.action_taken, intents::MARK_EMAIL_READ);
        assert!(!result.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_send_email_requires_recipient() {
        let err = EmailHandler
            .handle(intents::SEND_EMAIL, "send email", &Entities::new())
            .await
            .unwrap_err();
        assert!(matches!(err, HandlerError::MissingEntity(_)));
    }
}
