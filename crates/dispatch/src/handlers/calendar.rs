//! Calendar family handler

use async_trait::async_trait;
use workmate_core::{intents, Entities, HandlerError, HandlerResult};

use super::entity_str;
use crate::registry::IntentHandler;

pub struct CalendarHandler;

const SUGGESTIONS: &[&str] = &["Show calendar", "Schedule a meeting", "Show events", "Send an invite"];

fn attendee_list(entities: &Entities) -> Option<String> {
    let attendees = entities.get("attendees")?.as_array()?;
    let names: Vec<&str> = attendees.iter().filter_map(|v| v.as_str()).collect();
    if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    }
}

#[async_trait]
impl IntentHandler for CalendarHandler {
    fn name(&self) -> &'static str {
        "calendar"
    }

    async fn handle(
        &self,
        intent: &str,
        _message: &str,
        entities: &Entities,
    ) -> Result<HandlerResult, HandlerError> {
        let title = entity_str(entities, "title").unwrap_or("the meeting");

        let response = match intent {
            intents::ACCEPT_MEETING => "Accepted the meeting invite.".to_string(),
            intents::SCHEDULE_CALL => match attendee_list(entities) {
                Some(attendees) => format!("Scheduled the call with {attendees}."),
                None => "Scheduled the call.".to_string(),
            },
            intents::SET_MEETING_REMINDER => format!("Set a reminder for {title}."),
            intents::SEND_INVITE => match attendee_list(entities) {
                Some(attendees) => format!("Sent the invite for {title} to {attendees}."),
                None => return Err(HandlerError::MissingEntity("attendees".to_string())),
            },
            intents::SHOW_CALENDAR => "Here is your calendar.".to_string(),
            intents::SHOW_EVENTS => "Here are your upcoming events.".to_string(),
            intents::SCHEDULE_MEETING => format!("Scheduled {title}."),
            intents::CALENDAR_SEARCH => "Here is what I found on your calendar.".to_string(),
            _ => "Here is your calendar.".to_string(),
        };

        Ok(HandlerResult::new(response, intent)
            .with_suggestions(SUGGESTIONS.iter().copied()))
    }
}
