//! Meeting and calendar rules
//!
//! Meeting-action phrases sit above generic calendar views, and a bare
//! "calendar" mention falls back to showing the calendar at low
//! confidence.

use workmate_core::intents;
use workmate_extract::extract_calendar_entities;

use super::{CascadeRule, RuleContext, RuleSet};

pub fn rules() -> RuleSet {
    RuleSet {
        name: "calendar",
        gate: |ctx| {
            ctx.contains_any(&["calendar", "meeting", "invite", "event", "call", "remind"])
        },
        rules: vec![
            CascadeRule {
                name: "accept_meeting",
                intent: intents::ACCEPT_MEETING,
                confidence: 0.95,
                predicate: |ctx| {
                    ctx.contains("accept") && ctx.contains_any(&["meeting", "invite"])
                },
                extractor: Some(extract_calendar_entities),
            },
            CascadeRule {
                name: "schedule_call",
                intent: intents::SCHEDULE_CALL,
                confidence: 0.95,
                predicate: |ctx| {
                    ctx.contains("schedule") && ctx.contains("call") && ctx.contains("with")
                },
                extractor: Some(extract_calendar_entities),
            },
            CascadeRule {
                name: "set_meeting_reminder",
                intent: intents::SET_MEETING_REMINDER,
                confidence: 0.95,
                predicate: |ctx| {
                    (ctx.contains("remind") && ctx.contains("meeting"))
                        || ctx.contains("set a reminder")
                        || ctx.contains("set reminder")
                },
                extractor: Some(extract_calendar_entities),
            },
            CascadeRule {
                name: "send_invite",
                intent: intents::SEND_INVITE,
                confidence: 0.95,
                predicate: |ctx| {
                    ctx.contains("send") && ctx.contains_any(&["invite", "invitation"])
                },
                extractor: Some(extract_calendar_entities),
            },
            CascadeRule {
                name: "show_calendar",
                intent: intents::SHOW_CALENDAR,
                confidence: 0.9,
                predicate: |ctx| {
                    ctx.contains_any(&[
                        "show calendar",
                        "show my calendar",
                        "view calendar",
                        "open calendar",
                        "my calendar",
                    ])
                },
                extractor: Some(extract_calendar_entities),
            },
            CascadeRule {
                name: "show_events",
                intent: intents::SHOW_EVENTS,
                confidence: 0.8,
                predicate: |ctx| {
                    ctx.contains_any(&[
                        "show events",
                        "my events",
                        "upcoming events",
                        "events today",
                        "what do i have",
                    ])
                },
                extractor: Some(extract_calendar_entities),
            },
            CascadeRule {
                name: "schedule_meeting",
                intent: intents::SCHEDULE_MEETING,
                confidence: 0.8,
                predicate: |ctx| {
                    (ctx.contains("schedule") && ctx.contains("meeting"))
                        || ctx.contains_any(&[
                            "create meeting",
                            "create a meeting",
                            "book a meeting",
                            "set up a meeting",
                        ])
                },
                extractor: Some(extract_calendar_entities),
            },
            CascadeRule {
                name: "calendar_search",
                intent: intents::CALENDAR_SEARCH,
                confidence: 0.7,
                predicate: |ctx| {
                    ctx.contains("calendar")
                        && ctx.contains_any(&["find", "search", "when is", "when's"])
                },
                extractor: Some(extract_calendar_entities),
            },
            CascadeRule {
                name: "calendar_default",
                intent: intents::SHOW_CALENDAR,
                confidence: 0.6,
                predicate: |ctx| ctx.contains("calendar"),
                extractor: Some(extract_calendar_entities),
            },
        ],
    }
}
