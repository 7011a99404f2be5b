//! Contact lookup rules

use workmate_core::intents;
use workmate_extract::extract_email_entities;

use super::{CascadeRule, RuleContext, RuleSet};

pub fn rules() -> RuleSet {
    RuleSet {
        name: "contacts",
        gate: |ctx| {
            ctx.contains_any(&["contact", "phone number", "email address of", "address book"])
        },
        rules: vec![
            CascadeRule {
                name: "list_contacts",
                intent: intents::LIST_CONTACTS,
                confidence: 0.9,
                predicate: |ctx| {
                    ctx.contains_any(&[
                        "list contacts",
                        "show contacts",
                        "my contacts",
                        "all contacts",
                        "address book",
                    ])
                },
                extractor: None,
            },
            CascadeRule {
                name: "find_contact",
                intent: intents::FIND_CONTACT,
                confidence: 0.85,
                predicate: |ctx| {
                    ctx.contains_any(&[
                        "find",
                        "search",
                        "look up",
                        "lookup",
                        "phone number",
                        "email address of",
                    ])
                },
                extractor: Some(extract_email_entities),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_contacts() {
        let ctx = RuleContext::new("show my contacts");
        assert_eq!(rules().evaluate(&ctx).unwrap().intent, intents::LIST_CONTACTS);
    }

    #[test]
    fn test_find_contact() {
        let ctx = RuleContext::new("find the phone number for dana");
        assert_eq!(rules().evaluate(&ctx).unwrap().intent, intents::FIND_CONTACT);
    }
}
