//! End-to-end engine scenarios

use serde_json::json;
use workmate_agent::{Engine, EngineConfig};
use workmate_core::{intents, Entities};

fn engine_in(dir: &tempfile::TempDir) -> Engine {
    let config = EngineConfig {
        store_path: dir.path().join("patterns.json"),
        ..EngineConfig::default()
    };
    Engine::new(&config)
}

#[test]
fn classify_pr_review_url() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir);

    let result = engine.classify_intent("review https://github.com/acme/widgets/pull/42");
    assert_eq!(result.intent, intents::GITHUB_REVIEW_PR);
    assert!(result.confidence >= 0.9);
    assert_eq!(result.entities["owner"], json!("acme"));
    assert_eq!(result.entities["repo"], json!("widgets"));
    assert_eq!(result.entities["pr_number"], json!(42));
}

#[test]
fn classify_mark_email_read() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir);

    let result = engine.classify_intent("mark email 2 as read");
    assert_eq!(result.intent, intents::MARK_EMAIL_READ);
    assert_eq!(result.entities["email_number"], json!(2));
}

#[test]
fn classify_jira_status_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir);

    let result = engine.classify_intent("what's the status of OCPBUGS-1234");
    assert_eq!(result.intent, intents::JIRA_STATUS_LOOKUP);
    assert_eq!(result.entities["issue_key"], json!("OCPBUGS-1234"));
}

#[test]
fn classify_add_jira_comment() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir);

    let result = engine.classify_intent("add comment to OCPQE-30241 working on it");
    assert_eq!(result.intent, intents::ADD_JIRA_COMMENT);
    assert_eq!(result.entities["issue_key"], json!("OCPQE-30241"));
    assert_eq!(result.entities["comment_text"], json!("working on it"));
}

#[test]
fn classify_list_pods() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir);

    let result = engine.classify_intent("list pods in ns kube-system");
    assert_eq!(result.intent, intents::LIST_PODS);
    assert_eq!(result.entities["namespace"], json!("kube-system"));
}

#[test]
fn classify_greeting() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir);

    let result = engine.classify_intent("hi");
    assert_eq!(result.intent, intents::GENERAL_CONVERSATION);
    assert!((0.5..=0.6).contains(&result.confidence));
}

#[test]
fn classify_never_fails() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir);

    for message in ["", "   ", "🦀", "a"] {
        let result = engine.classify_intent(message);
        assert!(!result.intent.is_empty());
        assert!((0.0..=1.0).contains(&result.confidence));
    }
}

#[test]
fn stored_pattern_beats_cascade() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir);

    // the cascade would call this an email action
    engine
        .store()
        .add_pattern_with(
            intents::SEND_SLACK_MESSAGE,
            "mark email 2 as read",
            Entities::new(),
            0.9,
            1.0,
        )
        .unwrap();

    let result = engine.classify_intent("mark email 2 as read");
    assert_eq!(result.intent, intents::SEND_SLACK_MESSAGE);
}

#[test]
fn regex_pattern_beats_cascade() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir);

    engine
        .store()
        .add_pattern_with(
            intents::CREATE_JIRA_ISSUE,
            r"regex:^file\s+a\s+bug\s+about",
            Entities::new(),
            0.9,
            1.0,
        )
        .unwrap();

    let result = engine.classify_intent("File a bug about the flaky login test");
    assert_eq!(result.intent, intents::CREATE_JIRA_ISSUE);
    assert!((result.confidence - 0.9).abs() < 1e-9);
}

#[test]
fn correction_adds_learned_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir);

    let before = engine.classify_intent("add comment to OCPQE-99 testing");
    assert_eq!(before.intent, intents::ADD_JIRA_COMMENT);

    // user says this phrasing actually means a status update
    engine
        .learn_from_interaction(
            "add comment to OCPQE-99 testing",
            before.intent.as_str(),
            intents::UPDATE_JIRA_STATUS,
            Entities::new(),
            false,
        )
        .unwrap();

    let patterns = engine
        .store()
        .get_patterns_for_intent(intents::UPDATE_JIRA_STATUS);
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].pattern, "add comment to [ISSUE_KEY] [COMMENT]");
    assert!((patterns[0].confidence - 0.7).abs() < 1e-9);
}

#[tokio::test]
async fn process_message_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir);

    let response = engine.process_message("mark email 2 as read").await;
    assert_eq!(response.classification.intent, intents::MARK_EMAIL_READ);
    assert_eq!(response.result.action_taken, intents::MARK_EMAIL_READ);
    assert!(response.result.response.contains('2'));

    let turns = engine.conversation().snapshot();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].content, "mark email 2 as read");
    assert_eq!(turns[1].intent.as_deref(), Some(intents::MARK_EMAIL_READ));
}

#[tokio::test]
async fn process_message_survives_handler_error() {
    let dir = tempfile::tempdir().unwrap();
    let engine = engine_in(&dir);

    // send_email without a recipient makes the handler fail; the engine
    // still answers
    let response = engine.process_message("send an email please").await;
    assert_eq!(response.classification.intent, intents::SEND_EMAIL);
    assert_eq!(response.result.action_taken, "error_fallback");
    assert!(response.result.response.contains("send_email"));
}

#[test]
fn learning_persists_across_engines() {
    let dir = tempfile::tempdir().unwrap();

    {
        let engine = engine_in(&dir);
        engine
            .learn_from_interaction(
                "ping dana@example.com about standup",
                intents::GENERAL_CONVERSATION,
                intents::SEND_EMAIL,
                Entities::new(),
                false,
            )
            .unwrap();
    }

    let engine = engine_in(&dir);
    let patterns = engine.store().get_patterns_for_intent(intents::SEND_EMAIL);
    assert_eq!(patterns.len(), 1);
    assert!(patterns[0].pattern.contains("[EMAIL]"));
}
