//! Integration tests for the tester session reducer

use curriculum_tags::core::models::{CurriculumError, CurriculumTable, Tag};
use curriculum_tags::core::sequencer::Direction;
use curriculum_tags::core::session::{Action, Effect, Focus, Key, NavState, TesterSession};
use curriculum_tags::core::source::{CurriculumSource, FileSource, JsonSource};

const SAMPLE: &str = "samples/curriculum/tester_curriculum.json";

fn issue(session: &mut TesterSession) -> u64 {
    match session.apply(Action::FetchIssued) {
        Effect::Fetch { generation } => generation,
        other => panic!("expected a fetch, got {other:?}"),
    }
}

fn loaded_session(subject: &str, tag: &str) -> TesterSession {
    let mut session = TesterSession::new("mcq", Some(subject), None);
    let generation = issue(&mut session);
    session.apply(Action::FetchCompleted {
        generation,
        result: FileSource::new(SAMPLE).load(),
    });
    session.apply(Action::ShowTag(tag.to_string()));
    session
}

fn displayed(session: &TesterSession) -> Option<&str> {
    match session.nav() {
        NavState::Displaying(tag) => Some(tag),
        NavState::Idle => None,
    }
}

#[test]
fn test_arrow_keys_navigate_and_build_urls() {
    let mut session = loaded_session("mathX", "Day-1:2");

    let effect = session.apply(Action::KeyPressed {
        key: Key::ArrowRight,
        focus: Focus::Document,
    });
    match effect {
        Effect::Navigate(request) => {
            assert_eq!(request.tag, Tag::new(2, 1));
            assert_eq!(request.url, "/create-questions/mcq?subject=mathX&tags=Day-2:1");
        }
        other => panic!("expected navigation, got {other:?}"),
    }
    assert_eq!(displayed(&session), Some("Day-2:1"));
    assert_eq!(session.current_topic(), Some("Geometry"));

    session.apply(Action::KeyPressed {
        key: Key::ArrowLeft,
        focus: Focus::Document,
    });
    assert_eq!(displayed(&session), Some("Day-1:2"));
}

#[test]
fn test_arrow_keys_ignored_in_text_fields() {
    let mut session = loaded_session("mathX", "Day-1:1");
    for focus in [Focus::TextInput, Focus::TextArea, Focus::Select] {
        let effect = session.apply(Action::KeyPressed {
            key: Key::ArrowRight,
            focus,
        });
        assert_eq!(effect, Effect::None);
    }
    assert_eq!(displayed(&session), Some("Day-1:1"));
}

#[test]
fn test_end_of_sequence_is_noop() {
    let mut session = loaded_session("mathX", "Day-2:1");
    assert_eq!(session.apply(Action::Navigate(Direction::Next)), Effect::None);
    assert_eq!(displayed(&session), Some("Day-2:1"));
}

#[test]
fn test_malformed_tag_does_not_navigate() {
    let mut session = loaded_session("mathX", "overview");
    assert_eq!(session.apply(Action::Navigate(Direction::Next)), Effect::None);
    assert_eq!(session.apply(Action::Navigate(Direction::Prev)), Effect::None);
}

#[test]
fn test_stale_fetch_is_discarded() {
    let mut session = TesterSession::new("mcq", Some("mathX"), None);
    let slow = issue(&mut session);
    let fast = issue(&mut session);

    session.apply(Action::FetchCompleted {
        generation: fast,
        result: FileSource::new(SAMPLE).load(),
    });
    assert_eq!(session.indices().total_tags(), 3);

    session.apply(Action::FetchCompleted {
        generation: slow,
        result: Ok(CurriculumTable::new()),
    });
    assert_eq!(session.indices().total_tags(), 3, "older response must not win");

    session.apply(Action::FetchFailed {
        generation: slow,
        message: "timeout".to_string(),
    });
    assert!(session.notice().is_none());
}

#[test]
fn test_malformed_payload_keeps_previous_state() {
    let mut session = loaded_session("mathX", "Day-1:1");
    let generation = issue(&mut session);

    session.apply(Action::FetchCompleted {
        generation,
        result: JsonSource::new(r#"{"status": "ok"}"#).load(),
    });

    let notice = session.notice().expect("a notice is shown");
    assert!(notice.retryable);
    assert!(notice.message.contains("curriculumTable"));
    assert_eq!(session.indices().total_tags(), 3);
    assert!(matches!(
        JsonSource::new("{}").load(),
        Err(CurriculumError::MissingCurriculumTable)
    ));
}

#[test]
fn test_successful_fetch_clears_notice() {
    let mut session = TesterSession::new("mcq", Some("mathX"), None);
    let generation = issue(&mut session);
    session.apply(Action::FetchFailed {
        generation,
        message: "network down".to_string(),
    });
    assert!(session.notice().is_some());

    let retry = issue(&mut session);
    session.apply(Action::FetchCompleted {
        generation: retry,
        result: FileSource::new(SAMPLE).load(),
    });
    assert!(session.notice().is_none());
}

#[test]
fn test_subject_switch_rebuilds_indices() {
    let mut session = loaded_session("mathX", "Day-1:1");
    session.apply(Action::SelectSubject("python".to_string()));

    assert_eq!(session.subject(), Some("python"));
    assert_eq!(session.nav(), &NavState::Idle);
    assert_eq!(session.indices().total_tags(), 7);
    assert_eq!(session.indices().subject, "python");
}
