//! Tests for handler module

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use wikiquiz_api::test_utils::{sample_detail, sample_record, ApiCall, FakeQuizApi};
use wikiquiz_api::ApiError;
use wikiquiz_core::INVALID_ARTICLE_URL_MESSAGE;

use super::keys::handle_key;
use super::*;
use crate::actions::ActionContext;
use crate::controllers::DetailState;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::process::process_message;
use crate::state::{AppPhase, AppState, Tab};

const TURING: &str = "https://en.wikipedia.org/wiki/Alan_Turing";
const LOVELACE: &str = "https://en.wikipedia.org/wiki/Ada_Lovelace";

fn type_text(state: &mut AppState, text: &str) -> Vec<UpdateAction> {
    text.chars()
        .filter_map(|c| update(state, Message::InputChar(c)).action)
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_ctrl_c_quits_everywhere() {
    let mut state = AppState::default();
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));

    state.tab = Tab::History;
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_q_is_text_in_url_input() {
    let state = AppState::default();
    assert!(state.is_text_input_focused());
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::InputChar('q'))
    ));
}

#[test]
fn test_q_quits_on_history_tab() {
    let mut state = AppState::default();
    state.tab = Tab::History;
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_history_keys() {
    let mut state = AppState::default();
    state.tab = Tab::History;
    assert!(matches!(
        handle_key(&state, InputKey::Char('r')),
        Some(Message::RefreshHistory)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::OpenSelectedDetail)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Down),
        Some(Message::HistorySelectNext)
    ));
}

#[test]
fn test_esc_dismisses_open_overlay() {
    let mut state = AppState::default();
    state.tab = Tab::History;
    state.detail.select(3);
    assert!(!state.is_text_input_focused());
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::DismissDetail)
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Update
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::default();
    assert_eq!(state.phase, AppPhase::Running);

    update(&mut state, Message::Quit);

    assert!(state.should_quit());
}

#[test]
fn test_key_message_produces_follow_up() {
    let mut state = AppState::default();
    let result = update(&mut state, Message::Key(InputKey::Enter));
    assert!(matches!(result.message, Some(Message::SubmitGeneration)));
}

#[test]
fn test_typing_schedules_debounce_per_keystroke() {
    let mut state = AppState::default();
    let actions = type_text(&mut state, "ab");

    assert_eq!(state.url_input, "ab");
    assert_eq!(
        actions,
        vec![
            UpdateAction::ScheduleDebounce {
                generation: 1,
                delay: Duration::from_millis(500)
            },
            UpdateAction::ScheduleDebounce {
                generation: 2,
                delay: Duration::from_millis(500)
            },
        ]
    );
}

#[test]
fn test_paste_schedules_single_debounce() {
    let mut state = AppState::default();
    let result = update(&mut state, Message::InputPaste(TURING.to_string()));

    assert_eq!(state.url_input, TURING);
    assert!(matches!(
        result.action,
        Some(UpdateAction::ScheduleDebounce { generation: 1, .. })
    ));
}

#[test]
fn test_paste_ignored_on_history_tab() {
    let mut state = AppState::default();
    state.tab = Tab::History;
    let result = update(&mut state, Message::InputPaste(TURING.to_string()));
    assert!(result.action.is_none());
    assert!(state.url_input.is_empty());
}

#[test]
fn test_backspace_on_empty_input_does_nothing() {
    let mut state = AppState::default();
    let result = update(&mut state, Message::InputBackspace);
    assert!(result.action.is_none());
}

#[test]
fn test_debounce_elapsed_issues_preview_fetch() {
    let mut state = AppState::default();
    type_text(&mut state, TURING);
    let generation = TURING.chars().count() as u64;

    let result = update(&mut state, Message::PreviewDebounceElapsed { generation });
    match result.action {
        Some(UpdateAction::FetchPreview { tag }) => assert_eq!(tag.key, TURING),
        other => panic!("expected FetchPreview, got {:?}", other),
    }
}

#[test]
fn test_switching_to_history_activates_once() {
    let mut state = AppState::default();

    let result = update(&mut state, Message::NextTab);
    let follow_up = result.message.unwrap();
    let result = update(&mut state, follow_up);
    assert_eq!(state.tab, Tab::History);
    assert!(matches!(
        result.action,
        Some(UpdateAction::FetchHistory { .. })
    ));
    assert!(state.history.is_loading());

    // Selecting the already active tab is not a new activation.
    let result = update(&mut state, Message::SelectTab(Tab::History));
    assert!(result.action.is_none());
}

#[test]
fn test_submit_invalid_url_issues_no_action() {
    let mut state = AppState::default();
    type_text(&mut state, "https://example.com/wiki/Foo");

    let result = update(&mut state, Message::SubmitGeneration);

    assert!(result.action.is_none());
    assert_eq!(
        state.generation.state().error(),
        Some(INVALID_ARTICLE_URL_MESSAGE)
    );
}

#[test]
fn test_submit_valid_url_starts_generation() {
    let mut state = AppState::default();
    type_text(&mut state, TURING);
    state.quiz_scroll = 7;

    let result = update(&mut state, Message::SubmitGeneration);

    match result.action {
        Some(UpdateAction::SubmitGeneration { request, .. }) => {
            assert_eq!(request.url(), TURING)
        }
        other => panic!("expected SubmitGeneration, got {:?}", other),
    }
    assert_eq!(state.quiz_scroll, 0);
    assert!(state.generation.state().is_loading());
}

#[test]
fn test_open_detail_without_rows_does_nothing() {
    let mut state = AppState::default();
    state.tab = Tab::History;
    let result = update(&mut state, Message::OpenSelectedDetail);
    assert!(result.action.is_none());
    assert!(!state.detail.is_open());
}

#[test]
fn test_scroll_targets_overlay_when_open() {
    let mut state = AppState::default();
    update(&mut state, Message::PageDown);
    assert_eq!(state.quiz_scroll, 10);
    update(&mut state, Message::ScrollUp);
    assert_eq!(state.quiz_scroll, 9);

    state.detail.select(1);
    update(&mut state, Message::ScrollDown);
    assert_eq!(state.detail_scroll, 1);
    assert_eq!(state.quiz_scroll, 9);

    update(&mut state, Message::DismissDetail);
    assert_eq!(state.detail_scroll, 0);
}

#[test]
fn test_scroll_never_goes_negative() {
    let mut state = AppState::default();
    update(&mut state, Message::PageUp);
    assert_eq!(state.quiz_scroll, 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Full loop with a fake quiz service (paused clock)
// ─────────────────────────────────────────────────────────────────────────────

struct Harness {
    state: AppState,
    api: FakeQuizApi,
    ctx: ActionContext<FakeQuizApi>,
    rx: mpsc::Receiver<Message>,
}

impl Harness {
    fn new(api: FakeQuizApi) -> Self {
        let (tx, rx) = mpsc::channel(64);
        let ctx = ActionContext::new(Arc::new(api.clone()), tx);
        Self {
            state: AppState::default(),
            api,
            ctx,
            rx,
        }
    }

    fn send(&mut self, message: Message) {
        process_message(&mut self.state, message, &mut self.ctx);
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send(Message::InputChar(c));
        }
    }

    /// Run the message loop for `duration` of (paused) time.
    async fn run_for(&mut self, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        loop {
            tokio::select! {
                Some(msg) = self.rx.recv() => {
                    process_message(&mut self.state, msg, &mut self.ctx);
                }
                _ = tokio::time::sleep_until(deadline) => break,
            }
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_rapid_typing_issues_one_preview_call() {
    let mut h = Harness::new(FakeQuizApi::new());

    h.type_text("https://en.wikipedia.org/wiki/A");
    h.run_for(Duration::from_millis(100)).await;
    h.type_text("b");
    h.run_for(Duration::from_millis(100)).await;
    h.type_text("c");
    h.run_for(Duration::from_secs(1)).await;

    assert_eq!(
        h.api.preview_calls(),
        vec!["https://en.wikipedia.org/wiki/Abc".to_string()]
    );
    assert_eq!(
        h.state.preview.preview().value().map(String::as_str),
        Some("Abc")
    );
}

#[tokio::test(start_paused = true)]
async fn test_slow_stale_preview_never_overwrites_newer() {
    let api = FakeQuizApi::new().with_preview_delay(TURING, Duration::from_secs(2));
    let mut h = Harness::new(api);

    h.type_text(TURING);
    h.run_for(Duration::from_millis(600)).await;
    assert!(h.state.preview.preview().is_loading());

    h.send(Message::InputClear);
    h.type_text(LOVELACE);
    h.run_for(Duration::from_secs(3)).await;

    assert_eq!(
        h.api.preview_calls(),
        vec![TURING.to_string(), LOVELACE.to_string()]
    );
    assert_eq!(
        h.state.preview.preview().value().map(String::as_str),
        Some("Ada Lovelace")
    );
}

#[tokio::test(start_paused = true)]
async fn test_non_wikipedia_url_never_reaches_client() {
    let mut h = Harness::new(FakeQuizApi::new());

    h.type_text("https://example.com/wiki/Foo");
    h.send(Message::SubmitGeneration);
    h.run_for(Duration::from_secs(1)).await;

    assert!(h.api.calls().is_empty());
    assert!(h.state.generation.state().is_error());
    assert_eq!(
        h.state.preview.preview().error(),
        Some("Invalid Wikipedia URL.")
    );
}

#[tokio::test(start_paused = true)]
async fn test_generation_round_trip() {
    let api = FakeQuizApi::new()
        .with_generation(Ok(sample_detail("Alan Turing")))
        .with_generation_delay(Duration::from_secs(5));
    let mut h = Harness::new(api);

    h.type_text(TURING);
    h.send(Message::SubmitGeneration);
    h.send(Message::SubmitGeneration);
    h.run_for(Duration::from_secs(10)).await;

    let submits = h
        .api
        .calls()
        .into_iter()
        .filter(|c| matches!(c, ApiCall::SubmitGeneration(_)))
        .count();
    assert_eq!(submits, 1);
    assert_eq!(
        h.state.generation.state().value().map(|d| d.title.as_str()),
        Some("Alan Turing")
    );
}

#[tokio::test(start_paused = true)]
async fn test_history_failure_keeps_previous_list() {
    let api = FakeQuizApi::new().with_history(Ok(vec![
        sample_record(1, "2023-01-01"),
        sample_record(2, "2024-06-01"),
        sample_record(3, "2024-06-01"),
    ]));
    let mut h = Harness::new(api);

    h.send(Message::SelectTab(Tab::History));
    h.run_for(Duration::from_millis(10)).await;
    let ids: Vec<i64> = h.state.history.visible_records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);

    h.api.set_history(Err(ApiError::history_fetch("connection refused")));
    h.send(Message::RefreshHistory);
    h.run_for(Duration::from_millis(10)).await;

    assert_eq!(h.state.history.visible_records().len(), 3);
    assert_eq!(h.state.history.error(), Some("Failed to fetch quiz history"));
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_then_reselect_shows_only_new_detail() {
    let api = FakeQuizApi::new()
        .with_history(Ok(vec![
            sample_record(1, "2024-01-01"),
            sample_record(2, "2024-01-02"),
        ]))
        .with_detail(1, Ok(sample_detail("One")))
        .with_detail(2, Ok(sample_detail("Two")))
        .with_detail_delay(2, Duration::from_secs(1));
    let mut h = Harness::new(api);

    h.send(Message::SelectTab(Tab::History));
    h.run_for(Duration::from_millis(10)).await;

    // Newest first: row 0 is quiz 2 (slow), row 1 is quiz 1.
    h.send(Message::Key(InputKey::Enter));
    assert_eq!(h.state.detail.state(), &DetailState::Opening(2));
    h.send(Message::Key(InputKey::Esc));
    h.send(Message::Key(InputKey::Down));
    h.send(Message::Key(InputKey::Enter));
    h.run_for(Duration::from_secs(2)).await;

    assert_eq!(h.state.detail.title(), "One Quiz Details");
    assert!(h.api.calls().contains(&ApiCall::FetchDetail(2)));
}

#[tokio::test(start_paused = true)]
async fn test_detail_failure_leaves_history_untouched() {
    let api = FakeQuizApi::new().with_history(Ok(vec![sample_record(5, "2024-01-01")]));
    let mut h = Harness::new(api);

    h.send(Message::SelectTab(Tab::History));
    h.run_for(Duration::from_millis(10)).await;
    h.send(Message::OpenSelectedDetail);
    h.run_for(Duration::from_millis(10)).await;

    assert_eq!(
        h.state.detail.state(),
        &DetailState::Failed("Failed to fetch details for quiz ID 5".to_string())
    );
    assert!(h.state.history.error().is_none());
    assert_eq!(h.state.history.visible_records().len(), 1);
}
