//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use crate::controllers::SubmitOutcome;
use crate::message::Message;
use crate::state::{AppPhase, AppState, Tab};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Lines moved by PageUp/PageDown
const PAGE_SCROLL_LINES: u16 = 10;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::NextTab => UpdateResult::message(Message::SelectTab(state.tab.next())),

        Message::SelectTab(tab) => {
            if tab == state.tab {
                return UpdateResult::none();
            }
            debug!("Switching to {:?} tab", tab);
            state.tab = tab;
            match tab {
                Tab::History => {
                    let tag = state.history.activate();
                    UpdateResult::action(UpdateAction::FetchHistory { tag })
                }
                Tab::Generate => UpdateResult::none(),
            }
        }

        // ─────────────────────────────────────────────────────────
        // URL input + preview
        // ─────────────────────────────────────────────────────────
        Message::InputChar(c) => {
            state.url_input.push(c);
            schedule_preview(state)
        }

        Message::InputPaste(text) => {
            if !state.is_text_input_focused() || text.is_empty() {
                return UpdateResult::none();
            }
            state.url_input.push_str(&text);
            schedule_preview(state)
        }

        Message::InputBackspace => {
            if state.url_input.pop().is_none() {
                return UpdateResult::none();
            }
            schedule_preview(state)
        }

        Message::InputClear => {
            if state.url_input.is_empty() {
                return UpdateResult::none();
            }
            state.url_input.clear();
            schedule_preview(state)
        }

        Message::PreviewDebounceElapsed { generation } => {
            match state.preview.debounce_elapsed(generation) {
                Some(tag) => UpdateResult::action(UpdateAction::FetchPreview { tag }),
                None => UpdateResult::none(),
            }
        }

        Message::PreviewResolved { tag, result } => {
            state.preview.preview_resolved(&tag, result);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Generation
        // ─────────────────────────────────────────────────────────
        Message::SubmitGeneration => match state.generation.submit(&state.url_input) {
            SubmitOutcome::Started { tag, request } => {
                state.quiz_scroll = 0;
                UpdateResult::action(UpdateAction::SubmitGeneration { tag, request })
            }
            SubmitOutcome::Ignored | SubmitOutcome::Rejected => UpdateResult::none(),
        },

        Message::GenerationResolved { tag, result } => {
            if state.generation.resolved(&tag, result) {
                state.quiz_scroll = 0;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // History
        // ─────────────────────────────────────────────────────────
        Message::RefreshHistory => {
            let tag = state.history.refresh();
            UpdateResult::action(UpdateAction::FetchHistory { tag })
        }

        Message::HistoryResolved { tag, result } => {
            state.history.resolved(&tag, result);
            UpdateResult::none()
        }

        Message::HistorySelectNext => {
            state.history.select_next();
            UpdateResult::none()
        }

        Message::HistorySelectPrevious => {
            state.history.select_previous();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Detail overlay
        // ─────────────────────────────────────────────────────────
        Message::OpenSelectedDetail => {
            let Some(id) = state.history.selected_record().map(|r| r.id) else {
                return UpdateResult::none();
            };
            state.detail_scroll = 0;
            let tag = state.detail.select(id);
            UpdateResult::action(UpdateAction::FetchDetail { tag })
        }

        Message::DetailResolved { tag, result } => {
            state.detail.resolved(&tag, result);
            UpdateResult::none()
        }

        Message::DismissDetail => {
            state.detail.dismiss();
            state.detail_scroll = 0;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scrolling
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll_by(state, -1),
        Message::ScrollDown => scroll_by(state, 1),
        Message::PageUp => scroll_by(state, -i32::from(PAGE_SCROLL_LINES)),
        Message::PageDown => scroll_by(state, i32::from(PAGE_SCROLL_LINES)),
    }
}

fn schedule_preview(state: &mut AppState) -> UpdateResult {
    let request = state.preview.input_changed(&state.url_input);
    UpdateResult::action(UpdateAction::ScheduleDebounce {
        generation: request.generation,
        delay: request.delay,
    })
}

/// Scroll whichever view is in front.
fn scroll_by(state: &mut AppState, delta: i32) -> UpdateResult {
    let target = if state.detail.is_open() {
        &mut state.detail_scroll
    } else if state.tab == Tab::Generate {
        &mut state.quiz_scroll
    } else {
        return UpdateResult::none();
    };

    let next = (i32::from(*target) + delta).clamp(0, i32::from(u16::MAX));
    *target = u16::try_from(next).unwrap_or(u16::MAX);
    UpdateResult::none()
}
