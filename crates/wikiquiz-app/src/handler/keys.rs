//! Key event handlers
//!
//! Translates an [`InputKey`] into a [`Message`] based on what has focus:
//! the detail overlay when open, otherwise the active tab.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Tab};

/// Convert key events to messages based on current focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.detail.is_open() {
        return handle_key_detail_overlay(key);
    }

    match state.tab {
        Tab::Generate => handle_key_generate(key),
        Tab::History => handle_key_history(key),
    }
}

fn handle_key_detail_overlay(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::DismissDetail),
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        _ => None,
    }
}

/// The URL field has focus, so printable characters are text, not commands.
fn handle_key_generate(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::InputChar(c)),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::CharCtrl('u') => Some(Message::InputClear),
        InputKey::Enter => Some(Message::SubmitGeneration),
        InputKey::Tab | InputKey::BackTab => Some(Message::NextTab),
        InputKey::Up => Some(Message::ScrollUp),
        InputKey::Down => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        _ => None,
    }
}

fn handle_key_history(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('r') => Some(Message::RefreshHistory),
        InputKey::Up | InputKey::Char('k') => Some(Message::HistorySelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::HistorySelectNext),
        InputKey::Enter => Some(Message::OpenSelectedDetail),
        InputKey::Tab | InputKey::BackTab => Some(Message::NextTab),
        _ => None,
    }
}
