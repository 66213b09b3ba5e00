//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;
use wikiquiz_app::{InputKey, Message};
use wikiquiz_core::prelude::*;

/// Poll timeout; a timeout produces a `Tick` (20 FPS)
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        Event::Paste(text) => {
            // Bracketed paste arrives as one event; feed it through as typing.
            debug!("Pasted {} chars", text.chars().count());
            Ok(paste_to_message(&text))
        }
        _ => Ok(None),
    }
}

/// Only the first line of a paste is kept; a URL never spans lines.
fn paste_to_message(text: &str) -> Option<Message> {
    let line = text.lines().next()?.trim();
    let mut chars = line.chars();
    let first = chars.next()?;
    if chars.next().is_none() {
        Some(Message::InputChar(first))
    } else {
        Some(Message::InputPaste(line.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('a')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_backtab_with_shift() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_url_characters_pass_through() {
        for c in [':', '/', '_', '%', '(', ')'] {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT);
            assert_eq!(key_event_to_input(key), Some(InputKey::Char(c)));
        }
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_paste_keeps_first_line() {
        match paste_to_message("https://en.wikipedia.org/wiki/Enigma\nsecond") {
            Some(Message::InputPaste(text)) => {
                assert_eq!(text, "https://en.wikipedia.org/wiki/Enigma")
            }
            other => panic!("expected paste, got {:?}", other),
        }
        assert!(paste_to_message("").is_none());
        assert!(matches!(paste_to_message("x"), Some(Message::InputChar('x'))));
    }
}
