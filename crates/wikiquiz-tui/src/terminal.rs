//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use wikiquiz_core::prelude::*;

/// Owns the raw-mode terminal for the lifetime of the UI.
///
/// Restores the terminal on drop, including when the run loop returns early
/// with an error. A panic hook restores it before the panic report prints.
pub struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    pub fn init() -> Self {
        install_panic_hook();
        let terminal = ratatui::init();
        if let Err(e) = execute!(stdout(), EnableBracketedPaste) {
            warn!("Bracketed paste unavailable: {}", e);
        }
        Self { terminal }
    }

    pub fn terminal_mut(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

fn restore() {
    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore();
        original_hook(panic_info);
    }));
}
