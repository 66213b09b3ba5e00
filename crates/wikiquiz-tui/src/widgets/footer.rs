//! Key hint bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use wikiquiz_app::{AppState, Tab};

use crate::theme::styles;

pub struct KeyHints<'a> {
    state: &'a AppState,
}

impl<'a> KeyHints<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.state.detail.is_open() {
            &[("Esc", "close"), ("↑↓", "scroll"), ("q", "quit")]
        } else {
            match self.state.tab {
                Tab::Generate => &[
                    ("Enter", "generate"),
                    ("Ctrl+U", "clear"),
                    ("↑↓", "scroll"),
                    ("Tab", "history"),
                    ("Ctrl+C", "quit"),
                ],
                Tab::History => &[
                    ("↑↓", "select"),
                    ("Enter", "details"),
                    ("r", "refresh"),
                    ("Tab", "generate"),
                    ("q", "quit"),
                ],
            }
        }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(format!(" {key}"), styles::accent_bold()));
            spans.push(Span::styled(format!(" {action} "), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
