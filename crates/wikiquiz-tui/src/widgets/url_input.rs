//! Single-line URL field on the Generate tab

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;
use wikiquiz_core::ARTICLE_URL_PREFIX;

use crate::theme::styles;

/// Shown while the field is empty
pub const PLACEHOLDER: &str = "https://en.wikipedia.org/wiki/...";

const CURSOR: &str = "▏";

pub struct UrlInput<'a> {
    value: &'a str,
    focused: bool,
    disabled: bool,
}

impl<'a> UrlInput<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            focused: true,
            disabled: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Dimmed while a generation is in flight
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Widget for UrlInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused && !self.disabled)
            .title(" Wikipedia Article URL ")
            .title_style(styles::text_secondary());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let show_cursor = self.focused && !self.disabled;
        let mut spans = Vec::with_capacity(3);
        spans.push(Span::raw(" "));

        if self.value.is_empty() {
            if show_cursor {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
            spans.push(Span::styled(PLACEHOLDER, styles::text_muted()));
        } else {
            // 1 column of padding, 1 for the cursor
            let budget = usize::from(inner.width).saturating_sub(2);
            let style = if self.disabled {
                styles::text_muted()
            } else if self.value.starts_with(ARTICLE_URL_PREFIX) {
                styles::text_primary()
            } else {
                styles::status_yellow()
            };
            spans.push(Span::styled(visible_tail(self.value, budget), style));
            if show_cursor {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

/// Longest suffix of `value` that fits in `width` terminal columns.
///
/// The end of a URL is the part being typed, so the head scrolls off first.
pub fn visible_tail(value: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = value.len();
    for (index, c) in value.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = index;
    }
    &value[start..]
}
