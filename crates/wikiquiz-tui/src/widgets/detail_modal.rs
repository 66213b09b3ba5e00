//! Detail overlay for a history entry

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};
use wikiquiz_app::controllers::{DetailController, DetailState};

use super::modal_overlay::{centered_rect_percent, clear_area, dim_background, render_shadow};
use super::quiz_view::QuizView;
use super::spinner;
use crate::theme::styles;

pub const LOADING_TEXT: &str = "Loading quiz details...";
const CLOSE_HINT: &str = " Esc to close ";

pub struct DetailModal<'a> {
    detail: &'a DetailController,
    scroll: u16,
    tick: usize,
}

impl<'a> DetailModal<'a> {
    pub fn new(detail: &'a DetailController) -> Self {
        Self {
            detail,
            scroll: 0,
            tick: 0,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn tick(mut self, tick: usize) -> Self {
        self.tick = tick;
        self
    }
}

impl Widget for DetailModal<'_> {
    /// `area` is the full screen; the modal centres itself inside it.
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.detail.is_open() {
            return;
        }

        dim_background(buf, area);
        let modal = centered_rect_percent(80, 80, area);
        render_shadow(buf, modal);
        clear_area(buf, modal);

        let block = styles::modal_block(format!(" {} ", self.detail.title()))
            .title_bottom(Line::styled(CLOSE_HINT, styles::text_muted()).right_aligned());
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [_, content] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
        let [_, content, _] = Layout::horizontal([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(content);

        match self.detail.state() {
            DetailState::Closed => {}
            DetailState::Opening(_) => {
                Paragraph::new(Line::styled(
                    spinner::label(self.tick, LOADING_TEXT),
                    styles::accent(),
                ))
                .centered()
                .render(content, buf);
            }
            DetailState::Loaded(detail) => {
                QuizView::new(detail).scroll(self.scroll).render(content, buf);
            }
            DetailState::Failed(message) => {
                Paragraph::new(Line::styled(message.clone(), styles::status_red()))
                    .render(content, buf);
            }
        }
    }
}
