//! History tab: table of previously generated quizzes

use chrono::{Local, NaiveDateTime, TimeZone};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget, Wrap},
};
use wikiquiz_app::controllers::HistoryController;
use wikiquiz_core::QuizRecord;

use super::spinner;
use crate::theme::styles;

pub const HEADING: &str = "Past Quizzes (History)";
pub const LOADING_TEXT: &str = "Fetching the Past Quizzes";
pub const EMPTY_MESSAGE: &str =
    "No quizzes generated yet. Go to \"Generate Quiz\" tab to create one!";
pub const UNKNOWN_DATE: &str = "Unknown";

pub struct HistoryTable<'a> {
    history: &'a HistoryController,
    api_base_url: &'a str,
    tick: usize,
}

impl<'a> HistoryTable<'a> {
    pub fn new(history: &'a HistoryController, api_base_url: &'a str) -> Self {
        Self {
            history,
            api_base_url,
            tick: 0,
        }
    }

    pub fn tick(mut self, tick: usize) -> Self {
        self.tick = tick;
        self
    }

    fn heading_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(format!(" {HEADING}"), styles::heading())];
        if self.history.is_loading() {
            spans.push(Span::styled(
                format!("  {}", spinner::glyph(self.tick)),
                styles::accent(),
            ));
        } else if let Some(error) = self.history.error() {
            spans.push(Span::styled(format!("  {error}"), styles::status_red()));
        }
        Line::from(spans)
    }

    fn render_table(&self, records: &[QuizRecord], area: Rect, buf: &mut Buffer) {
        let header = Row::new(["ID", "URL", "Title", "Date Generated"])
            .style(styles::accent_bold())
            .bottom_margin(1);

        let rows = records.iter().map(|record| {
            Row::new(vec![
                Cell::from(record.id.to_string()),
                Cell::from(record.url.clone()).style(styles::link()),
                Cell::from(record.title.clone()),
                Cell::from(record_date(record)),
            ])
            .style(styles::text_primary())
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Percentage(50),
                Constraint::Percentage(30),
                Constraint::Length(14),
            ],
        )
        .header(header)
        .row_highlight_style(styles::focused_selected())
        .highlight_symbol("▶ ");

        let mut state = TableState::default().with_selected(Some(self.history.selected_index()));
        StatefulWidget::render(table, area, buf, &mut state);
    }

    fn render_message(lines: Vec<Line<'static>>, area: Rect, buf: &mut Buffer) {
        Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

impl Widget for HistoryTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true);
        let inner = block.inner(area);
        block.render(area, buf);

        let [heading_area, _, content_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let records = self.history.visible_records();
        if !records.is_empty() {
            Paragraph::new(self.heading_line()).render(heading_area, buf);
            self.render_table(records, content_area, buf);
            return;
        }

        // Nothing to show yet: the whole body is a status message
        if self.history.is_loading() {
            Self::render_message(
                vec![Line::styled(
                    spinner::label(self.tick, LOADING_TEXT),
                    styles::accent(),
                )],
                content_area,
                buf,
            );
        } else if let Some(error) = self.history.error() {
            Self::render_message(
                vec![
                    Line::styled(error.to_string(), styles::status_red()),
                    Line::default(),
                    Line::styled(
                        format!(
                            "Please ensure the server is running and accessible at {}.",
                            self.api_base_url
                        ),
                        styles::status_red(),
                    ),
                ],
                content_area,
                buf,
            );
        } else {
            Paragraph::new(Line::styled(format!(" {HEADING}"), styles::heading()))
                .render(heading_area, buf);
            if self.history.is_empty_result() {
                Self::render_message(
                    vec![Line::styled(EMPTY_MESSAGE, styles::text_muted())],
                    content_area,
                    buf,
                );
            }
        }
    }
}

fn record_date(record: &QuizRecord) -> String {
    record
        .date_generated
        .as_ref()
        .map_or_else(|| UNKNOWN_DATE.to_string(), local_date)
}

/// Stored timestamps are UTC; show the viewer's calendar date.
pub fn local_date(utc: &NaiveDateTime) -> String {
    Local
        .from_utc_datetime(utc)
        .format("%Y-%m-%d")
        .to_string()
}
