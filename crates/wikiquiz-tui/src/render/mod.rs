//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use ratatui::Frame;
use wikiquiz_app::{AppState, Tab};
use wikiquiz_core::AsyncState;

use super::{layout, widgets};
use crate::theme::{palette, styles};

pub const EMPTY_QUIZ_HINT: &str = "Enter a Wikipedia URL above to generate a quiz!";
pub const GENERATING_TEXT: &str = "Generating quiz...";
pub const FETCHING_TITLE_TEXT: &str = "Fetching title...";

/// Render the complete UI (View function in TEA)
///
/// Pure: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    frame.render_widget(widgets::MainHeader::new(state.tab), areas.header);

    match state.tab {
        Tab::Generate => render_generate_tab(frame, areas.body, state),
        Tab::History => frame.render_widget(
            widgets::HistoryTable::new(&state.history, &state.api_base_url)
                .tick(state.spinner_frame),
            areas.body,
        ),
    }

    frame.render_widget(widgets::KeyHints::new(state), areas.footer);

    // Overlay last so it sits above everything, footer included
    if state.detail.is_open() {
        frame.render_widget(
            widgets::DetailModal::new(&state.detail)
                .scroll(state.detail_scroll)
                .tick(state.spinner_frame),
            area,
        );
    }
}

fn render_generate_tab(frame: &mut Frame, body: Rect, state: &AppState) {
    let areas = layout::generate(body);

    frame.render_widget(
        widgets::UrlInput::new(&state.url_input)
            .focused(state.is_text_input_focused())
            .disabled(state.generation.is_in_flight()),
        areas.input,
    );

    if let Some(line) = preview_line(state.preview.preview()) {
        frame.render_widget(Paragraph::new(line), areas.preview);
    }

    let generation = state.generation.state();
    match generation {
        AsyncState::Loading => frame.render_widget(
            Paragraph::new(Line::styled(
                format!(" {}", widgets::spinner::label(state.spinner_frame, GENERATING_TEXT)),
                styles::accent(),
            )),
            areas.status,
        ),
        AsyncState::Error(message) => frame.render_widget(
            Paragraph::new(Line::styled(format!(" {message}"), styles::status_red())),
            areas.status,
        ),
        AsyncState::Idle | AsyncState::Success(_) => {}
    }

    match generation {
        AsyncState::Success(detail) => {
            let block = styles::glass_block(false).padding(Padding::horizontal(1));
            let inner = block.inner(areas.quiz);
            frame.render_widget(block, areas.quiz);
            frame.render_widget(
                widgets::QuizView::new(detail).scroll(state.quiz_scroll),
                inner,
            );
        }
        AsyncState::Idle => frame.render_widget(
            Paragraph::new(vec![
                Line::default(),
                Line::styled(EMPTY_QUIZ_HINT, styles::text_muted()),
            ])
            .centered()
            .wrap(Wrap { trim: true }),
            areas.quiz,
        ),
        AsyncState::Loading | AsyncState::Error(_) => {}
    }
}

/// `Title: ...` line under the URL field; nothing while idle.
fn preview_line(preview: &AsyncState<String>) -> Option<Line<'static>> {
    let (text, style) = match preview {
        AsyncState::Idle => return None,
        AsyncState::Loading => (FETCHING_TITLE_TEXT.to_string(), styles::text_muted()),
        AsyncState::Success(title) => (title.clone(), styles::text_primary()),
        AsyncState::Error(message) => (message.clone(), styles::status_yellow()),
    };
    Some(Line::from(vec![
        Span::styled(" Title: ", styles::text_secondary()),
        Span::styled(text, style),
    ]))
}
