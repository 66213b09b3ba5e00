//! Generated quiz rendering, shared by the Generate tab and the detail overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use wikiquiz_core::{option_letter, related_topic_url, QuizDetail, QuizQuestion};

use crate::theme::styles;

/// Scrollable view of one quiz
pub struct QuizView<'a> {
    detail: &'a QuizDetail,
    scroll: u16,
}

impl<'a> QuizView<'a> {
    pub fn new(detail: &'a QuizDetail) -> Self {
        Self { detail, scroll: 0 }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for QuizView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(quiz_lines(self.detail))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

/// Lay out a quiz as text lines.
pub fn quiz_lines(detail: &QuizDetail) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        detail.title.clone(),
        styles::heading(),
    ))];

    if let Some(summary) = detail.summary() {
        lines.push(Line::styled(summary.to_string(), styles::text_secondary()));
    }

    if let Some(entities) = detail.entities() {
        lines.push(Line::default());
        for (label, names) in [
            ("People", &entities.people),
            ("Organizations", &entities.organizations),
            ("Locations", &entities.locations),
        ] {
            if !names.is_empty() {
                lines.push(labelled(label, names.join(", ")));
            }
        }
    }

    if !detail.sections.is_empty() {
        lines.push(labelled("Sections", detail.sections.join(", ")));
    }

    for (index, question) in detail.quiz.iter().enumerate() {
        lines.push(Line::default());
        question_lines(index, question, &mut lines);
    }

    if !detail.related_topics.is_empty() {
        lines.push(Line::default());
        lines.push(Line::styled("Related Topics", styles::heading()));
        for topic in &detail.related_topics {
            lines.push(Line::from(vec![
                Span::raw("  • "),
                Span::styled(topic.clone(), styles::text_primary()),
                Span::raw("  "),
                Span::styled(related_topic_url(topic), styles::link()),
            ]));
        }
    }

    lines
}

fn question_lines(index: usize, question: &QuizQuestion, lines: &mut Vec<Line<'static>>) {
    let difficulty = question.display_difficulty();
    lines.push(Line::from(vec![
        Span::styled(
            format!("Question {}: {} ", index + 1, question.question),
            styles::heading(),
        ),
        Span::styled(
            format!("[{}]", capitalize(difficulty.label())),
            styles::difficulty(difficulty),
        ),
    ]));

    let correct = question.correct_index();
    for (option_index, option) in question.options.iter().enumerate() {
        let text = format!("  {}. {}", option_letter(option_index), option);
        if Some(option_index) == correct {
            lines.push(Line::from(vec![
                Span::styled(text, styles::correct_option()),
                Span::styled("  ✓", styles::correct_option()),
            ]));
        } else {
            lines.push(Line::styled(text, styles::text_primary()));
        }
    }

    let answer = match correct {
        Some(i) => format!("{}) {}", option_letter(i), question.answer),
        None => question.answer.clone(),
    };
    lines.push(Line::from(vec![
        Span::styled("Correct Answer: ", styles::text_secondary()),
        Span::styled(answer, styles::accent()),
    ]));

    if let Some(explanation) = question
        .explanation
        .as_deref()
        .filter(|e| !e.trim().is_empty())
    {
        lines.push(labelled("Explanation", explanation.to_string()));
    }
}

fn labelled(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), styles::accent_bold()),
        Span::styled(value, styles::text_secondary()),
    ])
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
