//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header is a bordered single row: top border + tabs + bottom border
const HEADER_HEIGHT: u16 = 3;
/// Key hints along the bottom edge
const FOOTER_HEIGHT: u16 = 1;
/// Bordered single-line URL field
const URL_INPUT_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// App name and tab bar
    pub header: Rect,

    /// Content of the active tab
    pub body: Rect,

    /// Key hints
    pub footer: Rect,
}

/// Areas inside the Generate tab body
#[derive(Debug, Clone, Copy)]
pub struct GenerateAreas {
    pub input: Rect,
    /// `Title: ...` preview line
    pub preview: Rect,
    /// Validation / generation error, spinner while generating
    pub status: Rect,
    /// Generated quiz or the hint text
    pub quiz: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Split the Generate tab body
pub fn generate(body: Rect) -> GenerateAreas {
    let chunks = Layout::vertical([
        Constraint::Length(URL_INPUT_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(body);

    GenerateAreas {
        input: chunks[0],
        preview: chunks[1],
        status: chunks[2],
        quiz: chunks[3],
    }
}
