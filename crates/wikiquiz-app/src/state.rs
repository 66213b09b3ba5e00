//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::controllers::{
    DetailController, GenerationController, HistoryController, PreviewController,
};

/// The two top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Generate,
    History,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Generate => "Generate Quiz",
            Tab::History => "History",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Generate => Tab::History,
            Tab::History => Tab::Generate,
        }
    }

    pub fn all() -> [Tab; 2] {
        [Tab::Generate, Tab::History]
    }
}

/// Lifecycle of the app as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub tab: Tab,

    /// Contents of the URL field on the Generate tab
    pub url_input: String,

    pub preview: PreviewController,
    pub generation: GenerationController,
    pub history: HistoryController,
    pub detail: DetailController,

    /// Vertical scroll of the generated quiz view
    pub quiz_scroll: u16,
    /// Vertical scroll inside the detail overlay
    pub detail_scroll: u16,

    /// Advanced on every tick, drives loading spinners
    pub spinner_frame: usize,

    /// Shown in the history load failure message
    pub api_base_url: String,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            tab: Tab::Generate,
            url_input: String::new(),
            preview: PreviewController::new(settings.preview.debounce_delay()),
            generation: GenerationController::new(),
            history: HistoryController::new(),
            detail: DetailController::new(),
            quiz_scroll: 0,
            detail_scroll: 0,
            spinner_frame: 0,
            api_base_url: settings.api.base_url.clone(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Whether key presses go to the URL field.
    pub fn is_text_input_focused(&self) -> bool {
        self.tab == Tab::Generate && !self.detail.is_open()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
