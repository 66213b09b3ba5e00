//! Message types for the application (TEA pattern)

use wikiquiz_api::ApiError;
use wikiquiz_core::{QuizDetail, QuizRecord};

use crate::controllers::RequestTag;
use crate::input_key::InputKey;
use crate::state::Tab;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick for periodic updates (spinner animation)
    Tick,

    /// Request to quit (Ctrl+C, `q`, SIGINT/SIGTERM)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Cycle to the other tab
    NextTab,
    /// Show a specific tab
    SelectTab(Tab),

    // ─────────────────────────────────────────────────────────
    // URL input + preview
    // ─────────────────────────────────────────────────────────
    InputChar(char),
    /// Bracketed paste into the URL field
    InputPaste(String),
    InputBackspace,
    InputClear,
    /// The quiet-period timer for `generation` fired
    PreviewDebounceElapsed { generation: u64 },
    PreviewResolved {
        tag: RequestTag<String>,
        result: Result<Option<String>, ApiError>,
    },

    // ─────────────────────────────────────────────────────────
    // Generation
    // ─────────────────────────────────────────────────────────
    SubmitGeneration,
    GenerationResolved {
        tag: RequestTag<String>,
        result: Result<QuizDetail, ApiError>,
    },

    // ─────────────────────────────────────────────────────────
    // History
    // ─────────────────────────────────────────────────────────
    RefreshHistory,
    HistoryResolved {
        tag: RequestTag<u64>,
        result: Result<Vec<QuizRecord>, ApiError>,
    },
    HistorySelectNext,
    HistorySelectPrevious,

    // ─────────────────────────────────────────────────────────
    // Detail overlay
    // ─────────────────────────────────────────────────────────
    /// Open the overlay for the selected history row
    OpenSelectedDetail,
    DetailResolved {
        tag: RequestTag<i64>,
        result: Result<QuizDetail, ApiError>,
    },
    DismissDetail,

    // ─────────────────────────────────────────────────────────
    // Scrolling (quiz view or overlay, whichever is in front)
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
}
