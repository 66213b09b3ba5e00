//! Detail overlay for one history entry
//!
//! Independent of the history list: a failed detail fetch never changes
//! [`HistoryController`](super::HistoryController) state, and dismissing the
//! overlay drops whatever was loaded.

use tracing::{debug, warn};
use wikiquiz_api::ApiError;
use wikiquiz_core::QuizDetail;

use super::latest::{LatestOf, RequestTag};

pub const DETAIL_TITLE_SUFFIX: &str = "Quiz Details";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Closed,
    Opening(i64),
    Loaded(QuizDetail),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct DetailController {
    state: DetailState,
    requests: LatestOf<i64>,
}

impl DetailController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, DetailState::Closed)
    }

    /// Open the overlay for `id`, superseding any pending request.
    pub fn select(&mut self, id: i64) -> RequestTag<i64> {
        self.state = DetailState::Opening(id);
        self.requests.issue(id)
    }

    /// Apply a detail result. Returns whether it was applied.
    pub fn resolved(&mut self, tag: &RequestTag<i64>, result: Result<QuizDetail, ApiError>) -> bool {
        if !self.requests.settle(tag) {
            debug!("Dropping stale detail for quiz {}", tag.key);
            return false;
        }

        self.state = match result {
            Ok(detail) => DetailState::Loaded(detail),
            Err(e) => {
                warn!("Detail fetch failed: {:?}", e);
                DetailState::Failed(e.to_string())
            }
        };
        true
    }

    pub fn dismiss(&mut self) {
        self.requests.invalidate();
        self.state = DetailState::Closed;
    }

    /// Overlay header text.
    pub fn title(&self) -> String {
        match &self.state {
            DetailState::Loaded(detail) => format!("{} {}", detail.title, DETAIL_TITLE_SUFFIX),
            _ => DETAIL_TITLE_SUFFIX.to_string(),
        }
    }
}
