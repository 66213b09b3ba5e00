//! Quiz generation from a submitted URL

use tracing::{debug, info, warn};
use wikiquiz_api::ApiError;
use wikiquiz_core::{AsyncState, QuizDetail, QuizRequest};

use super::latest::{LatestOf, RequestTag};

/// What a call to [`GenerationController::submit`] decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A generation is already in flight.
    Ignored,
    /// The URL failed validation; the state now holds the message.
    Rejected,
    /// Issue `request`; its result must come back with `tag`.
    Started {
        tag: RequestTag<String>,
        request: QuizRequest,
    },
}

#[derive(Debug, Clone, Default)]
pub struct GenerationController {
    state: AsyncState<QuizDetail>,
    requests: LatestOf<String>,
}

impl GenerationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AsyncState<QuizDetail> {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.requests.in_flight()
    }

    /// Whether a submit of `url` would start a request right now.
    pub fn can_submit(&self, url: &str) -> bool {
        !self.is_in_flight() && QuizRequest::new(url).is_ok()
    }

    pub fn submit(&mut self, url: &str) -> SubmitOutcome {
        if self.is_in_flight() {
            debug!("Generation already in flight, ignoring submit");
            return SubmitOutcome::Ignored;
        }

        match QuizRequest::new(url) {
            Ok(request) => {
                info!("Generating quiz for {}", request.url());
                self.state = AsyncState::Loading;
                let tag = self.requests.issue(request.url().to_string());
                SubmitOutcome::Started { tag, request }
            }
            Err(e) => {
                self.state = AsyncState::Error(e.to_string());
                SubmitOutcome::Rejected
            }
        }
    }

    /// Apply a generation result. Returns whether it was applied.
    pub fn resolved(
        &mut self,
        tag: &RequestTag<String>,
        result: Result<QuizDetail, ApiError>,
    ) -> bool {
        if !self.requests.settle(tag) {
            debug!("Dropping stale generation result for {}", tag.key);
            return false;
        }

        match &result {
            Ok(detail) => {
                info!("Generated quiz '{}' ({} questions)", detail.title, detail.quiz.len())
            }
            Err(e) => warn!("Quiz generation failed: {:?}", e),
        }
        self.state = AsyncState::from_result(result);
        true
    }
}
