//! Debounced article title preview
//!
//! The URL field reports every keystroke through [`PreviewController::input_changed`].
//! Nothing is fetched until the input has been quiet for the debounce delay;
//! each keystroke bumps a generation counter and only the timer carrying the
//! latest generation may promote the raw input to the stable input.

use std::time::Duration;

use tracing::debug;
use wikiquiz_api::ApiError;
use wikiquiz_core::{is_wikipedia_article_url, AsyncState};

use super::latest::{LatestOf, RequestTag};

pub const INVALID_PREVIEW_URL_MESSAGE: &str = "Invalid Wikipedia URL.";
pub const TITLE_NOT_FOUND_MESSAGE: &str = "Could not fetch title.";
pub const TITLE_FETCH_FAILED_MESSAGE: &str = "Error fetching title.";

/// Ask the runtime to (re)start the quiet-period timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceRequest {
    pub generation: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct PreviewController {
    raw_input: String,
    stable_input: String,
    preview: AsyncState<String>,
    generation: u64,
    delay: Duration,
    requests: LatestOf<String>,
}

impl PreviewController {
    pub fn new(delay: Duration) -> Self {
        Self {
            raw_input: String::new(),
            stable_input: String::new(),
            preview: AsyncState::Idle,
            generation: 0,
            delay,
            requests: LatestOf::new(),
        }
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// The last input that survived a full quiet period.
    pub fn stable_input(&self) -> &str {
        &self.stable_input
    }

    pub fn preview(&self) -> &AsyncState<String> {
        &self.preview
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a new raw value; any previously scheduled timer is superseded.
    pub fn input_changed(&mut self, raw: &str) -> DebounceRequest {
        self.raw_input = raw.to_string();
        self.generation += 1;
        DebounceRequest {
            generation: self.generation,
            delay: self.delay,
        }
    }

    /// Handle an elapsed quiet period.
    ///
    /// Returns the tag of the preview request to issue, if any.
    pub fn debounce_elapsed(&mut self, generation: u64) -> Option<RequestTag<String>> {
        if generation != self.generation {
            debug!(
                "Ignoring debounce generation {} (latest {})",
                generation, self.generation
            );
            return None;
        }

        if self.raw_input == self.stable_input {
            return None;
        }
        self.stable_input = self.raw_input.clone();

        if self.stable_input.trim().is_empty() {
            self.requests.invalidate();
            self.preview = AsyncState::Idle;
            return None;
        }

        if !is_wikipedia_article_url(&self.stable_input) {
            self.requests.invalidate();
            self.preview = AsyncState::Error(INVALID_PREVIEW_URL_MESSAGE.to_string());
            return None;
        }

        self.preview = AsyncState::Loading;
        Some(self.requests.issue(self.stable_input.clone()))
    }

    /// Apply a preview result. Returns whether it was applied.
    pub fn preview_resolved(
        &mut self,
        tag: &RequestTag<String>,
        result: Result<Option<String>, ApiError>,
    ) -> bool {
        if !self.requests.settle(tag) {
            debug!("Dropping stale preview for {:?}", tag.key);
            return false;
        }

        self.preview = match result {
            Ok(Some(title)) => AsyncState::Success(title),
            Ok(None) => AsyncState::Error(TITLE_NOT_FOUND_MESSAGE.to_string()),
            Err(e) => {
                debug!("Preview failed for {}: {:?}", tag.key, e);
                AsyncState::Error(TITLE_FETCH_FAILED_MESSAGE.to_string())
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TURING: &str = "https://en.wikipedia.org/wiki/Alan_Turing";

    fn controller() -> PreviewController {
        PreviewController::new(Duration::from_millis(500))
    }

    #[test]
    fn test_only_latest_generation_promotes_input() {
        let mut preview = controller();
        let first = preview.input_changed("a");
        let second = preview.input_changed("ab");
        let third = preview.input_changed(TURING);

        assert!(preview.debounce_elapsed(first.generation).is_none());
        assert!(preview.debounce_elapsed(second.generation).is_none());
        assert_eq!(preview.stable_input(), "");

        let tag = preview.debounce_elapsed(third.generation).unwrap();
        assert_eq!(tag.key, TURING);
        assert_eq!(preview.stable_input(), TURING);
        assert!(preview.preview().is_loading());
    }

    #[test]
    fn test_unchanged_stable_input_issues_nothing() {
        let mut preview = controller();
        let req = preview.input_changed(TURING);
        assert!(preview.debounce_elapsed(req.generation).is_some());

        // Edit and revert inside one quiet window.
        preview.input_changed("x");
        let req = preview.input_changed(TURING);
        assert!(preview.debounce_elapsed(req.generation).is_none());
    }

    #[test]
    fn test_invalid_url_sets_error_without_request() {
        let mut preview = controller();
        let req = preview.input_changed("https://example.com/wiki/Foo");
        assert!(preview.debounce_elapsed(req.generation).is_none());
        assert_eq!(preview.preview().error(), Some(INVALID_PREVIEW_URL_MESSAGE));
    }

    #[test]
    fn test_clearing_input_resets_to_idle_and_drops_in_flight() {
        let mut preview = controller();
        let req = preview.input_changed(TURING);
        let tag = preview.debounce_elapsed(req.generation).unwrap();

        let req = preview.input_changed("");
        assert!(preview.debounce_elapsed(req.generation).is_none());
        assert!(preview.preview().is_idle());

        assert!(!preview.preview_resolved(&tag, Ok(Some("Alan Turing".to_string()))));
        assert!(preview.preview().is_idle());
    }

    #[test]
    fn test_stale_result_does_not_overwrite_newer_input() {
        let mut preview = controller();
        let req = preview.input_changed(TURING);
        let old = preview.debounce_elapsed(req.generation).unwrap();

        let req = preview.input_changed("https://en.wikipedia.org/wiki/Ada_Lovelace");
        let new = preview.debounce_elapsed(req.generation).unwrap();

        assert!(preview.preview_resolved(&new, Ok(Some("Ada Lovelace".to_string()))));
        assert!(!preview.preview_resolved(&old, Ok(Some("Alan Turing".to_string()))));
        assert_eq!(preview.preview().value().map(String::as_str), Some("Ada Lovelace"));
    }

    #[test]
    fn test_result_messages() {
        let mut preview = controller();
        let req = preview.input_changed(TURING);
        let tag = preview.debounce_elapsed(req.generation).unwrap();
        preview.preview_resolved(&tag, Ok(None));
        assert_eq!(preview.preview().error(), Some(TITLE_NOT_FOUND_MESSAGE));

        let req = preview.input_changed("https://en.wikipedia.org/wiki/Enigma");
        let tag = preview.debounce_elapsed(req.generation).unwrap();
        preview.preview_resolved(&tag, Err(ApiError::data_contract("boom")));
        assert_eq!(preview.preview().error(), Some(TITLE_FETCH_FAILED_MESSAGE));
    }
}
