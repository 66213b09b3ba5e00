//! Quiz history list
//!
//! Fetched once per activation of the History tab. A failed or in-progress
//! refresh never blanks a list that was already shown: the last good list is
//! retained alongside the new loading/error state.

use tracing::{debug, warn};
use wikiquiz_api::ApiError;
use wikiquiz_core::{sort_records_newest_first, AsyncState, QuizRecord};

use super::latest::{LatestOf, RequestTag};

#[derive(Debug, Clone, Default)]
pub struct HistoryController {
    state: AsyncState<Vec<QuizRecord>>,
    /// Last successfully loaded list, kept while `state` is loading or failed.
    retained: Option<Vec<QuizRecord>>,
    requests: LatestOf<u64>,
    activations: u64,
    selected: usize,
}

impl HistoryController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AsyncState<Vec<QuizRecord>> {
        &self.state
    }

    /// Start the fetch for a new activation of the history view.
    pub fn activate(&mut self) -> RequestTag<u64> {
        self.activations += 1;
        if let AsyncState::Success(records) = std::mem::take(&mut self.state) {
            self.retained = Some(records);
        }
        self.state = AsyncState::Loading;
        self.requests.issue(self.activations)
    }

    /// Explicit refresh while the view is already active.
    pub fn refresh(&mut self) -> RequestTag<u64> {
        self.activate()
    }

    /// Apply a history result. Returns whether it was applied.
    pub fn resolved(
        &mut self,
        tag: &RequestTag<u64>,
        result: Result<Vec<QuizRecord>, ApiError>,
    ) -> bool {
        if !self.requests.settle(tag) {
            debug!("Dropping stale history result (activation {})", tag.key);
            return false;
        }

        match result {
            Ok(mut records) => {
                sort_records_newest_first(&mut records);
                debug!("Loaded {} history records", records.len());
                self.retained = None;
                self.state = AsyncState::Success(records);
            }
            Err(e) => {
                warn!("History fetch failed: {:?}", e);
                self.state = AsyncState::Error(e.to_string());
            }
        }
        self.clamp_selection();
        true
    }

    /// Records to display: the current list, else the retained one.
    pub fn visible_records(&self) -> &[QuizRecord] {
        match (&self.state, &self.retained) {
            (AsyncState::Success(records), _) => records,
            (_, Some(records)) => records,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    /// True once a fetch has succeeded with no records.
    pub fn is_empty_result(&self) -> bool {
        matches!(&self.state, AsyncState::Success(records) if records.is_empty())
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&QuizRecord> {
        self.visible_records().get(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.visible_records().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_records().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikiquiz_api::test_utils::sample_record;

    fn ids(history: &HistoryController) -> Vec<i64> {
        history.visible_records().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_success_sorts_newest_first() {
        let mut history = HistoryController::new();
        let tag = history.activate();
        assert!(history.is_loading());

        history.resolved(
            &tag,
            Ok(vec![
                sample_record(1, "2023-01-01"),
                sample_record(2, "2024-06-01"),
                sample_record(3, "2024-06-01"),
            ]),
        );
        assert_eq!(ids(&history), vec![3, 2, 1]);
        assert!(history.error().is_none());
    }

    #[test]
    fn test_failed_refresh_retains_previous_list() {
        let mut history = HistoryController::new();
        let tag = history.activate();
        history.resolved(&tag, Ok(vec![sample_record(1, "2024-01-01")]));

        let tag = history.refresh();
        assert!(history.is_loading());
        assert_eq!(ids(&history), vec![1]);

        history.resolved(&tag, Err(ApiError::history_fetch("connection refused")));
        assert_eq!(history.error(), Some("Failed to fetch quiz history"));
        assert_eq!(ids(&history), vec![1]);
    }

    #[test]
    fn test_initial_failure_has_no_records() {
        let mut history = HistoryController::new();
        let tag = history.activate();
        history.resolved(&tag, Err(ApiError::history_fetch("500")));
        assert!(history.visible_records().is_empty());
        assert!(history.error().is_some());
        assert!(!history.is_empty_result());
    }

    #[test]
    fn test_overlapping_activations_only_latest_applies() {
        let mut history = HistoryController::new();
        let first = history.activate();
        let second = history.activate();

        assert!(history.resolved(&second, Ok(vec![sample_record(2, "2024-01-01")])));
        assert!(!history.resolved(&first, Ok(vec![sample_record(1, "2023-01-01")])));
        assert_eq!(ids(&history), vec![2]);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut history = HistoryController::new();
        history.select_next();
        assert_eq!(history.selected_index(), 0);
        assert!(history.selected_record().is_none());

        let tag = history.activate();
        history.resolved(
            &tag,
            Ok(vec![
                sample_record(1, "2024-01-01"),
                sample_record(2, "2024-01-02"),
                sample_record(3, "2024-01-03"),
            ]),
        );
        history.select_next();
        history.select_next();
        history.select_next();
        assert_eq!(history.selected_index(), 2);
        assert_eq!(history.selected_record().map(|r| r.id), Some(1));

        let tag = history.refresh();
        history.resolved(&tag, Ok(vec![sample_record(9, "2024-01-01")]));
        assert_eq!(history.selected_index(), 0);

        history.select_previous();
        assert_eq!(history.selected_index(), 0);
    }

    #[test]
    fn test_empty_result() {
        let mut history = HistoryController::new();
        let tag = history.activate();
        history.resolved(&tag, Ok(Vec::new()));
        assert!(history.is_empty_result());
    }
}
