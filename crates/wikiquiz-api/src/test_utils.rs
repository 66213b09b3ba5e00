//! Test utilities for the quiz service client
//!
//! Provides [`FakeQuizApi`], an in-memory [`QuizApi`] that records every call
//! and can delay individual responses so tests can force out-of-order
//! completion, plus fixture builders for quiz payloads.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use wikiquiz_core::{
    article_title_from_url, parse_timestamp, Difficulty, KeyEntities, QuizDetail, QuizQuestion,
    QuizRecord, QuizRequest,
};

use crate::client::QuizApi;
use crate::error::ApiError;

/// A call observed by [`FakeQuizApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    SubmitGeneration(String),
    ListHistory,
    FetchDetail(i64),
    PreviewTitle(String),
}

#[derive(Debug, Default)]
struct FakeInner {
    calls: Vec<ApiCall>,
    generation: Option<Result<QuizDetail, ApiError>>,
    history: Option<Result<Vec<QuizRecord>, ApiError>>,
    details: HashMap<i64, Result<QuizDetail, ApiError>>,
    preview_delays: HashMap<String, Duration>,
    detail_delays: HashMap<i64, Duration>,
    generation_delay: Option<Duration>,
}

/// In-memory quiz service.
///
/// Cloning shares the underlying call log and responses, so a test can keep
/// one handle while the code under test owns another.
#[derive(Debug, Clone, Default)]
pub struct FakeQuizApi {
    inner: Arc<Mutex<FakeInner>>,
}

impl FakeQuizApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generation(self, result: Result<QuizDetail, ApiError>) -> Self {
        self.lock().generation = Some(result);
        self
    }

    pub fn with_history(self, result: Result<Vec<QuizRecord>, ApiError>) -> Self {
        self.lock().history = Some(result);
        self
    }

    pub fn with_detail(self, id: i64, result: Result<QuizDetail, ApiError>) -> Self {
        self.lock().details.insert(id, result);
        self
    }

    /// Delay the preview response for one exact input.
    pub fn with_preview_delay(self, url: &str, delay: Duration) -> Self {
        self.lock().preview_delays.insert(url.to_string(), delay);
        self
    }

    pub fn with_detail_delay(self, id: i64, delay: Duration) -> Self {
        self.lock().detail_delays.insert(id, delay);
        self
    }

    pub fn with_generation_delay(self, delay: Duration) -> Self {
        self.lock().generation_delay = Some(delay);
        self
    }

    /// Replace the history response after construction.
    pub fn set_history(&self, result: Result<Vec<QuizRecord>, ApiError>) {
        self.lock().history = Some(result);
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    /// Preview calls made so far.
    pub fn preview_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::PreviewTitle(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeInner> {
        // A panicking test thread poisons the lock; the data is still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn pause(delay: Option<Duration>) {
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl QuizApi for FakeQuizApi {
    async fn submit_generation(&self, request: &QuizRequest) -> Result<QuizDetail, ApiError> {
        let (delay, result) = {
            let mut inner = self.lock();
            inner
                .calls
                .push(ApiCall::SubmitGeneration(request.url().to_string()));
            let result = inner
                .generation
                .clone()
                .unwrap_or_else(|| Ok(sample_detail("Generated quiz")));
            (inner.generation_delay, result)
        };
        Self::pause(delay).await;
        result
    }

    async fn list_history(&self) -> Result<Vec<QuizRecord>, ApiError> {
        let mut inner = self.lock();
        inner.calls.push(ApiCall::ListHistory);
        inner.history.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn fetch_detail(&self, id: i64) -> Result<QuizDetail, ApiError> {
        let (delay, result) = {
            let mut inner = self.lock();
            inner.calls.push(ApiCall::FetchDetail(id));
            let result = inner
                .details
                .get(&id)
                .cloned()
                .unwrap_or_else(|| Err(ApiError::detail_fetch(id, "404 Not Found")));
            (inner.detail_delays.get(&id).copied(), result)
        };
        Self::pause(delay).await;
        result
    }

    async fn preview_title(&self, url: &str) -> Result<Option<String>, ApiError> {
        let delay = {
            let mut inner = self.lock();
            inner.calls.push(ApiCall::PreviewTitle(url.to_string()));
            inner.preview_delays.get(url).copied()
        };
        Self::pause(delay).await;
        Ok(article_title_from_url(url))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fixtures
// ─────────────────────────────────────────────────────────────────────────────

/// A history row for `id` generated on `date` (any format `parse_timestamp` accepts).
pub fn sample_record(id: i64, date: &str) -> QuizRecord {
    QuizRecord {
        id,
        url: format!("https://en.wikipedia.org/wiki/Article_{}", id),
        title: format!("Article {}", id),
        date_generated: parse_timestamp(date),
    }
}

/// A four-option question whose answer is the third option.
pub fn sample_question() -> QuizQuestion {
    QuizQuestion {
        question: "Where did Alan Turing work on codebreaking?".to_string(),
        options: vec![
            "Cambridge".to_string(),
            "Manchester".to_string(),
            "Bletchley Park".to_string(),
            "Princeton".to_string(),
        ],
        answer: "Bletchley Park".to_string(),
        explanation: Some("Hut 8 at Bletchley Park broke naval Enigma.".to_string()),
        difficulty: Some(Difficulty::Easy),
    }
}

/// A complete quiz payload titled `title`.
pub fn sample_detail(title: &str) -> QuizDetail {
    QuizDetail {
        id: None,
        url: Some("https://en.wikipedia.org/wiki/Alan_Turing".to_string()),
        title: title.to_string(),
        summary: Some("English mathematician and computer scientist.".to_string()),
        key_entities: Some(KeyEntities {
            people: vec!["Alan Turing".to_string()],
            organizations: vec!["Government Code and Cypher School".to_string()],
            locations: vec!["Bletchley Park".to_string()],
        }),
        sections: vec!["Early life".to_string(), "Codebreaking".to_string()],
        quiz: vec![sample_question()],
        related_topics: vec!["Enigma machine".to_string()],
        date_generated: None,
    }
}
