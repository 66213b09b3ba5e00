//! Quiz service operations
//!
//! [`QuizApi`] is the seam between the controllers and the network. Each
//! operation is a single request/response round trip with no retry; in
//! particular generation is never retried because the service persists a new
//! record for every successful call.

use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use wikiquiz_core::prelude::Error;
use wikiquiz_core::{article_title_from_url, QuizDetail, QuizRecord, QuizRequest};

use crate::error::{ApiError, GENERATION_FAILED_MESSAGE};

/// Operations offered by the quiz service.
///
/// `preview_title` is derived locally today but stays asynchronous so a real
/// lookup can replace it without touching callers.
#[trait_variant::make(QuizApi: Send)]
pub trait LocalQuizApi {
    /// `POST /generate_quiz`
    async fn submit_generation(&self, request: &QuizRequest) -> Result<QuizDetail, ApiError>;

    /// `GET /history`
    async fn list_history(&self) -> Result<Vec<QuizRecord>, ApiError>;

    /// `GET /quiz/{id}`
    async fn fetch_detail(&self, id: i64) -> Result<QuizDetail, ApiError>;

    /// Title for an article URL, `None` if the URL is not an article.
    async fn preview_title(&self, url: &str) -> Result<Option<String>, ApiError>;
}

/// Error body returned by the service for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// HTTP implementation backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpQuizClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpQuizClient {
    /// Create a client for the service rooted at `base_url`.
    ///
    /// A trailing slash on the base URL is ignored.
    pub fn new(base_url: &str, timeout: Duration) -> wikiquiz_core::Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed =
            Url::parse(trimmed).map_err(|e| Error::invalid_base_url(base_url, e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_base_url(
                base_url,
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl QuizApi for HttpQuizClient {
    async fn submit_generation(&self, request: &QuizRequest) -> Result<QuizDetail, ApiError> {
        let endpoint = self.endpoint("generate_quiz");
        debug!("POST {} url={}", endpoint, request.url());

        let response = self
            .http
            .post(&endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("Quiz generation request failed: {}", e);
                ApiError::generation(format!("{}: {}", GENERATION_FAILED_MESSAGE, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = error_detail(response)
                .await
                .unwrap_or_else(|| GENERATION_FAILED_MESSAGE.to_string());
            warn!("Quiz generation rejected ({}): {}", status, message);
            return Err(ApiError::generation(message));
        }

        read_json(response, |e| {
            ApiError::generation(format!("{}: {}", GENERATION_FAILED_MESSAGE, e))
        })
        .await
    }

    async fn list_history(&self) -> Result<Vec<QuizRecord>, ApiError> {
        let endpoint = self.endpoint("history");
        debug!("GET {}", endpoint);

        let response = self.http.get(&endpoint).send().await.map_err(|e| {
            warn!("History request failed: {}", e);
            ApiError::history_fetch(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("History request returned {}", status);
            return Err(ApiError::history_fetch(status_reason(status)));
        }

        read_json(response, |e| ApiError::history_fetch(e)).await
    }

    async fn fetch_detail(&self, id: i64) -> Result<QuizDetail, ApiError> {
        let endpoint = self.endpoint(&format!("quiz/{}", id));
        debug!("GET {}", endpoint);

        let response = self.http.get(&endpoint).send().await.map_err(|e| {
            warn!("Detail request for quiz {} failed: {}", id, e);
            ApiError::detail_fetch(id, e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Detail request for quiz {} returned {}", id, status);
            return Err(ApiError::detail_fetch(id, status_reason(status)));
        }

        read_json(response, |e| ApiError::detail_fetch(id, e)).await
    }

    async fn preview_title(&self, url: &str) -> Result<Option<String>, ApiError> {
        Ok(article_title_from_url(url))
    }
}

/// Read and decode a successful response body.
///
/// Failing to read the body is a transport problem and is reported through
/// `on_transport`; a body that does not decode is a data contract violation.
async fn read_json<T, F>(response: Response, on_transport: F) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    F: FnOnce(String) -> ApiError,
{
    let bytes = response
        .bytes()
        .await
        .map_err(|e| on_transport(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| {
        warn!("Quiz service response did not decode: {}", e);
        ApiError::data_contract(e.to_string())
    })
}

/// Extract a readable message from an error body.
///
/// The service sends `{"detail": "..."}`; request validation failures carry
/// a list of `{"msg": "..."}` objects instead.
async fn error_detail(response: Response) -> Option<String> {
    let body: ErrorBody = response.json().await.ok()?;
    match body.detail? {
        serde_json::Value::String(message) if !message.trim().is_empty() => Some(message),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

fn status_reason(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
