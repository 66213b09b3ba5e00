//! Failures reported by the quiz service client

use thiserror::Error;

/// Generic message used when the service gives no detail for a failed generation.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate quiz";

/// Uniform failure shape for every remote operation.
///
/// Each operation fails with its own variant so controllers can surface a
/// message that names what went wrong. Transport failures (connection
/// refused, timeout) and non-2xx responses share the operation's variant;
/// `reason` keeps the underlying cause for logs. Values are `Clone` because
/// they travel inside TEA messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Quiz generation failed; `message` is the service's `detail` when present.
    #[error("{message}")]
    Generation { message: String },

    #[error("Failed to fetch quiz history")]
    HistoryFetch { reason: String },

    #[error("Failed to fetch details for quiz ID {id}")]
    DetailFetch { id: i64, reason: String },

    /// A 2xx response whose body does not match the expected shape.
    #[error("Unexpected response from quiz service: {message}")]
    DataContract { message: String },
}

impl ApiError {
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    pub fn history_fetch(reason: impl Into<String>) -> Self {
        Self::HistoryFetch {
            reason: reason.into(),
        }
    }

    pub fn detail_fetch(id: i64, reason: impl Into<String>) -> Self {
        Self::DetailFetch {
            id,
            reason: reason.into(),
        }
    }

    pub fn data_contract(message: impl Into<String>) -> Self {
        Self::DataContract {
            message: message.into(),
        }
    }
}
