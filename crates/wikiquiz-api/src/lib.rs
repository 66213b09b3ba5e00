//! # wikiquiz-api - Quiz Service Client
//!
//! The remote client for the quiz generation service: generate a quiz from a
//! Wikipedia article, list the history of generated quizzes, fetch one quiz
//! by id, and preview an article title.
//!
//! ## Public API
//!
//! - [`QuizApi`] - The operations, as a `Send` async trait
//! - [`HttpQuizClient`] - `reqwest` implementation against the JSON API
//! - [`ApiError`] - One variant per failing operation
//!
//! With the `test-helpers` feature, `test_utils::FakeQuizApi` provides an
//! in-memory implementation that records calls.

pub mod client;
pub mod error;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{HttpQuizClient, LocalQuizApi, QuizApi};
pub use error::{ApiError, GENERATION_FAILED_MESSAGE};
