//! # wikiquiz-core - Core Domain Types
//!
//! Foundation crate for wikiquiz. Provides the quiz domain types, the
//! `AsyncState` lifecycle shared by every controller, Wikipedia URL rules,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing, url).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`QuizRequest`] - Validated generation request body
//! - [`QuizRecord`] - One history row
//! - [`QuizDetail`], [`QuizQuestion`], [`KeyEntities`], [`Difficulty`] - Full quiz payload
//!
//! ### Async Lifecycle (`async_state`)
//! - [`AsyncState`] - Idle / Loading / Success / Error
//!
//! ### URL Rules (`wiki_url`)
//! - [`validate_article_url()`] - The article URL predicate
//! - [`article_title_from_url()`] - Local title derivation used for previews
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Infrastructure errors (IO, signals, configuration)
//! - [`ValidationError`] - Input rejected before any request is made
//! - [`Result`], [`ResultExt`]
//!
//! ## Prelude
//!
//! ```rust
//! use wikiquiz_core::prelude::*;
//! ```

pub mod async_state;
pub mod error;
pub mod logging;
pub mod types;
pub mod wiki_url;

/// Prelude for common imports used throughout all wikiquiz crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use async_state::AsyncState;
pub use error::{Error, Result, ResultExt, ValidationError, INVALID_ARTICLE_URL_MESSAGE};
pub use types::{
    option_letter, parse_timestamp, sort_records_newest_first, Difficulty, KeyEntities,
    QuizDetail, QuizQuestion, QuizRecord, QuizRequest,
};
pub use wiki_url::{
    article_title_from_url, is_wikipedia_article_url, related_topic_url, validate_article_url,
    ARTICLE_URL_PREFIX, WIKIPEDIA_HOST,
};
