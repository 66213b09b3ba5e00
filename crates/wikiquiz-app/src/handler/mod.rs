//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focus (URL input, history list, overlay)

pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::time::Duration;

use wikiquiz_core::QuizRequest;

use crate::controllers::RequestTag;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// (Re)start the preview quiet-period timer, cancelling any pending one
    ScheduleDebounce { generation: u64, delay: Duration },

    /// Look up the title for `tag.key`
    FetchPreview { tag: RequestTag<String> },

    /// Submit a generation request
    SubmitGeneration {
        tag: RequestTag<String>,
        request: QuizRequest,
    },

    /// Fetch the history list
    FetchHistory { tag: RequestTag<u64> },

    /// Fetch quiz `tag.key` for the detail overlay
    FetchDetail { tag: RequestTag<i64> },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
