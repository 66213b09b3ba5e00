//! Lifecycle of a single asynchronous operation.

/// Tagged state of one asynchronous operation.
///
/// Every controller exposes its result through this type so the view layer
/// can render loading, value and error uniformly. A value and an error are
/// never held at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AsyncState<T> {
    /// Nothing requested yet (or explicitly reset).
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request succeeded.
    Success(T),
    /// The latest request failed; holds a user-facing message.
    Error(String),
}

impl<T> AsyncState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, AsyncState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AsyncState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AsyncState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AsyncState::Error(_))
    }

    /// The successful value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            AsyncState::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The error message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            AsyncState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Build the terminal state for a finished request.
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => AsyncState::Success(value),
            Err(e) => AsyncState::Error(e.to_string()),
        }
    }

}
