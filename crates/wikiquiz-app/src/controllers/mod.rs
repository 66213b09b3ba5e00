//! Controllers for the four user-facing operations
//!
//! - `preview`: debounced article title preview
//! - `generation`: quiz generation
//! - `history`: history list and selection cursor
//! - `detail`: detail overlay for one history entry
//! - `latest`: request tagging shared by all of the above
//!
//! Controllers are plain state machines. They never spawn work themselves;
//! they return the tag of a request to issue and later accept the tagged
//! result.

pub mod detail;
pub mod generation;
pub mod history;
pub mod latest;
pub mod preview;

pub use detail::{DetailController, DetailState};
pub use generation::{GenerationController, SubmitOutcome};
pub use history::HistoryController;
pub use latest::{LatestOf, RequestTag};
pub use preview::{DebounceRequest, PreviewController};
