//! Custom widget components

mod detail_modal;
mod footer;
mod header;
mod history_table;
pub mod modal_overlay;
mod quiz_view;
pub mod spinner;
mod url_input;

pub use detail_modal::DetailModal;
pub use footer::KeyHints;
pub use header::{MainHeader, APP_NAME};
pub use history_table::{local_date, HistoryTable, EMPTY_MESSAGE};
pub use quiz_view::{quiz_lines, QuizView};
pub use url_input::{visible_tail, UrlInput, PLACEHOLDER};
