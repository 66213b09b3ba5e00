//! wikiquiz-tui - Terminal UI for wikiquiz
//!
//! Draws `AppState` with ratatui and feeds crossterm key events into the
//! app crate's update loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
