//! wikiquiz-app - Application state and orchestration for wikiquiz
//!
//! This crate implements the TEA (The Elm Architecture) pattern: [`AppState`]
//! is the model, [`Message`] the events, [`handler::update`] the only place
//! state changes, and [`actions::handle_action`] turns the returned
//! [`UpdateAction`]s into background tasks whose results come back as
//! messages. It also owns configuration loading and the controllers that
//! sequence every request to the quiz service.

pub mod actions;
pub mod config;
pub mod controllers;
pub mod debounce;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use actions::ActionContext;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, Tab};
