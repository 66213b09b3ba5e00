//! Configuration file parsing for wikiquiz
//!
//! Supports `{config_dir}/wikiquiz/config.toml` plus environment and CLI
//! overrides of the service base URL.

pub mod settings;
pub mod types;

pub use settings::{
    apply_overrides, default_config_path, init_config_file, load_settings, resolve_settings,
    API_BASE_ENV_VAR,
};
pub use types::*;
