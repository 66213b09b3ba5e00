//! Settings loader for `{config_dir}/wikiquiz/config.toml`
//!
//! Precedence, highest first: `--api-base`, `WIKIQUIZ_API_BASE_URL`, the
//! config file, built-in defaults.

use std::path::{Path, PathBuf};

use wikiquiz_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "wikiquiz";

/// Environment variable overriding `api.base_url`
pub const API_BASE_ENV_VAR: &str = "WIKIQUIZ_API_BASE_URL";

/// Default location of the config file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// A missing or unparsable file yields defaults.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Apply environment and command-line overrides on top of file settings.
///
/// Blank override values are ignored.
pub fn apply_overrides(
    settings: &mut Settings,
    env_base_url: Option<String>,
    cli_base_url: Option<String>,
) {
    let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

    if let Some(url) = non_blank(env_base_url) {
        debug!("{} overrides api.base_url", API_BASE_ENV_VAR);
        settings.api.base_url = url;
    }
    if let Some(url) = non_blank(cli_base_url) {
        debug!("--api-base overrides api.base_url");
        settings.api.base_url = url;
    }
    settings.api.base_url = settings
        .api
        .base_url
        .trim()
        .trim_end_matches('/')
        .to_string();
}

/// Resolve the process-wide settings once at startup.
///
/// `config_path` replaces the default location when given. Reads
/// [`API_BASE_ENV_VAR`] from the environment.
pub fn resolve_settings(config_path: Option<&Path>, cli_base_url: Option<String>) -> Settings {
    let mut settings = match config_path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => load_settings(&path),
        None => {
            warn!("No config directory available, using default settings");
            Settings::default()
        }
    };

    apply_overrides(&mut settings, std::env::var(API_BASE_ENV_VAR).ok(), cli_base_url);
    info!(
        "Quiz service at {} (timeout {}s, preview debounce {}ms)",
        settings.api.base_url, settings.api.timeout_secs, settings.preview.debounce_ms
    );
    settings
}

/// Write a commented default config file at `config_path` if none exists.
///
/// Returns `false` when a file was already there and was left untouched.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let default_content = r#"# wikiquiz configuration

[api]
# Base URL of the quiz service
base_url = "http://localhost:8000"
# Per-request timeout in seconds
timeout_secs = 120

[preview]
# Quiet period before the title preview is fetched
debounce_ms = 500
"#;

    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}
