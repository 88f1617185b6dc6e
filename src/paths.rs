//! Centralized path definitions for taskmatrix
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.taskmatrix/
//! └── config.toml               # Ranking thresholds, server and model settings
//! ```
//!
//! Tasks are never written to disk; they live with the caller.

use std::path::PathBuf;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "TASKMATRIX_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = ".taskmatrix";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global taskmatrix directory.
///
/// Returns `~/.taskmatrix/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the config file path.
///
/// `$TASKMATRIX_CONFIG` when set and non-empty, otherwise
/// `~/.taskmatrix/config.toml`.
#[must_use]
pub fn config_file() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => global_config_dir().join(GLOBAL_CONFIG_FILE),
    }
}
