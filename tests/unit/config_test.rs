//! Tests for configuration management

use std::fs;

use serial_test::serial;
use taskmatrix::config::{Config, ConfigError};
use taskmatrix::paths;
use tempfile::TempDir;

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.ranking.low_max, 3);
    assert_eq!(config.ranking.high_min, 8);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9990);
    assert_eq!(config.llm.api_key_env, "OPENAI_API_KEY");
}

#[test]
fn test_missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

// =============================================================================
// LOAD / SAVE
// =============================================================================

#[test]
fn test_partial_file_fills_in_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[ranking]\nhigh_min = 6\n\n[llm]\nmodel = \"local\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ranking.low_max, 3);
    assert_eq!(config.ranking.high_min, 6);
    assert_eq!(config.llm.model, "local");
    assert_eq!(config.server.port, 9990);
}

#[test]
fn test_save_and_reload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("deep").join("config.toml");

    let mut config = Config::default();
    config.server.port = 8080;
    config.ranking.low_max = 2;
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[server\nport = 1").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

// =============================================================================
// PATHS
// =============================================================================

#[test]
#[serial]
fn test_config_env_overrides_path() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("custom.toml");

    // SAFETY: serialized with every other test that touches the environment
    unsafe { std::env::set_var(paths::CONFIG_ENV, &custom) };
    let resolved = Config::config_path();
    unsafe { std::env::remove_var(paths::CONFIG_ENV) };

    assert_eq!(resolved, custom);
}

#[test]
#[serial]
fn test_default_path_is_under_home() {
    // SAFETY: serialized with every other test that touches the environment
    unsafe { std::env::remove_var(paths::CONFIG_ENV) };
    let path = Config::config_path();
    assert!(path.ends_with(".taskmatrix/config.toml"));
}
