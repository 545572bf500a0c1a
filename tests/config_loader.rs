mod common;

use common::temp_config;
use feedback_board::config::{Config, ConfigError, RemoteMode};

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.remote.mode, RemoteMode::Http);
    assert_eq!(config.remote.base_url, "http://127.0.0.1:5000");
    assert_eq!(config.remote.timeout_seconds, 10);
    assert_eq!(config.remote.connect_timeout_seconds, 5);

    assert_eq!(config.server.bind_addr, "127.0.0.1:5000");
    assert!(config.server.seed);
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("feedback-board/config.toml"));
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let (_dir, path) = temp_config(
        r#"[remote]
base_url = "https://feedback.example.com/"
timeout_seconds = 3
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.remote.base_url, "https://feedback.example.com/");
    assert_eq!(config.remote.timeout_seconds, 3);
    assert_eq!(config.remote.connect_timeout_seconds, 5);
    assert_eq!(config.server.bind_addr, "127.0.0.1:5000");
}

#[test]
fn test_load_local_mode() {
    let (_dir, path) = temp_config(
        r#"[remote]
mode = "local"

[server]
seed = false
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.remote.mode, RemoteMode::Local);
    assert!(!config.server.seed);
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::load_from(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn test_bad_toml_is_parse_error() {
    let (_dir, path) = temp_config("[remote\nmode = ");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_unknown_mode_is_parse_error() {
    let (_dir, path) = temp_config("[remote]\nmode = \"carrier-pigeon\"\n");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_zero_timeout_fails_validation() {
    let (_dir, path) = temp_config("[remote]\ntimeout_seconds = 0\n");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn test_bad_bind_addr_fails_validation() {
    let (_dir, path) = temp_config("[server]\nbind_addr = \"not an address\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("server.bind_addr"));
}
