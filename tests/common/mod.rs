//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod server;

use feedback_board::config::{RemoteConfig, RemoteMode};
use feedback_board::remote::HttpCollectionClient;
use feedback_board::store::FeedbackStore;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn remote_config(base_url: &str) -> RemoteConfig {
    RemoteConfig {
        mode: RemoteMode::Http,
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

/// Store wired to the HTTP client at `base_url`.
pub fn http_store(base_url: &str) -> FeedbackStore {
    let client = HttpCollectionClient::new(&remote_config(base_url)).expect("Failed to build client");
    FeedbackStore::new(Arc::new(client))
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
