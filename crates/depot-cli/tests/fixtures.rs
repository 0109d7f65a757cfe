//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::json;
use tempfile::TempDir;
use wiremock::ResponseTemplate;

/// Creates a temp DEPOT_HOME directory for test isolation.
pub fn temp_depot_home() -> TempDir {
    TempDir::new().expect("create temp depot home")
}

pub fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

/// `depot` wired to a temp home and a mock backend.
pub fn depot_cmd(home: &Path, base_url: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("depot");
    cmd.env("DEPOT_HOME", home).env("DEPOT_BASE_URL", base_url);
    cmd
}

/// Writes a stored session the way the client itself would.
pub fn seed_session(home: &Path, token: &str, user_id: i64, username: &str) {
    let store = json!({
        "token": token,
        "user": { "id": user_id, "username": username },
    });
    std::fs::write(
        home.join("store.json"),
        serde_json::to_string_pretty(&store).unwrap(),
    )
    .unwrap();
}

pub fn read_store(home: &Path) -> serde_json::Value {
    let raw =
        std::fs::read_to_string(home.join("store.json")).unwrap_or_else(|_| "{}".to_string());
    serde_json::from_str(&raw).unwrap()
}

/// Backend success envelope: payload under "data".
pub fn data_response(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
}

/// Backend error envelope.
pub fn error_response(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "error": message }))
}
