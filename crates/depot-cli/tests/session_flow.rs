//! Session lifecycle against a mock backend: login, authenticated calls,
//! expiry handling.

mod fixtures;

use fixtures::{can_bind_localhost, data_response, depot_cmd, read_store, seed_session, temp_depot_home};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_login_stores_session() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_depot_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"username": "ana", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-1",
            "username": "ana",
            "user_id": 7,
        })))
        .expect(1)
        .mount(&server)
        .await;

    depot_cmd(home.path(), &server.uri())
        .args(["login", "ana", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as ana"));

    let store = read_store(home.path());
    assert_eq!(store["token"], "tok-1");
    assert_eq!(store["user"]["id"], 7);
    assert_eq!(store["user"]["username"], "ana");
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    if !can_bind_localhost() {
        return;
    }
    let home = temp_depot_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "bad login"})))
        .mount(&server)
        .await;

    depot_cmd(home.path(), &server.uri())
        .args(["login", "ana", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid username or password"));

    let store = read_store(home.path());
    assert!(store.get("token").is_none());
}

#[tokio::test]
async fn test_authenticated_requests_carry_session_headers() {
    if !can_bind_localhost() {
        return;
    }
    let home = temp_depot_home();
    seed_session(home.path(), "tok-9", 7, "ana");
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/usuario/7/clasificaciones"))
        .and(header("x-access-token", "tok-9"))
        .and(header("user_id", "7"))
        .respond_with(data_response(
            json!([{"id": 1, "name": "Tools", "descripcion": "hand tools"}]),
        ))
        .expect(1)
        .mount(&server)
        .await;

    depot_cmd(home.path(), &server.uri())
        .args(["categories", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tools"));
}

#[tokio::test]
async fn test_expired_session_is_cleared_locally() {
    if !can_bind_localhost() {
        return;
    }
    let home = temp_depot_home();
    seed_session(home.path(), "tok-stale", 7, "ana");
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/usuario/7/inventario"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "expired"})))
        .mount(&server)
        .await;

    depot_cmd(home.path(), &server.uri())
        .args(["stock", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session expired"));

    // The stale token must be gone so the next run starts logged out.
    let store = read_store(home.path());
    assert!(store.get("token").is_none());
    assert!(store.get("user").is_none());
}

#[tokio::test]
async fn test_whoami_reads_stored_session_offline() {
    let home = temp_depot_home();
    seed_session(home.path(), "tok-9", 7, "ana");

    depot_cmd(home.path(), "http://127.0.0.1:9")
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("ana"))
        .stdout(predicate::str::contains("7"));
}

#[tokio::test]
async fn test_logout_clears_the_store() {
    let home = temp_depot_home();
    seed_session(home.path(), "tok-9", 7, "ana");

    depot_cmd(home.path(), "http://127.0.0.1:9")
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));

    let store = read_store(home.path());
    assert!(store.get("token").is_none());

    depot_cmd(home.path(), "http://127.0.0.1:9")
        .arg("whoami")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not logged in"));
}
