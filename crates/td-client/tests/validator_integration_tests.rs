//! Integration tests for the session validator against a wiremock server

use std::time::Duration;

use serde_json::json;
use td_client::{ApiClient, DriftEvent, SessionValidator};
use td_core::Role;
use td_session::{Session, SessionStore};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn seeded_store(role: Role) -> SessionStore {
    let store = SessionStore::in_memory();
    store
        .set(Session {
            access_token: "access-token".into(),
            refresh_token: "refresh-token".into(),
            username: "alice".into(),
            role,
            tenant_schema: "acme".into(),
            tenant_list: vec![],
        })
        .unwrap();
    store
}

#[tokio::test]
async fn test_validator_detects_removal_and_clears_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/users/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 2, "username": "bob", "role": "OWNER", "joined_at": null}
        ])))
        .mount(&mock_server)
        .await;

    let store = seeded_store(Role::Member);
    let client = ApiClient::new(&mock_server.uri(), store.clone());
    let handle = SessionValidator::new(client, Duration::from_millis(20)).spawn();

    let event = handle.join().await;

    assert_eq!(event, Some(DriftEvent::RemovedFromTenant));
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn test_validator_detects_role_change() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/users/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "username": "alice", "role": "VIEWER", "joined_at": null}
        ])))
        .mount(&mock_server)
        .await;

    let store = seeded_store(Role::Member);
    let client = ApiClient::new(&mock_server.uri(), store.clone());
    let handle = SessionValidator::new(client, Duration::from_millis(20)).spawn();

    let event = handle.join().await;

    assert_eq!(
        event,
        Some(DriftEvent::RoleChanged {
            old: Role::Member,
            new: Role::Viewer,
        })
    );
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn test_validator_passes_when_membership_matches() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/users/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "username": "alice", "role": "MEMBER", "joined_at": null}
        ])))
        .mount(&mock_server)
        .await;

    let store = seeded_store(Role::Member);
    let client = ApiClient::new(&mock_server.uri(), store.clone());
    let handle = SessionValidator::new(client, Duration::from_millis(20)).spawn();

    tokio::time::sleep(Duration::from_millis(100)).await;
    let event = handle.stop().await;

    assert_eq!(event, None);
    assert!(store.is_authenticated());
}

#[tokio::test]
async fn test_validator_stop_halts_further_checks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/users/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "username": "alice", "role": "MEMBER", "joined_at": null}
        ])))
        .mount(&mock_server)
        .await;

    let store = seeded_store(Role::Member);
    let client = ApiClient::new(&mock_server.uri(), store.clone());
    let handle = SessionValidator::new(client, Duration::from_millis(20)).spawn();

    tokio::time::sleep(Duration::from_millis(60)).await;
    handle.stop().await;

    let count_after_stop = mock_server.received_requests().await.unwrap().len();
    tokio::time::sleep(Duration::from_millis(100)).await;
    let count_later = mock_server.received_requests().await.unwrap().len();

    assert_eq!(count_after_stop, count_later);
}

#[tokio::test]
async fn test_dropping_the_handle_winds_down_the_loop() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/users/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "username": "alice", "role": "MEMBER", "joined_at": null}
        ])))
        .mount(&mock_server)
        .await;

    let store = seeded_store(Role::Member);
    let client = ApiClient::new(&mock_server.uri(), store);
    let handle = SessionValidator::new(client, Duration::from_millis(20)).spawn();

    tokio::time::sleep(Duration::from_millis(50)).await;
    drop(handle);

    // Closing the stop channel ends the loop without an explicit stop()
    tokio::time::sleep(Duration::from_millis(60)).await;
    let count_after_drop = mock_server.received_requests().await.unwrap().len();
    tokio::time::sleep(Duration::from_millis(100)).await;
    let count_later = mock_server.received_requests().await.unwrap().len();

    assert_eq!(count_after_drop, count_later);
}

#[tokio::test]
async fn test_validator_ignores_transient_failures() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/users/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "db unavailable"})))
        .mount(&mock_server)
        .await;

    let store = seeded_store(Role::Member);
    let client = ApiClient::new(&mock_server.uri(), store.clone());
    let handle = SessionValidator::new(client, Duration::from_millis(20)).spawn();

    tokio::time::sleep(Duration::from_millis(100)).await;
    let event = handle.stop().await;

    // Server errors never end the session; the loop just keeps polling.
    assert_eq!(event, None);
    assert!(store.is_authenticated());
}

#[tokio::test]
async fn test_validator_reports_invalid_session_on_401() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/users/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "expired"})))
        .mount(&mock_server)
        .await;

    let store = seeded_store(Role::Member);
    let client = ApiClient::new(&mock_server.uri(), store.clone());
    let handle = SessionValidator::new(client, Duration::from_millis(20)).spawn();

    let event = handle.join().await;

    assert_eq!(event, Some(DriftEvent::SessionInvalid));
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn test_validator_idles_without_a_session() {
    let mock_server = MockServer::start().await;

    let store = SessionStore::in_memory();
    let client = ApiClient::new(&mock_server.uri(), store);
    let handle = SessionValidator::new(client, Duration::from_millis(20)).spawn();

    tokio::time::sleep(Duration::from_millis(100)).await;
    let event = handle.stop().await;

    assert_eq!(event, None);
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
