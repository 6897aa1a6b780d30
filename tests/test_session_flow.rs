mod helpers;

use clap::Parser;
use helpers::{bodies, TestHarness};
use serde_json::json;
use starlus::application::{
    Authenticator, BackendGateway, CredentialStore, NoteBrowser, SessionManager,
};
use starlus::cli::args::Args;
use starlus::domain::{DomainError, SessionState};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn given_valid_login_when_making_authenticated_request_then_bearer_token_attached() {
    // Arrange
    let harness = TestHarness::new().await.expect("Harness should build");
    Mock::given(method("POST"))
        .and(path("/api/token/"))
        .and(body_json(json!({ "username": "alice", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(bodies::token("tok-1", "ref-1")))
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/notes/"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&harness.server)
        .await;

    let mut session = SessionManager::new(harness.store.clone()).expect("Session should build");
    assert_eq!(session.state(), SessionState::Unauthenticated);

    // Act
    let credentials = Authenticator::new(harness.backend())
        .login("alice", "secret")
        .await
        .expect("Login should succeed");
    session
        .complete_login(credentials)
        .expect("Login should persist");
    let notes = NoteBrowser::new(harness.backend())
        .list_notes(false)
        .await
        .expect("List should succeed");

    // Assert: the bearer-header matcher on the notes mock did the real check
    assert_eq!(session.state(), SessionState::Authenticated);
    assert!(notes.is_empty());
}

#[tokio::test]
async fn given_wrong_password_when_logging_in_then_unauthenticated_and_nothing_stored() {
    // Arrange
    let harness = TestHarness::new().await.expect("Harness should build");
    Mock::given(method("POST"))
        .and(path("/api/token/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "detail": "No active account found" })),
        )
        .expect(1)
        .mount(&harness.server)
        .await;

    let session = SessionManager::new(harness.store.clone()).expect("Session should build");

    // Act
    let result = Authenticator::new(harness.backend())
        .login("alice", "wrong")
        .await;

    // Assert
    assert!(matches!(result, Err(DomainError::InvalidCredentials)));
    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert!(harness
        .store
        .read()
        .expect("Read should succeed")
        .is_none());
}

#[tokio::test]
async fn given_logout_when_making_authenticated_request_then_rejected_before_the_wire() {
    // Arrange
    let harness = TestHarness::new().await.expect("Harness should build");
    harness
        .store_credentials("tok-1", "ref-1")
        .expect("Seed should succeed");

    let mut session = SessionManager::new(harness.store.clone()).expect("Session should build");
    assert_eq!(session.state(), SessionState::Authenticated);

    // Act
    session.logout().expect("Logout should succeed");
    let result = harness.backend().list_notes().await;

    // Assert
    assert_eq!(session.state(), SessionState::Unauthenticated);
    assert!(harness
        .store
        .read()
        .expect("Read should succeed")
        .is_none());
    assert!(matches!(result, Err(DomainError::NotAuthenticated)));
    let requests = harness
        .server
        .received_requests()
        .await
        .expect("Request recording should be enabled");
    assert!(requests.is_empty(), "No request should reach the backend");
}

#[tokio::test]
async fn given_backend_rejects_token_when_requesting_then_session_expires_and_store_clears() {
    // Arrange
    let harness = TestHarness::new().await.expect("Harness should build");
    harness
        .store_credentials("stale-token", "stale-refresh")
        .expect("Seed should succeed");
    Mock::given(method("GET"))
        .and(path("/api/notes/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "detail": "Token is invalid or expired" })),
        )
        .expect(1)
        .mount(&harness.server)
        .await;

    let mut session = SessionManager::new(harness.store.clone()).expect("Session should build");

    // Act
    let result = NoteBrowser::new(harness.backend()).list_notes(false).await;
    assert!(matches!(result, Err(DomainError::SessionExpired)));
    session.mark_expired().expect("Expiry should succeed");

    // Assert
    assert_eq!(session.state(), SessionState::Expired);
    assert!(!session.is_authenticated());
    assert!(harness
        .store
        .read()
        .expect("Read should succeed")
        .is_none());
}

#[tokio::test]
async fn given_full_run_when_logging_in_then_calculating_then_token_flows_end_to_end() {
    // Arrange
    let harness = TestHarness::new().await.expect("Harness should build");
    Mock::given(method("POST"))
        .and(path("/api/token/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bodies::token("tok-e2e", "ref-e2e")))
        .expect(1)
        .mount(&harness.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/calculations/"))
        .and(header("authorization", "Bearer tok-e2e"))
        .and(body_json(json!({ "expression": "12" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "result": "12" })))
        .expect(1)
        .mount(&harness.server)
        .await;

    let base = harness.api_base();
    let dir = harness.data_dir().to_str().expect("Path should be utf-8");

    // Act
    let login = Args::try_parse_from([
        "starlus", "--base-url", &base, "--data-dir", dir, "login", "alice", "secret",
    ])
    .expect("Args should parse");
    starlus::run(login).await.expect("Login run should succeed");

    let calc = Args::try_parse_from([
        "starlus", "--base-url", &base, "--data-dir", dir, "calc", "12=",
    ])
    .expect("Args should parse");
    starlus::run(calc).await.expect("Calc run should succeed");

    // Assert: both mocks verified on drop; the stored token survived the
    // process boundary between the two runs.
    let stored = harness
        .store
        .read()
        .expect("Read should succeed")
        .expect("Credentials should be present");
    assert_eq!(stored.access, "tok-e2e");
    assert_eq!(stored.refresh, "ref-e2e");
}

#[tokio::test]
async fn given_full_run_when_logged_out_then_feature_command_fails_without_request() {
    // Arrange
    let harness = TestHarness::new().await.expect("Harness should build");
    let base = harness.api_base();
    let dir = harness.data_dir().to_str().expect("Path should be utf-8");

    // Act
    let args = Args::try_parse_from([
        "starlus", "--base-url", &base, "--data-dir", dir, "notes", "list",
    ])
    .expect("Args should parse");
    let result = starlus::run(args).await;

    // Assert
    assert!(matches!(result, Err(DomainError::NotAuthenticated)));
    let requests = harness
        .server
        .received_requests()
        .await
        .expect("Request recording should be enabled");
    assert!(requests.is_empty());
}
