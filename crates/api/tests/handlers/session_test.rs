use std::sync::Arc;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;
use timetable_core::models::Session;
use timetable_store::MockSessionRepository;

use crate::test_utils::{catalog_server, server_with};

#[tokio::test]
async fn test_health_and_version() {
    let server = catalog_server();

    let health = server.get("/health").await;
    assert_eq!(health.status_code(), StatusCode::OK);
    assert_eq!(health.json::<Value>()["status"], "ok");

    let version = server.get("/version").await;
    assert_eq!(version.json::<Value>()["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_list_sessions() {
    let server = catalog_server();

    let response = server.get("/api/sessions").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let sessions: Vec<Session> = response.json();
    assert_eq!(sessions.len(), 8);
    assert_eq!(sessions[0].name, "Computer Science 101");
}

#[tokio::test]
async fn test_get_session() {
    let server = catalog_server();

    let response = server.get("/api/sessions/7").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let session: Session = response.json();
    assert_eq!(session.instructor, "Dr. Vint Cerf");
}

#[tokio::test]
async fn test_get_missing_session_is_not_found() {
    let server = catalog_server();

    let response = server.get("/api/sessions/404").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["error"],
        "Resource not found: Session with ID 404 not found"
    );
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let mut repo = MockSessionRepository::new();
    repo.expect_list_sessions()
        .returning(|| Err(eyre::eyre!("Store unavailable")));
    let server = server_with(Arc::new(repo));

    let response = server.get("/api/sessions").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
