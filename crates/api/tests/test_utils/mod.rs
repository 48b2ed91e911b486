use std::sync::Arc;

use axum_test::TestServer;
use timetable_api::{build_router, ApiState};
use timetable_core::models::Session;
use timetable_store::{InMemorySessionRepository, SessionRepository};

/// Server over the demo catalog.
pub fn catalog_server() -> TestServer {
    server_with(Arc::new(InMemorySessionRepository::with_catalog()))
}

/// Server over exactly `sessions`.
pub fn sessions_server(sessions: Vec<Session>) -> TestServer {
    server_with(Arc::new(InMemorySessionRepository::new(sessions)))
}

pub fn server_with(repo: Arc<dyn SessionRepository>) -> TestServer {
    let state = Arc::new(ApiState::new(repo));
    TestServer::new(build_router(state)).expect("Failed to start test server")
}
