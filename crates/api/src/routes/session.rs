use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/sessions", get(handlers::session::list_sessions))
        .route("/api/sessions/:id", get(handlers::session::get_session))
}
