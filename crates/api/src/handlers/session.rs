use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use timetable_core::{errors::TimetableError, models::Session};

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn list_sessions(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Session>>, AppError> {
    let sessions = state.sessions.list_sessions().await?;

    Ok(Json(sessions))
}

#[axum::debug_handler]
pub async fn get_session(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<Session>, AppError> {
    let session = state
        .sessions
        .get_session(&id)
        .await?
        .ok_or_else(|| TimetableError::NotFound(format!("Session with ID {} not found", id)))?;

    Ok(Json(session))
}
