pub mod catalog;
pub mod repository;

use std::path::Path;

use eyre::{Result, WrapErr};
use timetable_core::models::Session;

pub use repository::{InMemorySessionRepository, MockSessionRepository, SessionRepository};

/// Reads a JSON array of sessions from `path`.
pub fn load_sessions(path: impl AsRef<Path>) -> Result<Vec<Session>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read sessions file {}", path.display()))?;

    let sessions: Vec<Session> = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("Failed to parse sessions file {}", path.display()))?;

    tracing::debug!("Loaded {} sessions from {}", sessions.len(), path.display());

    Ok(sessions)
}
