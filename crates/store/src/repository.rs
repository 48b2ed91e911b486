use std::path::Path;

use async_trait::async_trait;
use eyre::Result;
use mockall::automock;
use timetable_core::{
    daily::daily_timetable,
    models::{Day, Session},
};
use tokio::sync::RwLock;

use crate::{catalog, load_sessions};

/// Source of class sessions for the timetable views.
#[automock]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// All sessions in their stored order.
    async fn list_sessions(&self) -> Result<Vec<Session>>;

    async fn get_session(&self, id: &str) -> Result<Option<Session>>;

    /// Sessions of one day, ordered by start time.
    async fn sessions_for_day(&self, day: Day) -> Result<Vec<Session>>;
}

/// Keeps sessions in memory. Nothing is written anywhere.
pub struct InMemorySessionRepository {
    sessions: RwLock<Vec<Session>>,
}

impl InMemorySessionRepository {
    pub fn new(sessions: Vec<Session>) -> Self {
        Self {
            sessions: RwLock::new(sessions),
        }
    }

    pub fn with_catalog() -> Self {
        Self::new(catalog::default_sessions())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(load_sessions(path)?))
    }

    /// Swaps in a whole new session list, returning how many were loaded.
    pub async fn replace_sessions(&self, sessions: Vec<Session>) -> usize {
        let mut guard = self.sessions.write().await;
        *guard = sessions;
        tracing::debug!("Replaced session list with {} sessions", guard.len());
        guard.len()
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::with_catalog()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn list_sessions(&self) -> Result<Vec<Session>> {
        Ok(self.sessions.read().await.clone())
    }

    async fn get_session(&self, id: &str) -> Result<Option<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.iter().find(|session| session.id == id).cloned())
    }

    async fn sessions_for_day(&self, day: Day) -> Result<Vec<Session>> {
        let sessions = self.sessions.read().await;
        Ok(daily_timetable(&sessions, day))
    }
}
