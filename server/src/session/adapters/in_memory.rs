use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::{debug, info};

use crate::session::store::{Session, SessionStore, SessionStoreError};

/// In-memory implementation of SessionStore
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    /// Thread-safe storage of sessions
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    /// Idle time after which a session expires; `None` keeps sessions forever
    ttl: Option<Duration>,
}

impl InMemorySessionStore {
    /// Create a new InMemorySessionStore whose sessions never expire
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose sessions expire after `ttl` without a save
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: Arc::default(),
            ttl: Some(ttl),
        }
    }

    fn insert_new(
        sessions: &mut HashMap<String, Session>,
        id: String,
        ttl: Option<Duration>,
    ) -> Session {
        let mut session = Session::new(id.clone());
        session.touch(ttl);
        sessions.insert(id, session.clone());
        debug!(session_id = %session.id, "Created session");
        session
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create_session(&self, id: String) -> Result<Session, SessionStoreError> {
        let mut sessions = self.sessions.write().map_err(|e| {
            SessionStoreError::StorageError(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(Self::insert_new(&mut sessions, id, self.ttl))
    }

    async fn get_session(&self, id: &str) -> Result<Session, SessionStoreError> {
        let sessions = self.sessions.read().map_err(|e| {
            SessionStoreError::StorageError(format!("Failed to acquire read lock: {}", e))
        })?;

        let session = sessions
            .get(id)
            .cloned()
            .ok_or_else(|| SessionStoreError::NotFound(id.to_string()))?;

        if session.is_expired() {
            return Err(SessionStoreError::NotFound(format!("Session expired: {}", id)));
        }

        Ok(session)
    }

    async fn get_or_create_session(&self, id: &str) -> Result<Session, SessionStoreError> {
        let mut sessions = self.sessions.write().map_err(|e| {
            SessionStoreError::StorageError(format!("Failed to acquire write lock: {}", e))
        })?;

        if let Some(session) = sessions.get(id).filter(|session| !session.is_expired()) {
            return Ok(session.clone());
        }

        Ok(Self::insert_new(&mut sessions, id.to_string(), self.ttl))
    }

    async fn save_session(&self, mut session: Session) -> Result<(), SessionStoreError> {
        session.touch(self.ttl);

        let mut sessions = self.sessions.write().map_err(|e| {
            SessionStoreError::StorageError(format!("Failed to acquire write lock: {}", e))
        })?;

        sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn cleanup_expired_sessions(&self) -> Result<usize, SessionStoreError> {
        let mut sessions = self.sessions.write().map_err(|e| {
            SessionStoreError::StorageError(format!("Failed to acquire write lock: {}", e))
        })?;

        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|id, session| {
            let expired = session.is_expired_at(now);
            if expired {
                debug!(session_id = %id, "Cleaned up expired session");
            }
            !expired
        });

        let count = before - sessions.len();
        if count > 0 {
            info!("Cleaned up {} expired sessions", count);
        }

        Ok(count)
    }

    async fn list_sessions(&self) -> Result<Vec<Session>, SessionStoreError> {
        let sessions = self.sessions.read().map_err(|e| {
            SessionStoreError::StorageError(format!("Failed to acquire read lock: {}", e))
        })?;

        let now = Utc::now();
        let active_sessions: Vec<Session> = sessions
            .values()
            .filter(|session| !session.is_expired_at(now))
            .cloned()
            .collect();

        debug!("Listed {} active sessions", active_sessions.len());
        Ok(active_sessions)
    }
}
