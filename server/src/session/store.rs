use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::session::transcript::ChatSession;

/// Error type for session store operations
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// Session not found
    #[error("Session not found: {0}")]
    NotFound(String),
    /// Error occurred during a store operation
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Session data structure
#[derive(Debug, Clone)]
pub struct Session {
    /// Unique session identifier
    pub id: String,
    /// When the session was created
    pub created_at: DateTime<Utc>,
    /// Last time the session was accessed or modified
    pub updated_at: DateTime<Utc>,
    /// Optional time when the session expires
    pub expires_at: Option<DateTime<Utc>>,
    /// Transcript and mood history
    pub chat: ChatSession,
}

impl Session {
    /// Create a new, empty session with the given ID
    pub fn new(id: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            created_at: now,
            updated_at: now,
            expires_at: None,
            chat: ChatSession::new(),
        }
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now > expires_at,
            None => false,
        }
    }

    /// Mark the session as used now, pushing the expiry out by `ttl` if given
    pub fn touch(&mut self, ttl: Option<Duration>) {
        let now = Utc::now();
        self.updated_at = now;
        if let Some(ttl) = ttl {
            self.expires_at = Some(now + ttl);
        }
    }
}

/// Trait defining the interface for session stores
#[async_trait]
pub trait SessionStore: Send + Sync + Debug {
    /// Create a new session with the given ID, replacing any previous one
    async fn create_session(&self, id: String) -> Result<Session, SessionStoreError>;

    /// Get a live session by ID
    async fn get_session(&self, id: &str) -> Result<Session, SessionStoreError>;

    /// Get a live session, creating an empty one if it is absent or expired
    async fn get_or_create_session(&self, id: &str) -> Result<Session, SessionStoreError>;

    /// Save changes to a session
    async fn save_session(&self, session: Session) -> Result<(), SessionStoreError>;

    /// Delete expired sessions
    async fn cleanup_expired_sessions(&self) -> Result<usize, SessionStoreError>;

    /// List all active (non-expired) sessions
    async fn list_sessions(&self) -> Result<Vec<Session>, SessionStoreError>;
}

/// Type alias for Arc-wrapped SessionStore trait objects
pub type SessionStoreRef = Arc<dyn SessionStore>;
