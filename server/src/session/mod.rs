//! Session management
//!
//! Each chat session owns its transcript and mood history. Sessions live in a
//! `SessionStore`, keyed by an opaque identifier handed to the client. A session
//! is created empty the first time its identifier is seen.

pub mod adapters;
pub mod store;
pub mod transcript;

pub use adapters::InMemorySessionStore;
pub use store::{Session, SessionStore, SessionStoreError, SessionStoreRef};
pub use transcript::{ChatSession, MoodRecord, Speaker, Turn};
