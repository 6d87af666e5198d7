//! Chat turns and the per-session locks that keep them ordered.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as TurnMutex, OwnedMutexGuard};
use tracing::{debug, info};

use crate::lexicon::PolarityScorer;
use crate::llm_client::ResponseGenerator;
use crate::sentiment::{classify_with, Sentiment};
use crate::session::{ChatSession, Session, SessionStore, SessionStoreError, Speaker};
use crate::strategy::advise;

/// What one user message produced
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    pub sentiment: Sentiment,
    pub strategy: &'static str,
    pub reply: String,
}

/// Session state after a submission, plus the turn's outcome if one ran
#[derive(Debug)]
pub struct Submission {
    pub session: Session,
    pub outcome: Option<TurnOutcome>,
}

/// Per-session turn locks.
///
/// A turn reads a session, awaits the model and writes the session back, so two
/// turns on the same session must not interleave or one of them is lost.
#[derive(Debug, Default)]
pub struct SessionLocks {
    locks: Mutex<HashMap<String, Arc<TurnMutex<()>>>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until no other turn is running for `session_id`
    pub async fn lock(&self, session_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            locks
                .entry(session_id.to_string())
                .or_insert_with(|| Arc::new(TurnMutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    /// Drop locks nobody holds or waits on; returns how many were removed
    pub fn prune(&self) -> usize {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        let before = locks.len();
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        before - locks.len()
    }

    pub fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Run one chat turn against `chat`.
///
/// An empty message is ignored and leaves `chat` untouched. Otherwise exactly one
/// user turn, one bot turn and one mood record are appended, even when the
/// generator fails.
pub async fn process_turn(
    scorer: &dyn PolarityScorer,
    generator: &dyn ResponseGenerator,
    chat: &mut ChatSession,
    message: &str,
) -> Option<TurnOutcome> {
    if message.is_empty() {
        return None;
    }

    chat.append_turn(Speaker::User, message);

    let sentiment = classify_with(scorer, message);
    let strategy = advise(sentiment.label);
    debug!(label = %sentiment.label, polarity = sentiment.polarity, "Classified message");

    let reply = generator.generate(message).await;
    chat.append_turn(Speaker::Bot, reply.clone());

    chat.append_mood(message, sentiment.label, sentiment.polarity);

    Some(TurnOutcome {
        sentiment,
        strategy,
        reply,
    })
}

/// Load (or start) a session, run the turn and save the session back.
///
/// Turns on the same session run one at a time; the store itself is not locked
/// while the model is called.
pub async fn submit(
    locks: &SessionLocks,
    store: &dyn SessionStore,
    scorer: &dyn PolarityScorer,
    generator: &dyn ResponseGenerator,
    session_id: &str,
    message: &str,
) -> Result<Submission, SessionStoreError> {
    let _turn = locks.lock(session_id).await;
    let mut session = store.get_or_create_session(session_id).await?;

    let outcome = process_turn(scorer, generator, &mut session.chat, message).await;

    if let Some(outcome) = &outcome {
        info!(
            session_id = %session.id,
            label = %outcome.sentiment.label,
            polarity = outcome.sentiment.polarity,
            turns = session.chat.all_turns().len(),
            "Processed chat turn"
        );
        store.save_session(session.clone()).await?;
    }

    Ok(Submission { session, outcome })
}
