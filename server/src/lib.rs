//! Mental-health support chat server.
//!
//! Each user message is scored for sentiment, answered by Gemini, and paired
//! with a coping suggestion for its sentiment bucket. Transcripts and mood
//! history live in memory for the lifetime of a session.

pub mod config;
pub mod coordinator;
pub mod http_server;
pub mod lexicon;
pub mod llm_client;
pub mod render;
pub mod resources;
pub mod sentiment;
pub mod session;
pub mod strategy;

pub use lexicon::{LexiconScorer, PolarityScorer};
pub use sentiment::{classify, Sentiment, SentimentLabel};
pub use strategy::{advise, advise_by_name};
