//! Per-session chat transcript and mood history.
//!
//! Both lists are append-only. There is no way to edit or remove an entry once
//! it has been recorded.

use std::fmt::{self, Display};

use serde::Serialize;

use crate::sentiment::SentimentLabel;

/// Who said a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    /// Name shown in the chat bubble
    pub fn display_name(&self) -> &'static str {
        match self {
            Speaker::User => "You",
            Speaker::Bot => "Bot",
        }
    }
}

impl Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One message in the transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Turn {
    speaker: Speaker,
    text: String,
}

impl Turn {
    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Sentiment recorded for one user message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodRecord {
    message: String,
    sentiment: SentimentLabel,
    polarity: f64,
}

impl MoodRecord {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn sentiment(&self) -> SentimentLabel {
        self.sentiment
    }

    pub fn polarity(&self) -> f64 {
        self.polarity
    }

    /// `"{message} - Sentiment: {label} (Polarity: {polarity})"`
    pub fn summary(&self) -> String {
        format!(
            "{} - Sentiment: {} (Polarity: {:?})",
            self.message, self.sentiment, self.polarity
        )
    }
}

/// Transcript and mood history of one session
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChatSession {
    transcript: Vec<Turn>,
    mood_history: Vec<MoodRecord>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_turn(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.transcript.push(Turn {
            speaker,
            text: text.into(),
        });
    }

    pub fn append_mood(
        &mut self,
        message: impl Into<String>,
        sentiment: SentimentLabel,
        polarity: f64,
    ) {
        self.mood_history.push(MoodRecord {
            message: message.into(),
            sentiment,
            polarity,
        });
    }

    pub fn all_turns(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn all_mood_records(&self) -> &[MoodRecord] {
        &self.mood_history
    }

    /// Polarity of each user message in arrival order, for charting
    pub fn polarity_series(&self) -> Vec<f64> {
        self.mood_history.iter().map(MoodRecord::polarity).collect()
    }

    /// Numbered summary lines, one per mood record, starting at 1
    pub fn summary_lines(&self) -> Vec<String> {
        self.mood_history
            .iter()
            .enumerate()
            .map(|(i, record)| format!("{}. {}", i + 1, record.summary()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty() && self.mood_history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let chat = ChatSession::new();
        assert!(chat.is_empty());
        assert!(chat.all_turns().is_empty());
        assert!(chat.all_mood_records().is_empty());
        assert!(chat.summary_lines().is_empty());
    }

    #[test]
    fn test_appends_keep_arrival_order() {
        let mut chat = ChatSession::new();
        chat.append_turn(Speaker::User, "first");
        chat.append_turn(Speaker::Bot, "second");
        chat.append_turn(Speaker::User, "third");

        let texts: Vec<&str> = chat.all_turns().iter().map(Turn::text).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(chat.all_turns()[1].speaker(), Speaker::Bot);
    }

    #[test]
    fn test_mood_records_and_series() {
        let mut chat = ChatSession::new();
        chat.append_mood("I am so happy today!", SentimentLabel::VeryPositive, 1.0);
        chat.append_mood("meh", SentimentLabel::Neutral, 0.0);

        assert_eq!(chat.all_mood_records().len(), 2);
        assert_eq!(chat.all_mood_records()[0].sentiment(), SentimentLabel::VeryPositive);
        assert_eq!(chat.polarity_series(), vec![1.0, 0.0]);
    }

    #[test]
    fn test_summary_lines_format() {
        let mut chat = ChatSession::new();
        chat.append_mood("I am so happy today!", SentimentLabel::VeryPositive, 1.0);
        chat.append_mood("not good", SentimentLabel::Negative, -0.35);

        assert_eq!(
            chat.summary_lines(),
            vec![
                "1. I am so happy today! - Sentiment: Very Positive (Polarity: 1.0)".to_string(),
                "2. not good - Sentiment: Negative (Polarity: -0.35)".to_string(),
            ]
        );
    }

    #[test]
    fn test_speaker_display_names() {
        assert_eq!(Speaker::User.to_string(), "You");
        assert_eq!(Speaker::Bot.to_string(), "Bot");
    }
}
