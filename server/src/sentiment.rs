//! Five-bucket sentiment classification over a polarity score.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::lexicon::{LexiconScorer, PolarityScorer};

/// Sentiment bucket for a user message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    #[serde(rename = "Very Positive")]
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    #[serde(rename = "Very Negative")]
    VeryNegative,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 5] = [
        SentimentLabel::VeryPositive,
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
        SentimentLabel::VeryNegative,
    ];

    /// Buckets a polarity score. First match wins; the ranges cover [-1, 1].
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.5 {
            SentimentLabel::VeryPositive
        } else if polarity > 0.1 && polarity <= 0.5 {
            SentimentLabel::Positive
        } else if (-0.1..=0.1).contains(&polarity) {
            SentimentLabel::Neutral
        } else if polarity > -0.5 && polarity < -0.1 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::VeryNegative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::VeryPositive => "Very Positive",
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::VeryNegative => "Very Negative",
        }
    }
}

impl Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no sentiment label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sentiment label: {0}")]
pub struct UnknownLabel(pub String);

impl FromStr for SentimentLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SentimentLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Label plus the polarity it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub polarity: f64,
}

impl Sentiment {
    pub fn from_polarity(polarity: f64) -> Self {
        Self {
            label: SentimentLabel::from_polarity(polarity),
            polarity,
        }
    }
}

/// Classifies text with the given polarity scorer. Never fails.
pub fn classify_with(scorer: &dyn PolarityScorer, text: &str) -> Sentiment {
    Sentiment::from_polarity(scorer.polarity(text))
}

/// Classifies text with the built-in lexicon scorer.
pub fn classify(text: &str) -> Sentiment {
    classify_with(&LexiconScorer, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedScorer(f64);

    impl PolarityScorer for FixedScorer {
        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_threshold_boundaries() {
        let cases = [
            (0.5, SentimentLabel::Positive),
            (0.51, SentimentLabel::VeryPositive),
            (0.1, SentimentLabel::Neutral),
            (0.11, SentimentLabel::Positive),
            (-0.1, SentimentLabel::Neutral),
            (-0.11, SentimentLabel::Negative),
            (-0.5, SentimentLabel::VeryNegative),
            (-0.49, SentimentLabel::Negative),
        ];

        for (polarity, expected) in cases {
            assert_eq!(
                SentimentLabel::from_polarity(polarity),
                expected,
                "polarity {}",
                polarity
            );
        }
    }

    #[test]
    fn test_range_extremes() {
        assert_eq!(SentimentLabel::from_polarity(1.0), SentimentLabel::VeryPositive);
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-1.0), SentimentLabel::VeryNegative);
    }

    #[test]
    fn test_classify_with_keeps_score() {
        let sentiment = classify_with(&FixedScorer(-0.3), "anything");
        assert_eq!(sentiment.label, SentimentLabel::Negative);
        assert_eq!(sentiment.polarity, -0.3);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let sentiment = classify("");
        assert_eq!(sentiment.polarity, 0.0);
        assert_eq!(sentiment.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_happy_message_is_very_positive() {
        let sentiment = classify("I am so happy today!");
        assert!(sentiment.polarity > 0.5);
        assert_eq!(sentiment.label, SentimentLabel::VeryPositive);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let text = "Work was awful but dinner with friends was really nice";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn test_label_round_trips_through_display() {
        for label in SentimentLabel::ALL {
            assert_eq!(label.to_string().parse::<SentimentLabel>(), Ok(label));
        }
        assert_eq!(
            "Ecstatic".parse::<SentimentLabel>(),
            Err(UnknownLabel("Ecstatic".to_string()))
        );
    }

    #[test]
    fn test_label_serializes_as_display_name() {
        let json = serde_json::to_string(&SentimentLabel::VeryNegative).unwrap();
        assert_eq!(json, "\"Very Negative\"");
    }
}
