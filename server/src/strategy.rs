//! Coping strategy advice keyed by sentiment label.

use crate::sentiment::SentimentLabel;

/// Suggestion shown for a label name that is not a known sentiment
pub const FALLBACK_STRATEGY: &str = "Keep going, you're doing great!";

/// Coping suggestion for a sentiment bucket.
pub fn advise(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::VeryPositive => {
            "Keep up the positive vibes! Consider sharing your good mood with others."
        }
        SentimentLabel::Positive => {
            "It's great to see you're feeling positive. Keep doing what you're doing!"
        }
        SentimentLabel::Neutral => {
            "Feeling neutral is okay. Consider engaging in activities you enjoy."
        }
        SentimentLabel::Negative => {
            "It seems you're feeling down. Try to take a break and do something relaxing."
        }
        SentimentLabel::VeryNegative => {
            "I'm sorry to hear that you're feeling very negative. Consider talking to a friend or seeking professional help."
        }
    }
}

/// Looks a strategy up by label name, e.g. "Very Positive".
pub fn advise_by_name(name: &str) -> &'static str {
    name.parse::<SentimentLabel>()
        .map(advise)
        .unwrap_or(FALLBACK_STRATEGY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::classify;

    #[test]
    fn test_each_label_has_its_strategy() {
        assert_eq!(
            advise(SentimentLabel::VeryPositive),
            "Keep up the positive vibes! Consider sharing your good mood with others."
        );
        assert_eq!(
            advise(SentimentLabel::Positive),
            "It's great to see you're feeling positive. Keep doing what you're doing!"
        );
        assert_eq!(
            advise(SentimentLabel::Neutral),
            "Feeling neutral is okay. Consider engaging in activities you enjoy."
        );
        assert_eq!(
            advise(SentimentLabel::Negative),
            "It seems you're feeling down. Try to take a break and do something relaxing."
        );
        assert_eq!(
            advise(SentimentLabel::VeryNegative),
            "I'm sorry to hear that you're feeling very negative. Consider talking to a friend or seeking professional help."
        );
    }

    #[test]
    fn test_lookup_by_name() {
        for label in SentimentLabel::ALL {
            assert_eq!(advise_by_name(label.as_str()), advise(label));
        }
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(advise_by_name("Ecstatic"), FALLBACK_STRATEGY);
        assert_eq!(advise_by_name(""), FALLBACK_STRATEGY);
        assert_eq!(advise_by_name("very positive"), FALLBACK_STRATEGY);
    }

    #[test]
    fn test_text_to_strategy() {
        assert_eq!(
            advise(classify("I am so happy today!").label),
            advise(SentimentLabel::VeryPositive)
        );
        assert_eq!(
            advise(classify("").label),
            "Feeling neutral is okay. Consider engaging in activities you enjoy."
        );
    }
}
