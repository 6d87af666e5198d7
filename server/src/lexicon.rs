//! Lexicon-based polarity scoring.
//!
//! Words carry a fixed polarity in [-1, 1]. An intensifier scales the next
//! sentiment word, a negator flips and halves it. The text's polarity is the
//! mean over every sentiment word found, clamped to [-1, 1].

/// Maps free text to a polarity score in [-1.0, 1.0].
///
/// Implementations must be deterministic: the same text always scores the same.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

/// Default scorer backed by a built-in English word list
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

/// Applied to a sentiment word preceded by a negator
const NEGATION_FACTOR: f64 = -0.5;

/// Neutral words a pending modifier survives before it is dropped
const MODIFIER_WINDOW: usize = 2;

const CLAUSE_BREAKS: &[char] = &['.', ',', ';', ':', '!', '?', '\n'];

// ── Word lists ─────────────────────────────────────────────

const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("happy", 0.8),
    ("happier", 0.8),
    ("glad", 0.5),
    ("great", 0.8),
    ("good", 0.7),
    ("nice", 0.6),
    ("wonderful", 1.0),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("fantastic", 0.4),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("fine", 0.4),
    ("okay", 0.5),
    ("ok", 0.5),
    ("calm", 0.3),
    ("relaxed", 0.3),
    ("fun", 0.3),
    ("excited", 0.375),
    ("exciting", 0.3),
    ("grateful", 0.4),
    ("thankful", 0.4),
    ("hopeful", 0.5),
    ("proud", 0.8),
    ("joy", 0.8),
    ("cheerful", 0.5),
    ("peaceful", 0.25),
    ("perfect", 1.0),
    ("pleased", 0.5),
    ("confident", 0.5),
    ("delighted", 0.7),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("positive", 0.23),
    ("safe", 0.5),
    ("strong", 0.43),
    ("blessed", 0.5),
    ("brilliant", 0.9),
    ("cool", 0.35),
    ("interesting", 0.5),
    ("thanks", 0.2),
    // Negative
    ("sad", -0.5),
    ("unhappy", -0.6),
    ("bad", -0.7),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("worst", -1.0),
    ("worse", -0.4),
    ("angry", -0.5),
    ("mad", -0.625),
    ("upset", -0.5),
    ("anxious", -0.25),
    ("worried", -0.25),
    ("stressed", -0.3),
    ("depressed", -0.6),
    ("lonely", -0.5),
    ("tired", -0.4),
    ("exhausted", -0.4),
    ("miserable", -1.0),
    ("hopeless", -0.5),
    ("hate", -0.8),
    ("hated", -0.9),
    ("scared", -0.5),
    ("afraid", -0.6),
    ("nervous", -0.3),
    ("hurt", -0.5),
    ("painful", -0.7),
    ("broken", -0.4),
    ("sick", -0.71),
    ("boring", -1.0),
    ("bored", -0.5),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("frustrated", -0.7),
    ("annoyed", -0.4),
    ("annoying", -0.8),
    ("stupid", -0.8),
    ("useless", -0.5),
    ("worthless", -0.8),
    ("difficult", -0.5),
    ("overwhelmed", -0.5),
    ("guilty", -0.5),
    ("ashamed", -0.5),
    ("pathetic", -1.0),
    ("wrong", -0.5),
    ("failed", -0.5),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("so", 1.3),
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("totally", 1.3),
    ("absolutely", 1.4),
    ("too", 1.2),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("rather", 0.8),
    ("somewhat", 0.7),
    ("kinda", 0.7),
    ("slightly", 0.5),
];

const NEGATORS: &[&str] = &["not", "no", "never", "nothing", "nor", "cannot", "hardly"];

fn lookup(table: &[(&str, f64)], word: &str) -> Option<f64> {
    table
        .iter()
        .find(|(entry, _)| *entry == word)
        .map(|(_, value)| *value)
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

/// Lowercased words of one clause. Inner apostrophes stay so contractions
/// survive; ones used as quote marks are stripped.
fn words(clause: &str) -> impl Iterator<Item = String> + '_ {
    clause
        .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .map(|w| w.to_lowercase().replace('\u{2019}', "'"))
        .map(|w| w.trim_matches('\'').to_string())
        .filter(|w| !w.is_empty())
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let mut scores = Vec::new();

        for clause in text.split(CLAUSE_BREAKS) {
            let mut modifier = 1.0;
            let mut pending = false;
            let mut gap = 0;

            for word in words(clause) {
                if is_negator(&word) {
                    modifier *= NEGATION_FACTOR;
                    pending = true;
                    gap = 0;
                } else if let Some(intensity) = lookup(INTENSIFIERS, &word) {
                    modifier *= intensity;
                    pending = true;
                    gap = 0;
                } else if let Some(polarity) = lookup(LEXICON, &word) {
                    scores.push((polarity * modifier).clamp(-1.0, 1.0));
                    modifier = 1.0;
                    pending = false;
                } else if pending {
                    gap += 1;
                    if gap > MODIFIER_WINDOW {
                        modifier = 1.0;
                        pending = false;
                    }
                }
            }
        }

        if scores.is_empty() {
            return 0.0;
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        LexiconScorer.polarity(text)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_empty_and_neutral_text() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("   "), 0.0);
        assert_eq!(score("I went to the store on Tuesday."), 0.0);
    }

    #[test]
    fn test_intensifier_clamps_to_one() {
        assert_close(score("I am so happy today!"), 1.0);
    }

    #[test]
    fn test_plain_words() {
        assert_close(score("I feel sad"), -0.5);
        assert_close(score("That was GOOD"), 0.7);
    }

    #[test]
    fn test_single_quoted_words() {
        assert_close(score("I feel 'sad'"), -0.5);
        assert_close(score("I feel \u{2018}sad\u{2019}"), -0.5);
        assert_close(score("'not' 'good'"), -0.35);
    }

    #[test]
    fn test_negation() {
        assert_close(score("This is not good"), -0.35);
        assert_close(score("I don't feel happy"), -0.4);
        assert_close(score("I don\u{2019}t feel happy"), -0.4);
    }

    #[test]
    fn test_modifier_expires_after_window() {
        // "not" is three neutral words away from "happy"
        assert_close(score("not in the mood happy"), 0.8);
        // two neutral words still carry the negation
        assert_close(score("not at all happy"), -0.4);
    }

    #[test]
    fn test_modifier_stops_at_clause_break() {
        assert_close(score("not really, happy"), 0.8);
    }

    #[test]
    fn test_mean_over_sentiment_words() {
        assert_close(score("I feel terrible and lonely"), -0.75);
        assert_close(score("Work was awful. Dinner was great."), -0.1);
    }

    #[test]
    fn test_score_stays_in_range() {
        let p = score("extremely incredibly absolutely terrible horrible awful");
        assert!((-1.0..=1.0).contains(&p));
        assert_close(p, -1.0);
    }
}
