//! Rule-based sentiment lexicon.
//!
//! A pre-built word valence table with negation and intensifier handling,
//! in the style of lexicon analyzers such as VADER. The compound score of a
//! text is the mean valence of its matched words, clamped to [-1, 1].

use crate::pipelines::SentimentScorer;
use std::collections::HashMap;

/// Lexicon-based implementation of [`SentimentScorer`].
pub struct LexiconScorer {
    valences: HashMap<&'static str, f64>,
    negations: &'static [&'static str],
    intensifiers: HashMap<&'static str, f64>,
}

const VALENCES: &[(&str, f64)] = &[
    // Positive review vocabulary
    ("amazing", 0.8),
    ("awesome", 0.8),
    ("beautiful", 0.6),
    ("best", 0.7),
    ("better", 0.4),
    ("comfortable", 0.5),
    ("convenient", 0.4),
    ("delighted", 0.7),
    ("durable", 0.5),
    ("easy", 0.4),
    ("excellent", 0.8),
    ("fantastic", 0.8),
    ("fast", 0.3),
    ("favorite", 0.6),
    ("fine", 0.2),
    ("glad", 0.4),
    ("good", 0.5),
    ("great", 0.6),
    ("happy", 0.6),
    ("helpful", 0.5),
    ("impressed", 0.6),
    ("impressive", 0.6),
    ("like", 0.3),
    ("love", 0.7),
    ("loved", 0.7),
    ("nice", 0.4),
    ("perfect", 0.9),
    ("pleasant", 0.5),
    ("pleased", 0.5),
    ("quality", 0.3),
    ("recommend", 0.5),
    ("recommended", 0.5),
    ("reliable", 0.5),
    ("satisfied", 0.5),
    ("smooth", 0.4),
    ("solid", 0.4),
    ("sturdy", 0.4),
    ("superb", 0.8),
    ("useful", 0.4),
    ("value", 0.3),
    ("wonderful", 0.7),
    ("works", 0.3),
    ("worth", 0.4),
    // Negative review vocabulary
    ("annoying", -0.5),
    ("awful", -0.8),
    ("bad", -0.5),
    ("break", -0.5),
    ("broke", -0.6),
    ("broken", -0.6),
    ("cheap", -0.4),
    ("crap", -0.7),
    ("defective", -0.7),
    ("disappointed", -0.6),
    ("disappointing", -0.6),
    ("dislike", -0.4),
    ("expensive", -0.3),
    ("fail", -0.6),
    ("failed", -0.6),
    ("faulty", -0.6),
    ("flimsy", -0.5),
    ("fragile", -0.4),
    ("garbage", -0.8),
    ("hate", -0.7),
    ("hated", -0.7),
    ("horrible", -0.8),
    ("junk", -0.7),
    ("lousy", -0.6),
    ("mediocre", -0.3),
    ("misleading", -0.5),
    ("poor", -0.5),
    ("problem", -0.4),
    ("refund", -0.4),
    ("regret", -0.6),
    ("return", -0.3),
    ("returned", -0.4),
    ("slow", -0.3),
    ("terrible", -0.8),
    ("ugly", -0.5),
    ("unusable", -0.7),
    ("useless", -0.7),
    ("waste", -0.6),
    ("worse", -0.5),
    ("worst", -0.8),
    ("wrong", -0.4),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nobody", "nothing", "none", "cannot",
    "cant", "can't", "dont", "don't", "doesnt", "doesn't", "didnt", "didn't",
    "wont", "won't", "wouldnt", "wouldn't", "isnt", "isn't", "wasnt", "wasn't",
    "hardly", "barely", "scarcely",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("really", 1.4),
    ("extremely", 2.0),
    ("absolutely", 1.8),
    ("totally", 1.6),
    ("so", 1.3),
    ("incredibly", 1.8),
    ("super", 1.5),
    ("quite", 1.2),
    ("highly", 1.5),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("barely", 0.4),
    ("kinda", 0.7),
    ("fairly", 0.8),
];

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            valences: VALENCES.iter().copied().collect(),
            negations: NEGATIONS,
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word)
    }

    /// Mean matched valence of the text, clamped to [-1, 1].
    ///
    /// Negations flip the sign of the next matched word; intensifiers scale
    /// it. A token that matches nothing resets both modifiers. Text with no
    /// matched words scores 0.0.
    pub fn score(&self, text: &str) -> f64 {
        let mut sum = 0.0;
        let mut matched = 0usize;
        let mut negate_next = false;
        let mut intensity = 1.0;

        for token in text.split_whitespace() {
            let word = normalize(token);
            let word = word.as_str();

            if self.is_negation(word) {
                negate_next = true;
                continue;
            }
            if let Some(mult) = self.intensifiers.get(word) {
                intensity = *mult;
                continue;
            }
            if let Some(valence) = self.valences.get(word) {
                let mut valence = *valence;
                if negate_next {
                    valence = -valence;
                    negate_next = false;
                }
                sum += (valence * intensity).clamp(-1.0, 1.0);
                intensity = 1.0;
                matched += 1;
            } else {
                negate_next = false;
                intensity = 1.0;
            }
        }

        if matched == 0 {
            0.0
        } else {
            (sum / matched as f64).clamp(-1.0, 1.0)
        }
    }
}

fn normalize(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .to_lowercase()
}

impl SentimentScorer for LexiconScorer {
    fn compound(&self, text: &str) -> anyhow::Result<f64> {
        Ok(self.score(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_and_negative_vocabulary() {
        let scorer = LexiconScorer::new();
        assert!(scorer.score("great product, works perfectly") > 0.0);
        assert!(scorer.score("terrible product, total waste") < 0.0);
    }

    #[test]
    fn unmatched_text_is_neutral() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.score("it is a product"), 0.0);
        assert_eq!(scorer.score(""), 0.0);
    }

    #[test]
    fn negation_flips_the_next_match() {
        let scorer = LexiconScorer::new();
        assert!(scorer.score("not good") < 0.0);
        assert!(scorer.score("not bad") > 0.0);
    }

    #[test]
    fn intensifier_scales_the_next_match() {
        let scorer = LexiconScorer::new();
        assert!(scorer.score("very good") > scorer.score("good"));
        assert!(scorer.score("slightly good") < scorer.score("good"));
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.score("GREAT!"), scorer.score("great"));
    }

    #[test]
    fn score_stays_in_range() {
        let scorer = LexiconScorer::new();
        let s = scorer.score("extremely perfect extremely wonderful extremely amazing");
        assert!((-1.0..=1.0).contains(&s));
    }
}
