//! Per-word frequency and sentiment attribution for the word cloud.
//!
//! The cloud renderer needs, for each word, how often it occurs and what
//! color to paint it. A word's sentiment is the mean compound score of the
//! comments it appears in, so a word seen only in positive comments renders
//! green even when the word itself carries no polarity.

use crate::core::{ScoredComment, SentimentLabel};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// One word of the cloud with its frequency and attributed sentiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudWord {
    pub word: String,
    /// Occurrences across all comments.
    pub count: usize,
    /// Mean compound score of the comments containing the word.
    pub score: f64,
    pub label: SentimentLabel,
}

impl CloudWord {
    pub fn color(&self) -> &'static str {
        self.label.color()
    }
}

/// Build the cloud input: words by descending frequency (ties alphabetical),
/// capped at `max_words`.
pub fn cloud_words(comments: &[ScoredComment], max_words: usize) -> Vec<CloudWord> {
    struct Tally {
        count: usize,
        score_sum: f64,
        comment_hits: usize,
    }

    let mut tallies: HashMap<String, Tally> = HashMap::new();
    for comment in comments {
        let mut seen = HashSet::new();
        for token in comment.text.split_whitespace() {
            let Some(word) = normalize(token) else {
                continue;
            };
            let tally = tallies.entry(word.clone()).or_insert(Tally {
                count: 0,
                score_sum: 0.0,
                comment_hits: 0,
            });
            tally.count += 1;
            // The comment's score contributes once per containing comment,
            // not once per occurrence.
            if seen.insert(word) {
                tally.score_sum += comment.compound;
                tally.comment_hits += 1;
            }
        }
    }

    let mut words: Vec<CloudWord> = tallies
        .into_iter()
        .map(|(word, tally)| {
            let score = tally.score_sum / tally.comment_hits as f64;
            CloudWord {
                word,
                count: tally.count,
                score,
                label: SentimentLabel::from_score(score),
            }
        })
        .collect();
    words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    words.truncate(max_words);
    words
}

/// Lowercase and strip surrounding punctuation; `None` if nothing remains.
fn normalize(token: &str) -> Option<String> {
    let word = token
        .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .to_lowercase();
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(items: &[(&str, f64)]) -> Vec<ScoredComment> {
        items
            .iter()
            .map(|(text, score)| ScoredComment::new(*text, *score))
            .collect()
    }

    fn find<'a>(words: &'a [CloudWord], word: &str) -> &'a CloudWord {
        words.iter().find(|w| w.word == word).unwrap()
    }

    #[test]
    fn frequency_counts_every_occurrence() {
        let words = cloud_words(&scored(&[("spam spam eggs", 0.5)]), 100);
        assert_eq!(find(&words, "spam").count, 2);
        assert_eq!(find(&words, "eggs").count, 1);
    }

    #[test]
    fn sentiment_is_mean_over_containing_comments() {
        let comments = scored(&[("product great", 0.8), ("product terrible", -0.4)]);
        let words = cloud_words(&comments, 100);

        let product = find(&words, "product");
        assert!((product.score - 0.2).abs() < 1e-9);
        assert_eq!(product.label, SentimentLabel::Positive);

        assert_eq!(find(&words, "great").label, SentimentLabel::Positive);
        assert_eq!(find(&words, "terrible").label, SentimentLabel::Negative);
    }

    #[test]
    fn repeats_within_one_comment_count_the_score_once() {
        let comments = scored(&[("wow wow", 0.6), ("wow", -0.6)]);
        let words = cloud_words(&comments, 100);
        let wow = find(&words, "wow");
        assert_eq!(wow.count, 3);
        assert_eq!(wow.score, 0.0);
        assert_eq!(wow.label, SentimentLabel::Neutral);
    }

    #[test]
    fn sorted_by_count_then_alphabetically() {
        let words = cloud_words(&scored(&[("b b a c", 0.0)]), 100);
        let order: Vec<_> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn cap_limits_the_cloud() {
        let words = cloud_words(&scored(&[("one two three four", 0.0)]), 2);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn punctuation_only_tokens_are_dropped() {
        let words = cloud_words(&scored(&[("good -- product!", 0.5)]), 100);
        let listed: Vec<_> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(listed, vec!["good", "product"]);
    }

    #[test]
    fn empty_input_yields_empty_cloud() {
        assert!(cloud_words(&[], 100).is_empty());
    }
}
