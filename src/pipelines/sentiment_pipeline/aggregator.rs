//! Aggregation of scored comments into per-label counts.

use crate::core::{ScoredComment, SentimentLabel};
use serde::Serialize;
use std::fmt::Write;

/// Per-label counts plus response and token totals for one analysis run.
///
/// All three labels are always present (zero when unobserved), and the
/// per-label counts always sum to `total_responses`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SentimentSummary {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Number of comments analyzed.
    pub total_responses: usize,
    /// Whitespace-delimited tokens across all comments.
    pub total_snippets: usize,
}

impl SentimentSummary {
    pub fn from_comments(comments: &[ScoredComment]) -> Self {
        let mut summary = Self {
            total_responses: comments.len(),
            ..Self::default()
        };
        for comment in comments {
            summary.total_snippets += comment.token_count();
            match comment.label {
                SentimentLabel::Positive => summary.positive += 1,
                SentimentLabel::Negative => summary.negative += 1,
                SentimentLabel::Neutral => summary.neutral += 1,
            }
        }
        summary
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    /// All three labels with their counts, in fixed bar-chart order.
    pub fn counts(&self) -> [(SentimentLabel, usize); 3] {
        SentimentLabel::ALL.map(|label| (label, self.count(label)))
    }

    /// Share of `label` as a percentage of all responses. Zero responses
    /// yields 0.0 rather than dividing by zero.
    pub fn share(&self, label: SentimentLabel) -> f64 {
        if self.total_responses == 0 {
            0.0
        } else {
            self.count(label) as f64 * 100.0 / self.total_responses as f64
        }
    }

    /// Observed labels only, most frequent first. Ties keep the fixed
    /// label order so the listing is deterministic.
    pub fn distribution(&self) -> Vec<(SentimentLabel, usize)> {
        let mut observed: Vec<_> = self
            .counts()
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .collect();
        observed.sort_by(|a, b| b.1.cmp(&a.1));
        observed
    }

    /// The textual summary block shown next to the charts.
    pub fn summary_text(&self) -> String {
        let mut text = format!(
            "Total Responses: {}\nTotal Snippets: {}\n\nSentiment Distribution:\n",
            self.total_responses, self.total_snippets
        );
        for (label, count) in self.distribution() {
            let _ = writeln!(text, "{:<10}{}", label.as_str(), count);
        }
        text
    }
}
