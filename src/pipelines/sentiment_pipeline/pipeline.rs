use super::aggregator::SentimentSummary;
use super::charts::{self, BarEntry, PieSlice};
use super::word_cloud::{self, CloudWord};
use crate::core::{ScoredComment, SentimentError};
use crate::pipelines::SentimentScorer;
use serde::Serialize;
use tracing::debug;

/// Everything one analysis run produces: the scored comments in input order,
/// the aggregate summary, and the inputs for the three rendering panels.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub comments: Vec<ScoredComment>,
    pub summary: SentimentSummary,
    pub word_cloud: Vec<CloudWord>,
    pub pie: Vec<PieSlice>,
    pub bars: Vec<BarEntry>,
}

impl AnalysisReport {
    /// Every comment, one per line, in original order.
    pub fn comment_listing(&self) -> String {
        let lines: Vec<&str> = self.comments.iter().map(|c| c.text.as_str()).collect();
        lines.join("\n")
    }
}

/// One-pass sentiment analysis over an ordered comment sequence.
///
/// The pipeline holds no state between runs; every call to
/// [`analyze`](Self::analyze) is independent.
pub struct SentimentPipeline<S: SentimentScorer> {
    pub(crate) scorer: S,
    pub(crate) max_cloud_words: usize,
}

impl<S: SentimentScorer> SentimentPipeline<S> {
    /// Score every comment, aggregate, and derive the chart inputs.
    ///
    /// Scorer failures and out-of-range scores abort the run with
    /// [`SentimentError::Analysis`]; nothing partial is returned.
    pub fn analyze(&self, comments: &[String]) -> Result<AnalysisReport, SentimentError> {
        let mut scored = Vec::with_capacity(comments.len());
        for text in comments {
            let compound = self
                .scorer
                .compound(text)
                .map_err(|err| SentimentError::Analysis(err.to_string()))?;
            if !(-1.0..=1.0).contains(&compound) {
                return Err(SentimentError::Analysis(format!(
                    "scorer returned {compound}, expected a compound score in [-1, 1]"
                )));
            }
            scored.push(ScoredComment::new(text.clone(), compound));
        }

        let summary = SentimentSummary::from_comments(&scored);
        debug!(
            responses = summary.total_responses,
            snippets = summary.total_snippets,
            "scored comment batch"
        );

        let word_cloud = word_cloud::cloud_words(&scored, self.max_cloud_words);
        let pie = charts::pie_slices(&scored);
        let bars = charts::bar_entries(&summary);

        Ok(AnalysisReport {
            comments: scored,
            summary,
            word_cloud,
            pie,
            bars,
        })
    }
}
