// Pipeline modules organized by functionality
pub mod sentiment_pipeline;

pub use sentiment_pipeline::*;

/// Capability supplying compound sentiment scores.
///
/// Implementations map any UTF-8 string (the empty string included) to a
/// compound polarity score in [-1.0, 1.0]. The pipeline treats the scorer as
/// a black box and rejects out-of-range scores.
pub trait SentimentScorer {
    fn compound(&self, text: &str) -> anyhow::Result<f64>;
}

// Plain score functions are scorers too, which keeps tests and one-off
// experiments free of wrapper types.
impl<F> SentimentScorer for F
where
    F: Fn(&str) -> f64,
{
    fn compound(&self, text: &str) -> anyhow::Result<f64> {
        Ok(self(text))
    }
}
