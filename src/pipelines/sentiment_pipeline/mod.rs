//! Sentiment pipeline for product comment analysis.
//!
//! Scores an ordered sequence of comments through an injected
//! [`SentimentScorer`](crate::pipelines::SentimentScorer), aggregates the
//! per-label counts, and derives the inputs consumed by the rendering
//! collaborators: a sentiment-colored word cloud, a pie chart of label
//! proportions, and a bar chart of label counts.
//!
//! ## Main Types
//!
//! - [`SentimentPipeline`] - High-level interface for one analysis run
//! - [`SentimentPipelineBuilder`] - Builder pattern for pipeline configuration
//! - [`AnalysisReport`] - Scored comments, summary, and chart inputs
//! - [`SentimentSummary`] - Per-label counts and token totals
//!
//! ## Usage Example
//!
//! ```rust
//! use sentilens::SentimentPipelineBuilder;
//!
//! # fn main() -> anyhow::Result<()> {
//! let comments = vec![
//!     "great product".to_string(),
//!     "terrible product".to_string(),
//! ];
//!
//! let pipeline = SentimentPipelineBuilder::lexicon().build();
//! let report = pipeline.analyze(&comments)?;
//! println!("{}", report.summary.summary_text());
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod builder;
pub mod charts;
pub mod pipeline;
pub mod word_cloud;

pub use aggregator::SentimentSummary;
pub use builder::SentimentPipelineBuilder;
pub use charts::{BarEntry, PieSlice};
pub use pipeline::{AnalysisReport, SentimentPipeline};
pub use word_cloud::CloudWord;
