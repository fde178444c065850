pub mod core;
mod loaders;
pub mod models;
pub mod pipelines;

// Re-export core types
pub use crate::core::{ScoredComment, SentimentError, SentimentLabel};

// Re-export the loader and the default scorer for easier access
pub use crate::loaders::load_comments;
pub use crate::models::LexiconScorer;

pub use crate::pipelines::{
    AnalysisReport,
    SentimentPipeline,
    SentimentPipelineBuilder,
    SentimentScorer,
};
