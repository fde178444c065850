use super::pipeline::SentimentPipeline;
use crate::models::LexiconScorer;
use crate::pipelines::SentimentScorer;

const DEFAULT_MAX_CLOUD_WORDS: usize = 100;

/// Builder for [`SentimentPipeline`].
pub struct SentimentPipelineBuilder<S: SentimentScorer> {
    scorer: S,
    max_cloud_words: usize,
}

impl SentimentPipelineBuilder<LexiconScorer> {
    /// Pipeline backed by the built-in lexicon scorer.
    pub fn lexicon() -> Self {
        Self::new(LexiconScorer::new())
    }
}

impl<S: SentimentScorer> SentimentPipelineBuilder<S> {
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            max_cloud_words: DEFAULT_MAX_CLOUD_WORDS,
        }
    }

    /// Swap in a different scoring capability.
    pub fn scorer<T: SentimentScorer>(self, scorer: T) -> SentimentPipelineBuilder<T> {
        SentimentPipelineBuilder {
            scorer,
            max_cloud_words: self.max_cloud_words,
        }
    }

    /// Cap the number of words handed to the cloud renderer.
    pub fn max_cloud_words(mut self, max_words: usize) -> Self {
        self.max_cloud_words = max_words;
        self
    }

    pub fn build(self) -> SentimentPipeline<S> {
        SentimentPipeline {
            scorer: self.scorer,
            max_cloud_words: self.max_cloud_words,
        }
    }
}
