use serde::Serialize;

/// Sentiment class derived from a compound polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Fixed label order used by the bar chart.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// Classify a compound score. Strictly positive scores are positive,
    /// strictly negative scores are negative, exactly zero is neutral.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            SentimentLabel::Positive
        } else if score < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }

    /// Display color used by the chart renderers.
    pub fn color(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "green",
            SentimentLabel::Negative => "red",
            SentimentLabel::Neutral => "gray",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A comment together with its compound score and derived label.
///
/// Scored comments keep the order of the input sequence; duplicates are
/// allowed and nothing is mutated after scoring.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredComment {
    pub text: String,
    pub compound: f64,
    pub label: SentimentLabel,
}

impl ScoredComment {
    pub fn new(text: impl Into<String>, compound: f64) -> Self {
        let text = text.into();
        Self {
            text,
            compound,
            label: SentimentLabel::from_score(compound),
        }
    }

    /// Number of whitespace-delimited tokens in the comment. Consecutive
    /// separators collapse, so `"a b  c"` counts as 3.
    pub fn token_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
