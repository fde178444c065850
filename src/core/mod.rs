pub mod comment;
pub mod error;

pub use comment::{ScoredComment, SentimentLabel};
pub use error::SentimentError;
