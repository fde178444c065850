use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced to the user as a single notice.
///
/// Every variant aborts the current run; there are no retries and no partial
/// recovery. The display text of the variant is the notice shown to the user.
#[derive(Debug, Error)]
pub enum SentimentError {
    /// The user did not choose an input file.
    #[error("No file selected.")]
    FileSelectionCancelled,

    /// The input file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header row does not contain the required column.
    #[error("missing required column `{0}` in header row")]
    MissingColumn(String),

    /// The file could not be parsed as CSV at all (wrong encoding, no
    /// header row). Row-level parse problems are skipped instead.
    #[error("failed to load comments: {0}")]
    Load(#[from] csv::Error),

    /// The scorer or the aggregation step failed.
    #[error("analysis failed: {0}")]
    Analysis(String),
}
