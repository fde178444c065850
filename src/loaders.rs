//! CSV loading for comment files.
//!
//! The input is a UTF-8 CSV file with a header row that must contain a
//! column named exactly `Comment`. Other columns are ignored.

use crate::core::SentimentError;
use std::fs::File;
use std::path::Path;
use tracing::warn;

const COMMENT_COLUMN: &str = "Comment";

/// Load every non-empty `Comment` value from a CSV file, in file order.
///
/// A missing `Comment` column is fatal. Rows whose `Comment` field is
/// missing or empty are excluded from the result, and malformed rows are
/// skipped rather than aborting the whole load.
pub fn load_comments<P: AsRef<Path>>(path: P) -> Result<Vec<String>, SentimentError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SentimentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let column = headers
        .iter()
        .position(|h| h == COMMENT_COLUMN)
        .ok_or_else(|| SentimentError::MissingColumn(COMMENT_COLUMN.to_string()))?;

    let mut comments = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warn!(row, %err, "skipping malformed row");
                continue;
            }
        };
        match record.get(column) {
            Some(value) if !value.is_empty() => comments.push(value.to_string()),
            // Short rows and empty fields count as absent, not as "".
            _ => warn!(row, "skipping row with no comment value"),
        }
    }

    Ok(comments)
}
