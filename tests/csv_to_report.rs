// End-to-end runs from a CSV file to an analysis report.

use sentilens::{load_comments, SentimentError, SentimentPipelineBuilder};
use std::io::Write;

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn csv_file_to_report() -> anyhow::Result<()> {
    let file = write_csv(
        "Id,Comment\n\
         1,\"I love this, great product\"\n\
         2,\"terrible quality, broke in a day\"\n\
         3,\"it is a product\"\n",
    );

    let comments = load_comments(file.path())?;
    let report = SentimentPipelineBuilder::lexicon().build().analyze(&comments)?;

    assert_eq!(report.summary.total_responses, 3);
    assert_eq!(report.summary.positive, 1);
    assert_eq!(report.summary.negative, 1);
    assert_eq!(report.summary.neutral, 1);
    assert_eq!(
        report.comment_listing(),
        "I love this, great product\nterrible quality, broke in a day\nit is a product"
    );
    Ok(())
}

#[test]
fn zero_row_file_gives_all_zero_summary() -> anyhow::Result<()> {
    let file = write_csv("Comment\n");
    let comments = load_comments(file.path())?;
    let report = SentimentPipelineBuilder::lexicon().build().analyze(&comments)?;

    assert_eq!(report.summary.total_responses, 0);
    assert_eq!(report.summary.total_snippets, 0);
    assert!(report.pie.is_empty());
    Ok(())
}

#[test]
fn missing_comment_column_names_the_column() {
    let file = write_csv("Id,Review\n1,nice\n");
    let err = load_comments(file.path()).unwrap_err();
    assert!(matches!(err, SentimentError::MissingColumn(_)));
    assert!(err.to_string().contains("Comment"));
}

#[test]
fn rows_without_comments_are_not_analyzed() -> anyhow::Result<()> {
    let file = write_csv("Comment\n\"good product\"\n\"\"\n\"bad product\"\n");
    let comments = load_comments(file.path())?;
    let report = SentimentPipelineBuilder::lexicon().build().analyze(&comments)?;
    assert_eq!(report.summary.total_responses, 2);
    Ok(())
}

#[test]
fn no_file_selected_is_a_single_notice() {
    // The CLI maps an absent file argument to this variant before any
    // loading or scoring happens.
    let err = SentimentError::FileSelectionCancelled;
    assert_eq!(err.to_string(), "No file selected.");
}
