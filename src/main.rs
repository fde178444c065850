//! Product comment sentiment analysis tool.
//!
//! Thin presentation layer over the sentiment pipeline: pick a CSV file,
//! run one analysis pass, print the comment listing, the summary block,
//! and text renderings of the word cloud, pie chart, and bar chart.

use anyhow::Result;
use clap::Parser;
use sentilens::{load_comments, AnalysisReport, SentimentError, SentimentPipelineBuilder};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "sentilens")]
#[command(about = "Product Comment Sentiment Analysis Tool")]
struct Cli {
    /// CSV file with a `Comment` column
    file: Option<PathBuf>,

    /// Print the full report as JSON instead of text panels
    #[arg(long)]
    json: bool,

    /// Maximum number of words in the word cloud listing
    #[arg(long, default_value = "100")]
    max_cloud_words: usize,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Error: logging already initialized");
    }

    // Every failure surfaces as a single notice, mirroring a modal error box.
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let path = cli
        .file
        .as_deref()
        .ok_or(SentimentError::FileSelectionCancelled)?;

    let comments = load_comments(path)?;
    info!(count = comments.len(), "loaded comments");

    let pipeline = SentimentPipelineBuilder::lexicon()
        .max_cloud_words(cli.max_cloud_words)
        .build();
    let report = pipeline.analyze(&comments)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(path, &report);
    }
    Ok(())
}

fn print_report(path: &Path, report: &AnalysisReport) {
    println!("Selected file: {}", path.display());

    println!("\nComments:");
    println!("{}", report.comment_listing());

    println!("\n{}", report.summary.summary_text());

    println!("Word Cloud with Sentiment Coloring:");
    for word in &report.word_cloud {
        println!("  {:<20} x{:<5} {}", word.word, word.count, word.color());
    }

    println!("\nSentiment Distribution:");
    for slice in &report.pie {
        println!("  {:<10} {:>6}  ({})", slice.label, slice.percent_text(), slice.count);
    }

    println!("\nSentiment Counts:");
    for bar in &report.bars {
        println!(
            "  {:<10} {:<6} {} {}",
            bar.label,
            bar.color,
            "#".repeat(bar.count.min(60)),
            bar.count
        );
    }
}
