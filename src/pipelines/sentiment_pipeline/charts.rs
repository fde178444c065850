//! Chart inputs derived from scored comments.
//!
//! These are the data the plotting surface consumes; no drawing happens
//! here. The pie chart carries only observed labels in frequency order,
//! while the bar chart always carries all three labels in fixed order.

use super::aggregator::SentimentSummary;
use crate::core::{ScoredComment, SentimentLabel};
use serde::Serialize;

/// One slice of the label-proportion pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: SentimentLabel,
    pub count: usize,
    /// Share of all responses, in percent.
    pub percent: f64,
}

impl PieSlice {
    /// Percentage formatted to one decimal place, as rendered on the chart.
    pub fn percent_text(&self) -> String {
        format!("{:.1}%", self.percent)
    }
}

/// One bar of the label-count bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarEntry {
    pub label: SentimentLabel,
    pub count: usize,
    pub color: &'static str,
}

/// Pie slices for the observed labels, most frequent first, ties broken by
/// first appearance in the input. Empty input yields no slices and performs
/// no percentage division.
pub fn pie_slices(comments: &[ScoredComment]) -> Vec<PieSlice> {
    if comments.is_empty() {
        return Vec::new();
    }

    let mut counts = [0usize; 3];
    let mut first_seen = [usize::MAX; 3];
    for (position, comment) in comments.iter().enumerate() {
        let slot = label_slot(comment.label);
        counts[slot] += 1;
        if first_seen[slot] == usize::MAX {
            first_seen[slot] = position;
        }
    }

    let total = comments.len();
    let mut slices: Vec<PieSlice> = SentimentLabel::ALL
        .into_iter()
        .filter(|label| counts[label_slot(*label)] > 0)
        .map(|label| {
            let count = counts[label_slot(label)];
            PieSlice {
                label,
                count,
                percent: count as f64 * 100.0 / total as f64,
            }
        })
        .collect();
    slices.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| first_seen[label_slot(a.label)].cmp(&first_seen[label_slot(b.label)]))
    });
    slices
}

/// Bars for all three labels in fixed order, zero counts included.
pub fn bar_entries(summary: &SentimentSummary) -> Vec<BarEntry> {
    summary
        .counts()
        .into_iter()
        .map(|(label, count)| BarEntry {
            label,
            count,
            color: label.color(),
        })
        .collect()
}

fn label_slot(label: SentimentLabel) -> usize {
    match label {
        SentimentLabel::Positive => 0,
        SentimentLabel::Negative => 1,
        SentimentLabel::Neutral => 2,
    }
}
