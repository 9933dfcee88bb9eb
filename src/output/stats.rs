//! Summary statistics over extracted comments

use crate::record::CommentRecord;
use std::collections::HashSet;

/// Summary of one extraction
#[derive(Debug, Clone, PartialEq)]
pub struct CommentStatistics {
    /// Number of records
    pub total_comments: usize,

    /// Distinct authors, not counting the `Unknown` sentinel
    pub unique_authors: usize,

    /// Mean text length in characters
    pub average_length: f64,

    /// Mean score over records that have one
    pub average_score: Option<f64>,
}

impl CommentStatistics {
    /// Computes statistics for a set of records
    pub fn from_records(records: &[CommentRecord]) -> Self {
        let total_comments = records.len();

        let unique_authors = records
            .iter()
            .filter(|r| r.has_known_author())
            .map(|r| r.author.as_str())
            .collect::<HashSet<_>>()
            .len();

        let average_length = if total_comments > 0 {
            records.iter().map(|r| r.text_len()).sum::<usize>() as f64 / total_comments as f64
        } else {
            0.0
        };

        let scores: Vec<i64> = records.iter().filter_map(|r| r.score).collect();
        let average_score = if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<i64>() as f64 / scores.len() as f64)
        };

        Self {
            total_comments,
            unique_authors,
            average_length,
            average_score,
        }
    }
}

/// Formats statistics as a short report
pub fn format_statistics(stats: &CommentStatistics) -> String {
    let mut out = String::new();

    out.push_str("=== Extraction Results ===\n\n");
    out.push_str(&format!("  Total comments: {}\n", stats.total_comments));
    out.push_str(&format!("  Unique authors: {}\n", stats.unique_authors));
    out.push_str(&format!("  Avg length: {:.0} chars\n", stats.average_length));
    match stats.average_score {
        Some(score) => out.push_str(&format!("  Avg score: {:.1}\n", score)),
        None => out.push_str("  Avg score: N/A\n"),
    }

    out
}

/// Prints statistics to stdout
pub fn print_statistics(stats: &CommentStatistics) {
    println!("{}", format_statistics(stats));
}
