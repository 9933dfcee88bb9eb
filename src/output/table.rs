//! Table and card views of comment records
//!
//! The table projection shortens each comment to `table-text-length`
//! characters and replaces absent values with `N/A`.

use crate::config::OutputConfig;
use crate::output::traits::{OutputResult, RecordRenderer};
use crate::record::{truncate_with_ellipsis, CommentRecord};
use chrono::{DateTime, Utc};

/// Marker shown for absent scores and dates
pub const ABSENT_MARKER: &str = "N/A";

/// Format of the Date column
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Column headers of the table projection
pub const TABLE_HEADERS: [&str; 5] = ["Author", "Comment", "Score", "Date", "Depth"];

/// One row of the table projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub author: String,
    pub comment: String,
    pub score: String,
    pub date: String,
    pub depth: String,
}

impl TableRow {
    /// Projects a record into a table row
    pub fn from_record(record: &CommentRecord, config: &OutputConfig) -> Self {
        Self {
            author: record.author.clone(),
            comment: truncate_with_ellipsis(
                &record.text,
                config.table_text_length,
                &config.ellipsis,
            ),
            score: record
                .score
                .map_or_else(|| ABSENT_MARKER.to_string(), |s| s.to_string()),
            date: record
                .created_at
                .as_ref()
                .map_or_else(|| ABSENT_MARKER.to_string(), format_date),
            depth: record.depth.to_string(),
        }
    }

    /// Returns the cells in header order
    pub fn cells(&self) -> [&str; 5] {
        [
            self.author.as_str(),
            self.comment.as_str(),
            self.score.as_str(),
            self.date.as_str(),
            self.depth.as_str(),
        ]
    }
}

/// Projects every record into a table row
pub fn table_rows(records: &[CommentRecord], config: &OutputConfig) -> Vec<TableRow> {
    records
        .iter()
        .map(|record| TableRow::from_record(record, config))
        .collect()
}

/// Formats a timestamp for the Date column
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Renders records as an aligned plain-text table
pub struct TableRenderer {
    config: OutputConfig,
}

impl TableRenderer {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }
}

impl RecordRenderer for TableRenderer {
    fn render(&self, records: &[CommentRecord]) -> OutputResult<String> {
        let rows = table_rows(records, &self.config);
        Ok(render_table(&rows))
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

/// Lays out rows under the table headers with padded columns
pub fn render_table(rows: &[TableRow]) -> String {
    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &TABLE_HEADERS, &widths);

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&separator.join("-+-"));
    out.push('\n');

    for row in rows {
        push_line(&mut out, &row.cells(), &widths);
    }

    out
}

fn push_line(out: &mut String, cells: &[&str; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

/// Renders records as indented cards, one block per comment
pub struct CardsRenderer;

impl RecordRenderer for CardsRenderer {
    fn render(&self, records: &[CommentRecord]) -> OutputResult<String> {
        let mut out = String::new();

        for record in records {
            let indent = "  ".repeat(record.depth);
            let date = record
                .created_at
                .as_ref()
                .map_or_else(|| "Unknown date".to_string(), format_date);

            out.push_str(&format!("{}{}\n", indent, record.author));
            out.push_str(&format!("{}{}\n", indent, date));
            for line in record.text.lines() {
                out.push_str(&format!("{}{}\n", indent, line));
            }
            if let Some(score) = record.score {
                out.push_str(&format!("{}Score: {}\n", indent, score));
            }
            out.push('\n');
        }

        Ok(out)
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}
