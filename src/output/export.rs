//! CSV and JSON export
//!
//! CSV carries the table projection; JSON carries the full records with
//! timestamps as RFC 3339 strings.

use crate::config::OutputConfig;
use crate::output::table::{table_rows, TABLE_HEADERS};
use crate::output::traits::{OutputError, OutputResult, RecordRenderer};
use crate::record::CommentRecord;
use chrono::{DateTime, Utc};

/// Renders the table projection as CSV with a header row
pub struct CsvRenderer {
    config: OutputConfig,
}

impl CsvRenderer {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }
}

impl RecordRenderer for CsvRenderer {
    fn render(&self, records: &[CommentRecord]) -> OutputResult<String> {
        let mut writer = csv::Writer::from_writer(vec![]);

        writer.write_record(TABLE_HEADERS)?;
        for row in table_rows(records, &self.config) {
            writer.write_record(row.cells())?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| OutputError::Format(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| OutputError::Format(e.to_string()))
    }

    fn extension(&self) -> &'static str {
        "csv"
    }
}

/// Renders full records as a pretty-printed JSON array
pub struct JsonRenderer;

impl RecordRenderer for JsonRenderer {
    fn render(&self, records: &[CommentRecord]) -> OutputResult<String> {
        Ok(serde_json::to_string_pretty(records)?)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

/// Builds the default export file name, e.g. `comments_20240309_070559.csv`
pub fn export_file_name(extension: &str, now: DateTime<Utc>) -> String {
    format!("comments_{}.{}", now.format("%Y%m%d_%H%M%S"), extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn records() -> Vec<CommentRecord> {
        vec![
            CommentRecord {
                author: "alice".to_string(),
                text: "Hello, \"world\"".to_string(),
                score: Some(5),
                created_at: Some(Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 0).unwrap()),
                depth: 0,
                id: "c1".to_string(),
                permalink: Some("https://reddit.com/r/x/c1".to_string()),
                source: None,
            },
            CommentRecord {
                author: "Unknown".to_string(),
                text: "From a blog".to_string(),
                score: None,
                created_at: None,
                depth: 1,
                id: "generic_0".to_string(),
                permalink: None,
                source: Some(".comment".to_string()),
            },
        ]
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = CsvRenderer::new(OutputConfig::default())
            .render(&records())
            .unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], "Author,Comment,Score,Date,Depth");
        assert_eq!(lines[1], "alice,\"Hello, \"\"world\"\"\",5,2024-03-09 07:05,0");
        assert_eq!(lines[2], "Unknown,From a blog,N/A,N/A,1");
    }

    #[test]
    fn test_csv_uses_table_truncation() {
        let mut recs = records();
        recs[0].text = "q".repeat(300);
        let csv = CsvRenderer::new(OutputConfig::default()).render(&recs).unwrap();
        let comment = csv.lines().nth(1).unwrap().split(',').nth(1).unwrap();
        assert_eq!(comment.chars().count(), 103);
    }

    #[test]
    fn test_json_full_records() {
        let json = JsonRenderer.render(&records()).unwrap();
        let parsed: Vec<CommentRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records());

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["created_at"], "2024-03-09T07:05:00Z");
        assert_eq!(value[1]["source"], ".comment");
        assert!(value[1]["score"].is_null());
    }

    #[test]
    fn test_export_file_name() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 59).unwrap();
        assert_eq!(export_file_name("csv", now), "comments_20240309_070559.csv");
        assert_eq!(export_file_name("json", now), "comments_20240309_070559.json");
    }

    #[test]
    fn test_extensions() {
        assert_eq!(CsvRenderer::new(OutputConfig::default()).extension(), "csv");
        assert_eq!(JsonRenderer.extension(), "json");
    }
}
