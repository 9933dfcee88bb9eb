//! Output renderer trait and error types
//!
//! Every output format implements [`RecordRenderer`], so the CLI can pick a
//! format at runtime and write the result wherever it likes.

use crate::record::CommentRecord;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to format output: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Renders a sequence of records into a text document
pub trait RecordRenderer {
    /// Renders the records
    fn render(&self, records: &[CommentRecord]) -> OutputResult<String>;

    /// File extension for exported documents, without the dot
    fn extension(&self) -> &'static str;
}
