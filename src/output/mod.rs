//! Output module for rendering and exporting comment records
//!
//! This module handles:
//! - The table projection and its text rendering
//! - Indented card rendering
//! - CSV and JSON export
//! - Summary statistics

mod export;
pub mod stats;
mod table;
mod traits;

pub use export::{export_file_name, CsvRenderer, JsonRenderer};
pub use stats::{format_statistics, print_statistics, CommentStatistics};
pub use table::{
    format_date, render_table, table_rows, CardsRenderer, TableRenderer, TableRow,
    ABSENT_MARKER, DATE_FORMAT, TABLE_HEADERS,
};
pub use traits::{OutputError, OutputResult, RecordRenderer};

use crate::config::OutputConfig;

/// Output formats offered by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// Indented comment cards
    Cards,
    /// CSV of the table projection
    Csv,
    /// JSON array of full records
    Json,
}

impl OutputFormat {
    /// Returns the renderer for this format
    pub fn renderer(self, config: &OutputConfig) -> Box<dyn RecordRenderer> {
        match self {
            Self::Table => Box::new(TableRenderer::new(config.clone())),
            Self::Cards => Box::new(CardsRenderer),
            Self::Csv => Box::new(CsvRenderer::new(config.clone())),
            Self::Json => Box::new(JsonRenderer),
        }
    }

    /// Returns true for human-readable views that get a statistics header
    pub fn is_view(self) -> bool {
        matches!(self, Self::Table | Self::Cards)
    }

    /// Returns true if the display limit applies to this format
    pub fn is_limited(self) -> bool {
        !matches!(self, Self::Json)
    }
}
