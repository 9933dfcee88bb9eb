//! Comment-Sieve main entry point
//!
//! This is the command-line interface for the Comment-Sieve extractor.

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use comment_sieve::config::{load_config, Config};
use comment_sieve::extractor::NO_COMMENTS_GUIDANCE;
use comment_sieve::output::{export_file_name, print_statistics, CommentStatistics, OutputFormat};
use comment_sieve::{Diagnostic, Extractor, SourceKind};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Comment-Sieve: extract comments from Reddit threads and web pages
///
/// Reddit URLs are read through Reddit's JSON endpoint. Any other URL is
/// fetched as HTML and searched for comment-like elements.
#[derive(Parser, Debug)]
#[command(name = "comment-sieve")]
#[command(version)]
#[command(about = "Extract comments from Reddit threads and web pages", long_about = None)]
struct Cli {
    /// URL of the page to extract comments from
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Maximum comments shown in table, cards, and CSV output
    #[arg(
        short = 'n',
        long,
        default_value_t = 50,
        value_parser = clap::value_parser!(u16).range(1..=1000)
    )]
    limit: u16,

    /// Write output to this file, or to a timestamped file in this directory
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    let extractor = Extractor::new(config)?;

    match extractor.source_kind(&cli.url) {
        Ok(SourceKind::Reddit) => {
            tracing::info!("Reddit URL detected - using the Reddit JSON endpoint")
        }
        Ok(SourceKind::Generic) => tracing::info!("Generic URL - attempting HTML parsing"),
        Err(_) => {}
    }

    let extraction = extractor.extract_or_empty(&cli.url).await;

    match &extraction.diagnostic {
        // Logged by extract_or_empty
        Some(Diagnostic::Failed { .. }) => return Ok(ExitCode::FAILURE),
        Some(diagnostic @ Diagnostic::NoComments) => {
            eprintln!("{}. This could be due to:", diagnostic.message());
            for reason in NO_COMMENTS_GUIDANCE {
                eprintln!("  - {}", reason);
            }
            return Ok(ExitCode::SUCCESS);
        }
        None => {}
    }

    let records = &extraction.records;
    let shown = if cli.format.is_limited() {
        &records[..records.len().min(usize::from(cli.limit))]
    } else {
        &records[..]
    };

    let renderer = cli.format.renderer(&extractor.config().output);
    let document = renderer.render(shown)?;

    if shows_statistics(cli.format, cli.quiet) {
        print_statistics(&CommentStatistics::from_records(records));
    }

    match cli.output {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(export_file_name(renderer.extension(), Utc::now()))
            } else {
                path
            };
            std::fs::write(&path, document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !cli.quiet {
                eprintln!("✓ {} comments saved to: {}", shown.len(), path.display());
            }
        }
        None => print!("{}", document),
    }

    Ok(ExitCode::SUCCESS)
}

/// Returns true if the statistics block precedes the output
fn shows_statistics(format: OutputFormat, quiet: bool) -> bool {
    format.is_view() && !quiet
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so CSV and JSON on stdout stay machine-readable.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("comment_sieve=info,warn"),
            1 => EnvFilter::new("comment_sieve=debug,info"),
            2 => EnvFilter::new("comment_sieve=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_shown_for_views_with_output() {
        let cli = Cli::try_parse_from(["comment-sieve", "https://example.com/", "-o", "out.txt"])
            .unwrap();
        assert!(cli.output.is_some());
        assert!(shows_statistics(cli.format, cli.quiet));
        assert!(shows_statistics(OutputFormat::Cards, false));
    }

    #[test]
    fn test_statistics_hidden_for_exports_and_quiet() {
        assert!(!shows_statistics(OutputFormat::Csv, false));
        assert!(!shows_statistics(OutputFormat::Json, false));
        assert!(!shows_statistics(OutputFormat::Table, true));
    }

    #[test]
    fn test_limit_range_enforced() {
        assert!(Cli::try_parse_from(["comment-sieve", "https://example.com/", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["comment-sieve", "https://example.com/", "-n", "1001"]).is_err());

        let cli = Cli::try_parse_from(["comment-sieve", "https://example.com/"]).unwrap();
        assert_eq!(cli.limit, 50);
        assert_eq!(cli.format, OutputFormat::Table);
    }
}
