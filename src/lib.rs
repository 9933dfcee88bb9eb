//! Comment-Sieve: comment extraction for discussion pages
//!
//! This crate fetches a Reddit thread or an arbitrary web page and turns its
//! comments into flat [`CommentRecord`]s, ready for table display or CSV/JSON
//! export.

pub mod config;
pub mod extractor;
pub mod output;
pub mod record;
pub mod url;

use thiserror::Error;

/// Main error type for extraction operations
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("Malformed payload from {url}: {message}")]
    MalformedPayload { url: String, message: String },

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of an [`ExtractError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Non-success HTTP status or transport failure
    Network,
    /// Response body did not have the expected shape
    MalformedPayload,
    /// The input URL could not be used
    InvalidUrl,
    /// Invalid configuration or HTTP client setup
    Config,
    /// Rendering or writing results failed
    Output,
}

impl ExtractError {
    /// Returns the coarse kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::HttpStatus { .. } | Self::Transport { .. } => ErrorKind::Network,
            Self::MalformedPayload { .. } => ErrorKind::MalformedPayload,
            Self::Url(_) => ErrorKind::InvalidUrl,
            Self::Config(_) | Self::Client(_) => ErrorKind::Config,
            Self::Output(_) | Self::Io(_) => ErrorKind::Output,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use extractor::{Diagnostic, Extraction, Extractor};
pub use record::CommentRecord;
pub use crate::url::{classify_url, to_json_endpoint, SourceKind};
