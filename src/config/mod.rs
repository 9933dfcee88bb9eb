//! Configuration module for Comment-Sieve
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; missing values take the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use comment_sieve::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("comment-sieve.toml")).unwrap();
//! println!("Selectors: {:?}", config.generic.selectors);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetcherConfig, GenericConfig, OutputConfig, RedditConfig, DEFAULT_SELECTORS,
    DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
