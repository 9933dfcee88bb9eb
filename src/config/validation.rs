use crate::config::types::{Config, FetcherConfig, GenericConfig, OutputConfig, RedditConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
///
/// Selector syntax is not checked here; `RuleTable::compile` rejects bad selectors.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_reddit_config(&config.reddit)?;
    validate_generic_config(&config.generic)?;
    validate_output_config(&config.output)?;
    Ok(())
}

fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "timeout_secs must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

fn validate_reddit_config(config: &RedditConfig) -> Result<(), ConfigError> {
    if config.domain_token.trim().is_empty() {
        return Err(ConfigError::Validation(
            "domain_token cannot be empty".to_string(),
        ));
    }

    let base = Url::parse(&config.permalink_base)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid permalink_base: {}", e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "permalink_base must use http or https, got '{}'",
            config.permalink_base
        )));
    }

    Ok(())
}

fn validate_generic_config(config: &GenericConfig) -> Result<(), ConfigError> {
    if config.selectors.is_empty() {
        return Err(ConfigError::Validation(
            "selectors must contain at least one selector".to_string(),
        ));
    }

    if config.max_candidates < 1 {
        return Err(ConfigError::Validation(format!(
            "max_candidates must be >= 1, got {}",
            config.max_candidates
        )));
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.max_text_length < 1 {
        return Err(ConfigError::Validation(format!(
            "max_text_length must be >= 1, got {}",
            config.max_text_length
        )));
    }

    if config.table_text_length < 1 {
        return Err(ConfigError::Validation(format!(
            "table_text_length must be >= 1, got {}",
            config.table_text_length
        )));
    }

    Ok(())
}
