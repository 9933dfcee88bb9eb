//! Selector rule table for the generic extractor
//!
//! Rules are evaluated in priority order and the first rule that yields a
//! surviving comment wins. The table is plain data, so new heuristics are
//! added by configuration rather than by new control flow.

use crate::ConfigError;
use scraper::Selector;

/// One compiled selector and its position in the table
#[derive(Debug, Clone)]
pub struct SelectorRule {
    /// The selector as written in configuration
    pub name: String,

    /// Zero-based priority; lower runs first
    pub priority: usize,

    selector: Selector,
}

impl SelectorRule {
    /// Returns the compiled selector
    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

/// Rules in evaluation order
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<SelectorRule>,
}

impl RuleTable {
    /// Compiles a list of selector strings, keeping their order as priority
    ///
    /// # Returns
    ///
    /// * `Ok(RuleTable)` - All selectors compiled
    /// * `Err(ConfigError::InvalidSelector)` - The first selector that failed to parse
    pub fn compile<S: AsRef<str>>(selectors: &[S]) -> Result<Self, ConfigError> {
        let rules = selectors
            .iter()
            .enumerate()
            .map(|(priority, raw)| {
                let raw = raw.as_ref();
                let selector = Selector::parse(raw)
                    .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {}", raw, e)))?;
                Ok(SelectorRule {
                    name: raw.to_string(),
                    priority,
                    selector,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self { rules })
    }

    /// Iterates rules from highest to lowest priority
    pub fn iter(&self) -> impl Iterator<Item = &SelectorRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
