//! Configuration for the query service.

use serde::{Deserialize, Serialize};

use super::engines::SearchEngine;
use super::error::{QueryError, QueryResult};
use super::variations::MAX_VARIATIONS;

/// Configuration for the query service.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Engine used when a request does not name one.
    pub default_engine: SearchEngine,
    /// Join mode used when a request does not specify one.
    pub use_and_logic: bool,
    /// Maximum number of name variations returned (1 to 5).
    pub max_variations: usize,
    /// Log a warning when a query exceeds its engine's limit.
    pub warn_on_overlength: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_engine: SearchEngine::Google,
            use_and_logic: false,
            max_variations: MAX_VARIATIONS,
            warn_on_overlength: true,
        }
    }
}

impl QueryConfig {
    /// Create a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default search engine.
    #[must_use]
    pub const fn with_engine(mut self, engine: SearchEngine) -> Self {
        self.default_engine = engine;
        self
    }

    /// Set the default join mode.
    #[must_use]
    pub const fn with_and_logic(mut self, use_and_logic: bool) -> Self {
        self.use_and_logic = use_and_logic;
        self
    }

    /// Set the variation cap.
    #[must_use]
    pub const fn with_max_variations(mut self, max: usize) -> Self {
        self.max_variations = max;
        self
    }

    /// Enable or disable over-length warnings.
    #[must_use]
    pub const fn with_overlength_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_overlength = enabled;
        self
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    /// Returns an error if any value is out of range.
    pub fn validate(&self) -> QueryResult<()> {
        if self.max_variations == 0 || self.max_variations > MAX_VARIATIONS {
            return Err(QueryError::Config(format!(
                "max_variations must be between 1 and {MAX_VARIATIONS}"
            )));
        }
        Ok(())
    }
}
