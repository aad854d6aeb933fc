//! Error types for the query module.

use thiserror::Error;

/// Errors that can occur while building or rendering a query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Engine identifier is not one of the registered engines.
    #[error("unknown search engine: {0}")]
    UnknownEngine(String),

    /// Preset identifier is not one of the known templates.
    #[error("unknown preset template: {0}")]
    UnknownPreset(String),

    /// Search URL could not be rendered.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl QueryError {
    /// Check if this error was caused by caller input rather than by the service.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::UnknownEngine(_) | Self::UnknownPreset(_))
    }
}

/// Convenience result alias for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
