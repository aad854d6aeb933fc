//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::investigations::{InMemoryInvestigationStore, InvestigationStore};
use crate::query::{QueryConfig, QueryResult, QueryService};

/// Shared application state.
pub struct AppState {
    /// Query building service.
    pub queries: QueryService,
    /// Saved investigations.
    pub investigations: Arc<dyn InvestigationStore>,
}

impl AppState {
    /// Create a new application state with an empty investigation register.
    ///
    /// # Errors
    /// Returns an error if the query configuration is invalid.
    pub fn new(config: QueryConfig) -> QueryResult<Arc<Self>> {
        let queries = QueryService::new(config)?;
        tracing::info!(
            engine = %queries.config().default_engine,
            and_logic = queries.config().use_and_logic,
            "query service ready"
        );

        Ok(Arc::new(Self {
            queries,
            investigations: Arc::new(InMemoryInvestigationStore::new()),
        }))
    }
}
