//! OSINT query building for the InfoScope toolkit.
//!
//! This module turns structured investigator input into search-engine dork
//! queries:
//! - Tokenizing and quoting helpers
//! - Engine registry (Google, Bing, Yandex, Baidu, DuckDuckGo)
//! - Preset dorking templates
//! - Risk classification of generated queries
//! - Name variations
//!
//! Everything here is pure. [`QueryService`] only bundles the pieces behind a
//! configuration.

pub mod builder;
pub mod config;
pub mod engines;
pub mod error;
pub mod presets;
pub mod risk;
pub mod tokenize;
pub mod types;
pub mod variations;

pub use builder::{build_query, build_query_for, build_terms};
pub use config::QueryConfig;
pub use engines::{EngineSpec, SearchEngine};
pub use error::{QueryError, QueryResult};
pub use presets::PresetTemplate;
pub use risk::{RiskLevel, assess_risk};
pub use tokenize::tokenize_list;
pub use types::{BuiltQuery, InvestigationInput, LengthCheck, check_length};
pub use variations::generate_name_variations;

use serde::{Deserialize, Serialize};

/// A query request as sent by a client. Identifiers are parsed by the service.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryRequest {
    /// Investigator input.
    pub input: InvestigationInput,
    /// Preset identifier.
    pub preset: Option<String>,
    /// Engine identifier; the configured default when absent.
    pub engine: Option<String>,
    /// Join mode; the configured default when absent.
    pub use_and_logic: Option<bool>,
}

impl QueryRequest {
    /// Create a request for the given input.
    #[must_use]
    pub fn new(input: InvestigationInput) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }

    /// Set the preset identifier.
    #[must_use]
    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    /// Set the engine identifier.
    #[must_use]
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    /// Set the join mode.
    #[must_use]
    pub const fn with_and_logic(mut self, use_and_logic: bool) -> Self {
        self.use_and_logic = Some(use_and_logic);
        self
    }
}

/// Main query service that coordinates building, assessment and validation.
#[derive(Clone, Debug, Default)]
pub struct QueryService {
    config: QueryConfig,
}

impl QueryService {
    /// Create a new query service with the given configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(config: QueryConfig) -> QueryResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Service configuration.
    #[must_use]
    pub const fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Resolve an optional engine identifier against the configured default.
    ///
    /// # Errors
    /// Returns an error if the identifier is unknown.
    pub fn resolve_engine(&self, engine: Option<&str>) -> QueryResult<SearchEngine> {
        engine.map_or(Ok(self.config.default_engine), str::parse)
    }

    /// Resolve an optional preset identifier. Blank means no preset.
    ///
    /// # Errors
    /// Returns an error if the identifier is unknown.
    pub fn resolve_preset(preset: Option<&str>) -> QueryResult<Option<PresetTemplate>> {
        preset
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::parse)
            .transpose()
    }

    /// Build a query and everything a caller needs to show or run it.
    ///
    /// # Errors
    /// Returns an error if the engine or preset is unknown.
    pub fn compose(&self, request: &QueryRequest) -> QueryResult<BuiltQuery> {
        let engine = self.resolve_engine(request.engine.as_deref())?;
        let preset = Self::resolve_preset(request.preset.as_deref())?;
        let use_and_logic = request.use_and_logic.unwrap_or(self.config.use_and_logic);

        let query = build_query_for(&request.input, preset, use_and_logic, engine);
        let risk = assess_risk(&query);
        let length = check_length(&query, engine);

        if length.exceeds && self.config.warn_on_overlength {
            tracing::warn!(
                engine = %engine,
                length = length.length,
                max = length.max_query_length,
                "query exceeds engine length limit"
            );
        }

        let search_url = if query.is_empty() {
            None
        } else {
            Some(engine.search_url(&query)?.to_string())
        };

        tracing::debug!(%engine, %risk, "composed query: {query}");

        Ok(BuiltQuery {
            query,
            engine,
            preset,
            use_and_logic,
            risk,
            length,
            search_url,
        })
    }

    /// Name variations, capped by the configured maximum.
    #[must_use]
    pub fn variations(&self, input: &InvestigationInput) -> Vec<String> {
        variations::generate_name_variations_with_limit(input, self.config.max_variations)
    }

    /// Registry entries for every engine.
    #[must_use]
    pub fn engines() -> Vec<&'static EngineSpec> {
        SearchEngine::ALL.into_iter().map(SearchEngine::spec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> InvestigationInput {
        InvestigationInput::new()
            .with_full_name("John Smith")
            .with_email("john@example.com")
    }

    #[test]
    fn test_service_creation() {
        assert!(QueryService::new(QueryConfig::default()).is_ok());
        assert!(QueryService::new(QueryConfig::new().with_max_variations(0)).is_err());
    }

    #[test]
    fn test_compose_defaults() -> QueryResult<()> {
        let service = QueryService::default();
        let built = service.compose(&QueryRequest::new(john()))?;

        assert_eq!(built.query, "\"John Smith\" john@example.com");
        assert_eq!(built.engine, SearchEngine::Google);
        assert_eq!(built.preset, None);
        assert!(!built.use_and_logic);
        assert_eq!(built.risk, RiskLevel::Low);
        assert!(!built.length.exceeds);
        assert!(
            built
                .search_url
                .as_deref()
                .is_some_and(|url| url.starts_with("https://www.google.com/search?q="))
        );
        Ok(())
    }

    #[test]
    fn test_compose_with_preset_and_engine() -> QueryResult<()> {
        let service = QueryService::default();
        let request = QueryRequest::new(john())
            .with_preset("contact")
            .with_engine("bing")
            .with_and_logic(true);
        let built = service.compose(&request)?;

        assert_eq!(built.preset, Some(PresetTemplate::Contact));
        assert_eq!(built.engine, SearchEngine::Bing);
        assert!(built.query.contains(" AND (intitle:contact OR "));
        assert_eq!(built.risk, RiskLevel::Medium);
        Ok(())
    }

    #[test]
    fn test_compose_empty_has_no_url() {
        let service = QueryService::default();
        let built = service.compose(&QueryRequest::default()).ok();
        assert_eq!(built.map(|b| (b.query, b.search_url)), Some((String::new(), None)));
    }

    #[test]
    fn test_compose_rejects_unknown_ids() {
        let service = QueryService::default();
        let bad_engine = QueryRequest::new(john()).with_engine("lycos");
        assert!(matches!(
            service.compose(&bad_engine),
            Err(QueryError::UnknownEngine(_))
        ));

        let bad_preset = QueryRequest::new(john()).with_preset("dating");
        assert!(matches!(
            service.compose(&bad_preset),
            Err(QueryError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_blank_preset_is_none() {
        assert!(matches!(QueryService::resolve_preset(Some("  ")), Ok(None)));
        assert!(matches!(QueryService::resolve_preset(None), Ok(None)));
    }

    #[test]
    fn test_overlength_is_reported_not_truncated() -> QueryResult<()> {
        let service = QueryService::default();
        let include = (0..40).map(|i| format!("keyword{i}")).collect::<Vec<_>>().join(",");
        let request = QueryRequest::new(InvestigationInput::new().with_include(include))
            .with_engine("baidu");
        let built = service.compose(&request)?;
        assert!(built.length.exceeds);
        assert_eq!(built.length.length, built.query.chars().count());
        assert!(built.query.ends_with("keyword39"));
        Ok(())
    }

    #[test]
    fn test_variations_respect_config() -> QueryResult<()> {
        let service = QueryService::new(QueryConfig::new().with_max_variations(2))?;
        assert_eq!(service.variations(&john()).len(), 2);
        Ok(())
    }

    #[test]
    fn test_engine_listing() {
        let engines = QueryService::engines();
        assert_eq!(engines.len(), 5);
        assert_eq!(engines[0].id, "google");
    }
}
