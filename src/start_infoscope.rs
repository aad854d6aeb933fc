//! Startup helpers for the InfoScope server.
//!
//! Reads `INFOSCOPE_PORT`, `INFOSCOPE_DEFAULT_ENGINE` and `INFOSCOPE_AND_LOGIC`.

use std::process::ExitCode;
use std::sync::Arc;

use crate::query::{QueryConfig, QueryResult, SearchEngine};
use crate::server::{self, AppState};

/// Port variable.
pub const PORT_VAR: &str = "INFOSCOPE_PORT";
/// Default engine variable.
pub const ENGINE_VAR: &str = "INFOSCOPE_DEFAULT_ENGINE";
/// Default join mode variable.
pub const AND_LOGIC_VAR: &str = "INFOSCOPE_AND_LOGIC";

/// Run the server (used by the `infoscope-server` binary).
///
/// # Returns
/// `ExitCode::SUCCESS` on graceful shutdown, `1` on failure.
#[must_use]
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting InfoScope v{}", env!("CARGO_PKG_VERSION"));

    let state = match initialize() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to create state: {e}");
            return ExitCode::from(1);
        }
    };

    let port = get_port();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create runtime: {e}");
            return ExitCode::from(1);
        }
    };

    if let Err(e) = rt.block_on(server::run_server_with_shutdown(state, port, shutdown_signal())) {
        tracing::error!("Server error: {e}");
        return ExitCode::from(1);
    }

    tracing::info!("InfoScope stopped");
    ExitCode::SUCCESS
}

/// Initialize application state from the environment without starting the server.
///
/// # Errors
/// Returns an error if the environment holds an unknown engine or the state cannot be built.
pub fn initialize() -> QueryResult<Arc<AppState>> {
    AppState::new(load_config()?)
}

/// Build the query configuration from the environment.
///
/// # Errors
/// Returns an error if `INFOSCOPE_DEFAULT_ENGINE` names an unknown engine.
pub fn load_config() -> QueryResult<QueryConfig> {
    config_from(
        std::env::var(ENGINE_VAR).ok().as_deref(),
        std::env::var(AND_LOGIC_VAR).ok().as_deref(),
    )
}

fn config_from(engine: Option<&str>, and_logic: Option<&str>) -> QueryResult<QueryConfig> {
    let mut config = QueryConfig::new();
    if let Some(engine) = engine.filter(|e| !e.trim().is_empty()) {
        config = config.with_engine(engine.parse::<SearchEngine>()?);
    }
    if let Some(flag) = and_logic {
        config = config.with_and_logic(parse_flag(flag));
    }
    Ok(config)
}

fn parse_flag(raw: &str) -> bool {
    let raw = raw.trim();
    raw == "1" || raw.eq_ignore_ascii_case("true")
}

/// Get configured server port.
#[must_use]
pub fn get_port() -> u16 {
    port_from(std::env::var(PORT_VAR).ok().as_deref())
}

fn port_from(raw: Option<&str>) -> u16 {
    raw.and_then(|p| p.trim().parse().ok())
        .unwrap_or(server::DEFAULT_PORT)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryError;

    #[test]
    fn test_defaults_without_env() -> QueryResult<()> {
        let config = config_from(None, None)?;
        assert_eq!(config.default_engine, SearchEngine::Google);
        assert!(!config.use_and_logic);
        Ok(())
    }

    #[test]
    fn test_engine_override() -> QueryResult<()> {
        let config = config_from(Some("DDG"), Some("true"))?;
        assert_eq!(config.default_engine, SearchEngine::DuckDuckGo);
        assert!(config.use_and_logic);
        Ok(())
    }

    #[test]
    fn test_unknown_engine_fails() {
        assert!(matches!(
            config_from(Some("altavista"), None),
            Err(QueryError::UnknownEngine(_))
        ));
    }

    #[test]
    fn test_flag_parsing() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag("0"));
    }

    #[test]
    fn test_port() {
        assert_eq!(port_from(None), server::DEFAULT_PORT);
        assert_eq!(port_from(Some("8080")), 8080);
        assert_eq!(port_from(Some("not-a-port")), server::DEFAULT_PORT);
    }
}
