//! HTTP front for InfoScope.
//!
//! Query routes are stateless wrappers over [`crate::query::QueryService`]:
//! `/api/query` composes, `/api/risk` classifies, `/api/variations` widens a
//! name, and `/api/engines` / `/api/presets` list the static registries.
//! `/api/investigations` is the only stateful surface, backed by the
//! process-local register in [`AppState`].

pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Port used when `INFOSCOPE_PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 3000;

/// Methods the API answers to.
const ALLOWED_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PATCH, Method::DELETE];

/// Router with CORS and request tracing applied.
///
/// Browser clients on any origin may call the API; the register holds no
/// credentials.
#[must_use]
pub fn build_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(Any);

    create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Bind `0.0.0.0:port` and serve until `shutdown_signal` completes.
///
/// In-flight requests finish before the future returns.
///
/// # Errors
/// Returns an error if the port cannot be bound or the server fails.
pub async fn run_server_with_shutdown<F>(
    state: Arc<AppState>,
    port: u16,
    shutdown_signal: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "InfoScope API listening");

    axum::serve(listener, build_app(state))
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    tracing::info!("InfoScope API drained");
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;
    use crate::query::QueryConfig;

    #[tokio::test]
    async fn test_cors_preflight() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let app = build_app(AppState::new(QueryConfig::default())?);
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/query")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())?;

        let response = app.oneshot(request).await?;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .map(|v| v.as_bytes()),
            Some(&b"*"[..])
        );
        Ok(())
    }
}
