//! HTTP route handlers for the InfoScope query API.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::investigations::{
    InvestigationError, InvestigationId, InvestigationRecord, InvestigationStats,
    InvestigationStatus,
};
use crate::query::presets::PRESET_TABLE;
use crate::query::{
    BuiltQuery, EngineSpec, InvestigationInput, QueryError, QueryRequest, QueryService, RiskLevel,
    assess_risk,
};

use super::state::AppState;

/// Error response used by every handler.
type ApiError = (StatusCode, String);

/// Create the API router with all routes.
#[must_use]
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/engines", get(list_engines))
        .route("/api/presets", get(list_presets))
        .route("/api/query", post(compose_query))
        .route("/api/risk", post(risk_assessment))
        .route("/api/variations", post(name_variations))
        .route(
            "/api/investigations",
            get(list_investigations).post(save_investigation),
        )
        .route("/api/investigations/stats", get(investigation_stats))
        .route(
            "/api/investigations/{id}",
            get(get_investigation)
                .patch(update_investigation)
                .delete(delete_investigation),
        )
        .with_state(state)
}

fn query_error(err: QueryError) -> ApiError {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, err.to_string())
}

fn investigation_error(err: InvestigationError) -> ApiError {
    let status = match err {
        InvestigationError::BlankName => StatusCode::BAD_REQUEST,
        InvestigationError::NotFound(_) => StatusCode::NOT_FOUND,
    };
    (status, err.to_string())
}

fn parse_id(raw: &str) -> Result<InvestigationId, ApiError> {
    raw.parse()
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Invalid investigation id: {e}")))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "infoscope",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List the engine registry.
async fn list_engines() -> Json<Vec<&'static EngineSpec>> {
    Json(QueryService::engines())
}

/// Preset DTO.
#[derive(Debug, Serialize)]
pub struct PresetDto {
    /// Preset identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Description.
    pub description: &'static str,
}

/// List the preset templates.
async fn list_presets() -> Json<Vec<PresetDto>> {
    Json(
        PRESET_TABLE
            .iter()
            .map(|entry| PresetDto {
                id: entry.id,
                name: entry.name,
                description: entry.description,
            })
            .collect(),
    )
}

/// Compose a query.
async fn compose_query(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<BuiltQuery>, ApiError> {
    state.queries.compose(&request).map(Json).map_err(query_error)
}

/// Risk assessment request.
#[derive(Debug, Deserialize)]
pub struct RiskRequest {
    /// Query text to classify.
    pub query: String,
}

/// Risk assessment response.
#[derive(Debug, Serialize)]
pub struct RiskResponse {
    /// Risk level.
    pub risk: RiskLevel,
}

/// Classify a query string.
async fn risk_assessment(Json(request): Json<RiskRequest>) -> Json<RiskResponse> {
    Json(RiskResponse {
        risk: assess_risk(&request.query),
    })
}

/// Name variation request.
#[derive(Debug, Deserialize)]
pub struct VariationsRequest {
    /// Investigator input.
    pub input: InvestigationInput,
}

/// Name variation response.
#[derive(Debug, Serialize)]
pub struct VariationsResponse {
    /// Alternate phrasings.
    pub variations: Vec<String>,
}

/// Generate name variations.
async fn name_variations(
    State(state): State<Arc<AppState>>,
    Json(request): Json<VariationsRequest>,
) -> Json<VariationsResponse> {
    Json(VariationsResponse {
        variations: state.queries.variations(&request.input),
    })
}

/// Save investigation request.
#[derive(Debug, Deserialize)]
pub struct SaveInvestigationRequest {
    /// Investigation name.
    pub name: String,
    /// Query settings.
    #[serde(flatten)]
    pub request: QueryRequest,
}

/// Save an investigation.
async fn save_investigation(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SaveInvestigationRequest>,
) -> Result<(StatusCode, Json<InvestigationRecord>), ApiError> {
    let built = state.queries.compose(&body.request).map_err(query_error)?;
    let record = InvestigationRecord::new(&body.name, body.request.input, built)
        .map_err(investigation_error)?;
    let saved = state.investigations.insert(record);
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Investigation list filter.
#[derive(Debug, Default, Deserialize)]
pub struct ListInvestigationsParams {
    /// Case-insensitive filter on name or target name.
    pub q: Option<String>,
}

/// List saved investigations, optionally filtered.
async fn list_investigations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListInvestigationsParams>,
) -> Json<Vec<InvestigationRecord>> {
    match params.q {
        Some(needle) => Json(state.investigations.search(&needle)),
        None => Json(state.investigations.list()),
    }
}

/// Register counts.
async fn investigation_stats(State(state): State<Arc<AppState>>) -> Json<InvestigationStats> {
    Json(state.investigations.stats())
}

/// Get one investigation.
async fn get_investigation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<InvestigationRecord>, ApiError> {
    let id = parse_id(&id)?;
    state
        .investigations
        .get(id)
        .map(Json)
        .map_err(investigation_error)
}

/// Status update request.
#[derive(Debug, Deserialize)]
pub struct UpdateInvestigationRequest {
    /// New status.
    pub status: InvestigationStatus,
}

/// Change the status of an investigation.
async fn update_investigation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateInvestigationRequest>,
) -> Result<Json<InvestigationRecord>, ApiError> {
    let id = parse_id(&id)?;
    state
        .investigations
        .set_status(id, body.status)
        .map(Json)
        .map_err(investigation_error)
}

/// Delete an investigation.
async fn delete_investigation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state
        .investigations
        .delete(id)
        .map(|()| StatusCode::NO_CONTENT)
        .map_err(investigation_error)
}
