//! HTTP route handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use llmmatch_core::api::{ModelSpec, RequirementInput};

use crate::http::{models::*, state::AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/models", get(models_handler))
        .route("/api/recommend", post(recommend_handler))
        .with_state(state)
}

/// GET /api/health
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    state.record_request("/api/health");
    let stats = state.stats.read().unwrap_or_else(|e| e.into_inner());

    Json(HealthResponse {
        status: "ok".into(),
        session_id: state.session_id.clone(),
        models: state.recommender.catalog().len(),
        predictor: state.recommender.predictor_name().map(str::to_string),
        uptime_seconds: stats.uptime_seconds(),
        requests_handled: stats.requests_total,
        requests_by_endpoint: stats.requests_by_endpoint.clone(),
        errors_total: stats.errors_total,
        timestamp: Local::now().to_rfc3339(),
    })
}

/// GET /api/models - the full catalog
async fn models_handler(State(state): State<AppState>) -> Json<Vec<ModelSpec>> {
    state.record_request("/api/models");
    Json(state.recommender.catalog().all().to_vec())
}

/// POST /api/recommend
async fn recommend_handler(
    State(state): State<AppState>,
    body: Result<Json<RequirementInput>, JsonRejection>,
) -> Result<Json<serde_json::Value>, HttpServerError> {
    state.record_request("/api/recommend");

    let outcome = body
        .map_err(|e| HttpServerError::InvalidRequirement(e.body_text()))
        .and_then(|Json(input)| {
            let result = state.recommender.recommend(&input)?;
            serde_json::to_value(&result).map_err(|e| HttpServerError::Internal(e.to_string()))
        });

    match outcome {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            state.record_error();
            Err(e)
        }
    }
}
