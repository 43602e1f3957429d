//! HTTP API data models

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::collections::BTreeMap;

use llmmatch_core::api::RecommendError;

// ============= Health =============

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub session_id: String,
    pub models: usize,
    /// Name of the confirmation model, or null when running without ML.
    pub predictor: Option<String>,
    pub uptime_seconds: f64,
    pub requests_handled: u64,
    pub requests_by_endpoint: BTreeMap<String, u64>,
    pub errors_total: u64,
    pub timestamp: String,
}

// ============= Error Handling =============

#[derive(Debug)]
pub enum HttpServerError {
    /// Unparseable body or a field outside its allowed values.
    InvalidRequirement(String),
    /// Every model was excluded by the budget.
    EmptyCatalog(String),
    Internal(String),
}

impl From<RecommendError> for HttpServerError {
    fn from(e: RecommendError) -> Self {
        match e {
            RecommendError::InvalidRequirement(_) => Self::InvalidRequirement(e.to_string()),
            RecommendError::EmptyCatalog { .. } => Self::EmptyCatalog(e.to_string()),
        }
    }
}

impl HttpServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequirement(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::EmptyCatalog(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_code, message) = match self {
            Self::InvalidRequirement(msg) => ("INVALID_REQUIREMENT", msg),
            Self::EmptyCatalog(msg) => ("EMPTY_CATALOG", msg),
            Self::Internal(msg) => ("INTERNAL_ERROR", msg),
        };

        let body = serde_json::json!({
            "success": false,
            "error": message,
            "error_code": error_code,
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_recommend_errors_map_to_statuses() {
        let invalid: HttpServerError =
            RecommendError::InvalidRequirement("budget must be a positive number".into()).into();
        assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let empty: HttpServerError = RecommendError::EmptyCatalog { budget: 0.01 }.into();
        assert_eq!(empty.status(), StatusCode::NOT_FOUND);
        assert!(matches!(empty, HttpServerError::EmptyCatalog(ref m) if m.contains("0.01")));
    }

    #[test]
    fn test_error_response_status() {
        let resp = HttpServerError::Internal("boom".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse {
            status: "ok".into(),
            session_id: "s".into(),
            models: 20,
            predictor: None,
            uptime_seconds: 1.5,
            requests_handled: 3,
            requests_by_endpoint: BTreeMap::from([("/api/health".to_string(), 3)]),
            errors_total: 0,
            timestamp: "2024-01-01T00:00:00+00:00".into(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"models\":20"));
        assert!(json.contains("\"predictor\":null"));
        assert!(json.contains("\"requests_by_endpoint\":{\"/api/health\":3}"));
        assert!(json.contains("\"errors_total\":0"));
    }
}
