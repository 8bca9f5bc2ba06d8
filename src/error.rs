use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::greeting::LookupError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps each failure class to its HTTP status code and renders it as a JSON
/// error body. Nothing here is retried and nothing crashes the process; a
/// bad request only fails its own response.
#[derive(Debug)]
pub enum ApiError {
    /// Path parameter is not a valid 64-bit integer
    InvalidId(String),
    /// No record with the given id
    RecordNotFound(i64),
    /// Spanner is unreachable or the query failed
    StoreUnavailable(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidId(raw) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid id: expected a 64-bit integer, got '{}'", raw),
            ),
            ApiError::RecordNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("No record with id: {}", id),
            ),
            ApiError::StoreUnavailable(err) => (
                StatusCode::SERVICE_UNAVAILABLE,
                format!("Record store unavailable: {}", err),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound(id) => ApiError::RecordNotFound(id),
            LookupError::Store(err) => ApiError::StoreUnavailable(err),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::StoreUnavailable(err)
    }
}
