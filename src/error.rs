//! API error taxonomy with HTTP response mapping.
//!
//! Every handler returns `Result<_, ApiError>` so the status-code mapping
//! lives in exactly one place. Upstream gateway failures map to 502 and
//! are kept distinct from client-input 400s.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed client input; never retried.
    #[error("{0}")]
    Validation(String),
    /// Unknown resource id.
    #[error("{0}")]
    NotFound(String),
    /// Upstream payment processor failure; the client may retry with backoff.
    #[error("payment gateway error: {0}")]
    Gateway(String),
    /// Relational store failure; fatal to the request.
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Gateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Gateway(_) => {
                tracing::warn!(error = %self, "upstream payment gateway failure")
            }
            ApiError::Database(_) => tracing::error!(error = %self, "database error"),
            _ => {}
        }

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
