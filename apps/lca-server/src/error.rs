//! Error types for the LCA report server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lca_report::{AssembleError, ChartError, ReportError};
use serde::Serialize;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Web search failed: {0}")]
    SearchFailed(String),

    #[error("Chart rendering failed: {0}")]
    ChartFailed(String),

    #[error("Render timeout after {0}ms")]
    Timeout(u64),

    #[error("Report assembly failed: {0}")]
    AssemblyFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ServerError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ServerError::SearchFailed(_) => (StatusCode::BAD_GATEWAY, "SEARCH_FAILED"),
            ServerError::ChartFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CHART_FAILED"),
            ServerError::Timeout(_) => (StatusCode::REQUEST_TIMEOUT, "TIMEOUT"),
            ServerError::AssemblyFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "ASSEMBLY_FAILED")
            }
            ServerError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ReportError> for ServerError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::InvalidProduct(msg) => ServerError::InvalidRequest(msg),
            ReportError::Fetch(e) => ServerError::SearchFailed(e.to_string()),
            ReportError::Chart(ChartError::Timeout(ms)) => ServerError::Timeout(ms),
            ReportError::Chart(e) => ServerError::ChartFailed(e.to_string()),
            ReportError::Assemble(AssembleError::Io(e)) => ServerError::Internal(e.to_string()),
            ReportError::Assemble(e) => ServerError::AssemblyFailed(e.to_string()),
            other => ServerError::Internal(other.to_string()),
        }
    }
}
