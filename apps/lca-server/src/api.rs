//! API handlers for the LCA report server

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::ServerError;
use crate::AppState;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Marker in the page replaced by the fallback notice
const NOTICE_MARKER: &str = "<!-- FALLBACK_NOTICE -->";

const FALLBACK_NOTICE: &str = r#"<div class="notice" role="alert">OPENAI_API_KEY not set. Proceeding in fallback mode.</div>"#;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "lca-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Form page, with the notice filled in when running without a credential
pub fn render_index(fallback_mode: bool) -> String {
    let notice = if fallback_mode { FALLBACK_NOTICE } else { "" };
    INDEX_HTML.replace(NOTICE_MARKER, notice)
}

/// Handler: GET /
pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.fallback_mode))
}

/// Report request body
#[derive(Deserialize)]
pub struct ReportApiRequest {
    pub product: String,
}

/// Handler: POST /api/report
///
/// Runs the whole pipeline and responds with the saved document.
pub async fn handle_generate_report(
    State(state): State<AppState>,
    Json(req): Json<ReportApiRequest>,
) -> Result<Response, ServerError> {
    info!("Report request: product={:?}", req.product);

    let artifact = state.pipeline.run(&req.product).await.map_err(|e| {
        error!("Report generation failed: {}", e);
        ServerError::from(e)
    })?;

    let bytes = tokio::fs::read(&artifact.path).await.map_err(|e| {
        error!("Failed to read {}: {}", artifact.path.display(), e);
        ServerError::Internal(format!("Failed to read generated report: {}", e))
    })?;

    info!(
        "Report ready: {} ({} bytes)",
        artifact.file_name,
        bytes.len()
    );

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        artifact.file_name.replace('"', "")
    ))
    .map_err(|e| ServerError::Internal(format!("Invalid report file name: {}", e)))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(DOCX_MIME)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
