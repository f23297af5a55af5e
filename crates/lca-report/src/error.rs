//! Error types for the report pipeline

use std::path::PathBuf;

use chart_engine::ChartError;
use lca_types::NarrativeSection;
use thiserror::Error;

/// Failure fetching the search results page
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Search request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Failure talking to the chat-completion endpoint
///
/// Never escapes the narrative generator: every variant is folded into the
/// section's fallback text.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Rate limit or quota exceeded: {0}")]
    RateLimited(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Failure building or saving the report document
#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("Narrative section missing: {0}")]
    MissingSection(NarrativeSection),

    #[error("Failed to read chart {}: {source}", path.display())]
    ChartRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid chart image {}: {reason}", path.display())]
    InvalidImage { path: PathBuf, reason: String },

    #[error("Failed to package document: {0}")]
    Package(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Any failure that aborts a report run
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid product name: {0}")]
    InvalidProduct(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Assemble(#[from] AssembleError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(String),
}
