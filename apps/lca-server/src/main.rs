//! LCA Report Server
//!
//! Serves a single-page form that generates a mock Life Cycle Assessment
//! report for a product name and hands it back as a `.docx` download.
//!
//! ## Endpoints
//!
//! - `GET /` form page
//! - `POST /api/report` run the report pipeline, respond with the document
//! - `GET /health` liveness check
//!
//! Without `OPENAI_API_KEY` the server runs in fallback mode: narrative
//! sections are placeholder text and the page says so.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use lca_report::config::{DEFAULT_RENDER_TIMEOUT_MS, DEFAULT_SEARCH_URL};
use lca_report::narrative::DEFAULT_MODEL;
use lca_report::{NarrativeBackend, ReportConfig, ReportPipeline};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{handle_generate_report, handle_health, handle_index};

/// Command-line arguments for the LCA report server
#[derive(Parser, Debug)]
#[command(name = "lca-server")]
#[command(about = "Generates mock LCA reports as .docx documents")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Directory reports are saved to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Search endpoint used for the web excerpt
    #[arg(long, default_value = DEFAULT_SEARCH_URL)]
    search_url: String,

    /// Chat-completion API base URL
    #[arg(long)]
    openai_base_url: Option<String>,

    /// Chat-completion model
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// API key; fallback narrative when unset
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: Option<String>,

    /// Chart render timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_RENDER_TIMEOUT_MS)]
    render_timeout_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ReportPipeline>,
    /// No credential configured; the page shows a notice
    pub fallback_mode: bool,
}

impl AppState {
    pub fn new(pipeline: ReportPipeline) -> Self {
        let fallback_mode = pipeline.backend().is_fallback();
        Self {
            pipeline: Arc::new(pipeline),
            fallback_mode,
        }
    }
}

/// Routes without middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_health))
        .route("/api/report", post(handle_generate_report))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap reads OPENAI_API_KEY
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting LCA report server on {}:{}", args.host, args.port);

    let backend = NarrativeBackend::from_api_key(
        args.openai_api_key.as_deref(),
        &args.model,
        args.openai_base_url.clone(),
    )?;
    if backend.is_fallback() {
        warn!("OPENAI_API_KEY not set, narrative sections will use fallback text");
    }

    let config = ReportConfig::default()
        .with_output_dir(&args.output_dir)
        .with_search_url(&args.search_url)
        .with_render_timeout_ms(args.render_timeout_ms);
    let state = AppState::new(ReportPipeline::new(config, backend)?);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Reports saved to {}", args.output_dir.display());
    info!("Render timeout: {}ms", args.render_timeout_ms);

    axum::serve(listener, app).await?;

    Ok(())
}
