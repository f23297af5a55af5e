//! End-to-end report run
//!
//! Inventory, charts, web excerpt, narrative, then assembly. Each stage is
//! awaited before the next starts.

use std::path::PathBuf;

use lca_types::{InventoryTable, NarrativeSections};
use tracing::info;

use crate::charts::render_inventory_charts;
use crate::config::ReportConfig;
use crate::document::{assemble_report, report_file_name, ReportContent};
use crate::error::ReportError;
use crate::fetch::WebFetcher;
use crate::inventory::generate_inventory;
use crate::narrative::{generate_all_sections, NarrativeBackend};
use crate::workspace::RunWorkspace;

/// Result of one successful run
#[derive(Debug, Clone)]
pub struct ReportArtifact {
    /// Saved `.docx`
    pub path: PathBuf,
    pub file_name: String,
    pub inventory: InventoryTable,
    pub web_excerpt: String,
    pub narrative: NarrativeSections,
}

/// Trimmed product name, or an error if it is empty or unusable as part of a
/// file name and a response header
pub fn validate_product(product: &str) -> Result<&str, ReportError> {
    let product = product.trim();

    if product.is_empty() {
        return Err(ReportError::InvalidProduct(
            "Product name must not be empty".to_string(),
        ));
    }
    if product.contains(['/', '\\']) {
        return Err(ReportError::InvalidProduct(format!(
            "Product name must not contain path separators: {}",
            product
        )));
    }
    if product.chars().any(char::is_control) {
        return Err(ReportError::InvalidProduct(format!(
            "Product name must not contain control characters: {:?}",
            product
        )));
    }

    Ok(product)
}

/// Runs reports with a fixed configuration and narrative backend
#[derive(Debug, Clone)]
pub struct ReportPipeline {
    config: ReportConfig,
    fetcher: WebFetcher,
    backend: NarrativeBackend,
}

impl ReportPipeline {
    pub fn new(config: ReportConfig, backend: NarrativeBackend) -> Result<Self, ReportError> {
        let fetcher = WebFetcher::new(config.search_url.clone())?;
        Ok(Self {
            config,
            fetcher,
            backend,
        })
    }

    pub fn backend(&self) -> &NarrativeBackend {
        &self.backend
    }

    /// Produce the report for `product`.
    ///
    /// Chart files live in a run workspace that is removed when this returns,
    /// whether the run succeeded or not.
    pub async fn run(&self, product: &str) -> Result<ReportArtifact, ReportError> {
        let product = validate_product(product)?.to_string();
        info!("Generating LCA report for '{}'", product);

        let inventory = generate_inventory();
        info!("Generated inventory ({} stages)", inventory.row_count());

        let workspace = RunWorkspace::create()?;
        let charts =
            render_inventory_charts(&inventory, workspace.path(), self.config.render_timeout_ms)
                .await?;

        let web_excerpt = self.fetcher.fetch_excerpt(&product).await?;
        info!("Web excerpt: {} chars", web_excerpt.len());

        let narrative = generate_all_sections(&self.backend, &product).await;
        info!("Generated {} narrative sections", narrative.len());

        let content = ReportContent {
            product: product.clone(),
            inventory: inventory.clone(),
            charts,
            web_excerpt,
            narrative,
            date: chrono::Local::now().date_naive(),
        };
        let output_dir = self.config.output_dir.clone();

        let (path, content) = tokio::task::spawn_blocking(move || {
            std::fs::create_dir_all(&output_dir)?;
            let path = assemble_report(&content, &output_dir)?;
            Ok::<_, ReportError>((path, content))
        })
        .await
        .map_err(|e| ReportError::Task(e.to_string()))??;

        drop(workspace);

        Ok(ReportArtifact {
            path,
            file_name: report_file_name(&product),
            inventory,
            web_excerpt: content.web_excerpt,
            narrative: content.narrative,
        })
    }
}
