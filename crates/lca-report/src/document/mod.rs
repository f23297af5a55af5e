//! Document assembly
//!
//! [`build_layout`] turns the report content into an ordered block list and
//! [`docx::write_docx`] renders that list to a `.docx` package.

pub mod docx;
pub mod layout;

pub use layout::{build_layout, figure_caption, format_value, Align, Block};

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use lca_types::{InventoryTable, NarrativeSections};
use tracing::info;

use crate::error::AssembleError;

/// Everything a report is assembled from
#[derive(Debug, Clone)]
pub struct ReportContent {
    pub product: String,
    pub inventory: InventoryTable,
    /// Chart images in metric column order
    pub charts: Vec<PathBuf>,
    pub web_excerpt: String,
    pub narrative: NarrativeSections,
    /// Printed on the title page
    pub date: NaiveDate,
}

/// `Electric Toothbrush` -> `LCA_Report_AI_Electric_Toothbrush.docx`
pub fn report_file_name(product: &str) -> String {
    format!("LCA_Report_AI_{}.docx", product.replace(' ', "_"))
}

/// Lay out and save the report into `output_dir`, replacing any earlier
/// report for the same product. Returns the saved path.
pub fn assemble_report(
    content: &ReportContent,
    output_dir: &Path,
) -> Result<PathBuf, AssembleError> {
    let blocks = build_layout(content)?;
    let path = output_dir.join(report_file_name(&content.product));

    docx::write_docx(&blocks, &path)?;

    info!(
        "Saved report for '{}' to {} ({} blocks)",
        content.product,
        path.display(),
        blocks.len()
    );
    Ok(path)
}
