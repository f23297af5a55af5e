//! One bar chart per inventory metric

use std::path::{Path, PathBuf};

use chart_engine::{write_bar_chart, BarChart, ChartError};
use lca_types::{InventoryTable, LifeCycleStage, Metric};
use tracing::info;

/// Chart title for a metric column
pub fn chart_title(metric: Metric) -> String {
    format!("{} by Stage", metric.label())
}

/// Render every metric column of `table` into `dir`.
///
/// Files are named after the metric (see [`Metric::chart_file_name`]) and
/// returned in column order. Existing files of the same name are replaced.
pub async fn render_inventory_charts(
    table: &InventoryTable,
    dir: &Path,
    timeout_ms: u64,
) -> Result<Vec<PathBuf>, ChartError> {
    let labels: Vec<String> = LifeCycleStage::ALL
        .iter()
        .map(|stage| stage.label().to_string())
        .collect();

    let mut paths = Vec::with_capacity(Metric::ALL.len());
    for metric in Metric::ALL {
        let chart = BarChart::new(chart_title(metric), labels.clone(), table.column(metric));
        let path = dir.join(metric.chart_file_name());
        paths.push(write_bar_chart(&chart, &path, timeout_ms).await?);
    }

    info!("Rendered {} inventory charts", paths.len());
    Ok(paths)
}
