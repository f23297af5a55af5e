//! Bar chart rendering
//!
//! A [`BarChart`] is turned into `sys.inputs` for the embedded bar chart
//! template and rasterized to PNG.

use std::path::{Path, PathBuf};

use tracing::debug;
use typst::foundations::{Array, Dict, Value};

use crate::compiler::{render_png, ChartError, ChartSource, RenderRequest, RenderedImage};
use crate::templates::BAR_CHART;

/// Steelblue
pub const DEFAULT_BAR_COLOR: &str = "#4682b4";

/// A vertical bar chart: one bar per label
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub color: String,
}

impl BarChart {
    pub fn new(title: impl Into<String>, labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            title: title.into(),
            labels,
            values,
            color: DEFAULT_BAR_COLOR.to_string(),
        }
    }

    fn validate(&self) -> Result<(), ChartError> {
        if self.labels.len() != self.values.len() {
            return Err(ChartError::InvalidInput(format!(
                "{} labels but {} values",
                self.labels.len(),
                self.values.len()
            )));
        }
        if let Some(bad) = self.values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(ChartError::InvalidInput(format!(
                "bar values must be finite and non-negative, got {}",
                bad
            )));
        }
        Ok(())
    }

    fn to_inputs(&self) -> Dict {
        let text = |s: &str| Value::Str(s.into());

        let mut inputs = Dict::new();
        inputs.insert("title".into(), text(self.title.as_str()));
        inputs.insert(
            "labels".into(),
            Value::Array(self.labels.iter().map(|l| text(l.as_str())).collect::<Array>()),
        );
        inputs.insert(
            "values".into(),
            Value::Array(self.values.iter().map(|v| Value::Float(*v)).collect::<Array>()),
        );
        inputs.insert("color".into(), text(self.color.as_str()));
        inputs
    }
}

/// Render a bar chart to PNG bytes
pub async fn render_bar_chart(
    chart: &BarChart,
    timeout_ms: u64,
) -> Result<RenderedImage, ChartError> {
    chart.validate()?;

    let request = RenderRequest::new(
        ChartSource::Template(BAR_CHART.to_string()),
        chart.to_inputs(),
    );

    render_png(request, timeout_ms).await
}

/// Render a bar chart and write it to `path`, replacing any existing file
pub async fn write_bar_chart(
    chart: &BarChart,
    path: &Path,
    timeout_ms: u64,
) -> Result<PathBuf, ChartError> {
    let image = render_bar_chart(chart, timeout_ms).await?;
    tokio::fs::write(path, &image.png).await?;

    debug!(
        "Wrote chart '{}' ({}x{}) to {}",
        chart.title,
        image.width,
        image.height,
        path.display()
    );

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_chart() -> BarChart {
        BarChart::new(
            "Energy Use (MJ) by Stage",
            vec![
                "Materials".to_string(),
                "Manufacturing".to_string(),
                "Use Phase".to_string(),
                "End-of-Life".to_string(),
            ],
            vec![101.5, 75.25, 12.0, 20.75],
        )
    }

    #[test]
    fn test_inputs_carry_chart_fields() {
        let mut chart = sample_chart();
        chart.color = "#ff0000".to_string();
        let inputs = chart.to_inputs();

        assert_eq!(
            inputs.get("title").unwrap(),
            &Value::Str("Energy Use (MJ) by Stage".into())
        );
        assert_eq!(inputs.get("color").unwrap(), &Value::Str("#ff0000".into()));
        match inputs.get("values").unwrap() {
            // whole numbers stay floats
            Value::Array(values) => assert_eq!(values.at(2, None).unwrap(), Value::Float(12.0)),
            other => panic!("values should be an array, got {:?}", other),
        }
        match inputs.get("labels").unwrap() {
            Value::Array(labels) => assert_eq!(labels.len(), 4),
            other => panic!("labels should be an array, got {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let mut chart = sample_chart();
        chart.values.pop();
        assert!(matches!(chart.validate(), Err(ChartError::InvalidInput(_))));
    }

    #[test]
    fn test_negative_values_rejected() {
        let mut chart = sample_chart();
        chart.values[0] = -1.0;
        assert!(matches!(chart.validate(), Err(ChartError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_render_bar_chart_produces_png() {
        let image = render_bar_chart(&sample_chart(), 10000).await.unwrap();

        assert_eq!(&image.png[1..4], b"PNG");
        // 16cm x 12cm page
        assert!(image.width > image.height);
    }

    #[tokio::test]
    async fn test_write_bar_chart_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Energy_Use_(MJ).png");
        std::fs::write(&path, b"stale").unwrap();

        let written = write_bar_chart(&sample_chart(), &path, 10000).await.unwrap();

        assert_eq!(written, path);
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[tokio::test]
    async fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("chart.png");

        let result = write_bar_chart(&sample_chart(), &path, 10000).await;
        assert!(matches!(result, Err(ChartError::Io(_))));
    }
}
