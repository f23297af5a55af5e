//! Embedded chart templates

use crate::compiler::errors::ChartError;

/// Vertical bar chart driven by `title`, `labels`, `values` and `color`
pub const BAR_CHART: &str = "bar_chart";

const BAR_CHART_SOURCE: &str = include_str!("../../templates/bar_chart.typ");

/// Source of an embedded template
pub fn source(name: &str) -> Result<&'static str, ChartError> {
    match name {
        BAR_CHART => Ok(BAR_CHART_SOURCE),
        _ => Err(ChartError::UnknownTemplate(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_chart_reads_inputs() {
        let source = source(BAR_CHART).unwrap();
        for key in ["title", "labels", "values", "color"] {
            assert!(
                source.contains(&format!("sys.inputs.at(\"{}\"", key)),
                "template should read `{}`",
                key
            );
        }
    }

    #[test]
    fn test_unknown_template() {
        assert!(matches!(source("pie"), Err(ChartError::UnknownTemplate(_))));
    }
}
