//! Chart compilation under a timeout

pub mod errors;
pub mod render;

pub use errors::{ChartError, Diagnostic, Severity};
pub use render::render_png;

use typst::foundations::Dict;

use crate::templates;

/// Rasterization density when a request does not set one
pub const DEFAULT_PPI: f32 = 144.0;

/// Where the chart's Typst source comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartSource {
    /// An embedded template, by name
    Template(String),
    /// Typst markup as-is
    #[cfg(test)]
    Raw(String),
}

impl ChartSource {
    pub(crate) fn resolve(self) -> Result<String, ChartError> {
        match self {
            ChartSource::Template(name) => templates::source(&name).map(str::to_string),
            #[cfg(test)]
            ChartSource::Raw(source) => Ok(source),
        }
    }
}

/// Request to rasterize a chart
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub source: ChartSource,
    /// Exposed to the source as `sys.inputs`
    pub inputs: Dict,
    pub ppi: f32,
}

impl RenderRequest {
    pub fn new(source: ChartSource, inputs: Dict) -> Self {
        Self {
            source,
            inputs,
            ppi: DEFAULT_PPI,
        }
    }

    #[cfg(test)]
    pub fn with_ppi(mut self, ppi: f32) -> Self {
        self.ppi = ppi;
        self
    }
}

/// First page of a compiled chart as PNG
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}
