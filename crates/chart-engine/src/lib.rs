//! Chart rendering engine
//!
//! Compiles Typst chart templates in memory and rasterizes them to PNG:
//! - Embedded fonts, no filesystem access during compilation
//! - Compilation on the blocking pool with a timeout
//! - Bar charts driven by `sys.inputs`

pub mod chart;
pub mod compiler;
pub mod templates;
pub mod world;

pub use chart::{render_bar_chart, write_bar_chart, BarChart, DEFAULT_BAR_COLOR};
pub use compiler::{render_png, ChartError, ChartSource, Diagnostic, RenderRequest, RenderedImage};
