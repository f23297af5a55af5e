//! Typst World holding a single chart source

mod chart_world;
pub mod fonts;

pub use chart_world::ChartWorld;
pub use fonts::{embedded_fonts, EmbeddedFonts};
