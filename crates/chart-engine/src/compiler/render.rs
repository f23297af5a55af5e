//! Compile and rasterize on the blocking pool
//!
//! Both steps are CPU-bound and run in one blocking task. The timeout covers
//! the whole task; a timed-out task keeps running but its result is dropped.

use std::time::Duration;

use typst::diag::Warned;
use tracing::{debug, warn};

use super::errors::{ChartError, Diagnostic};
use super::{RenderRequest, RenderedImage};
use crate::world::ChartWorld;

/// Points per inch in Typst layout
const POINTS_PER_INCH: f32 = 72.0;

/// Compile a chart and export its first page as PNG
pub async fn render_png(
    request: RenderRequest,
    timeout_ms: u64,
) -> Result<RenderedImage, ChartError> {
    let world = ChartWorld::new(request.source.resolve()?, request.inputs);
    let ppi = request.ppi;

    let task = tokio::task::spawn_blocking(move || compile_and_rasterize(&world, ppi));

    match tokio::time::timeout(Duration::from_millis(timeout_ms), task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(ChartError::Render(format!(
            "Chart task failed: {}",
            join_error
        ))),
        Err(_elapsed) => Err(ChartError::Timeout(timeout_ms)),
    }
}

fn compile_and_rasterize(world: &ChartWorld, ppi: f32) -> Result<RenderedImage, ChartError> {
    let Warned { output, warnings } = typst::compile(world);
    for warning in &warnings {
        warn!("Chart compiler warning: {}", Diagnostic::from(warning));
    }

    let document = output
        .map_err(|errors| ChartError::Compile(errors.iter().map(Diagnostic::from).collect()))?;
    let page = document
        .pages
        .first()
        .ok_or_else(|| ChartError::Render("Chart produced no pages".to_string()))?;

    let pixmap = typst_render::render(page, ppi / POINTS_PER_INCH);
    let png = pixmap
        .encode_png()
        .map_err(|e| ChartError::Render(format!("PNG encoding failed: {}", e)))?;

    debug!(
        "Rasterized chart at {} ppi: {}x{}, {} warnings",
        ppi,
        pixmap.width(),
        pixmap.height(),
        warnings.len()
    );

    Ok(RenderedImage {
        png,
        width: pixmap.width(),
        height: pixmap.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::ChartSource;
    use typst::foundations::Dict;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn raw(source: &str) -> RenderRequest {
        RenderRequest::new(ChartSource::Raw(source.to_string()), Dict::new())
    }

    #[tokio::test]
    async fn test_raw_source_renders_png() {
        let source = "#set page(width: 4cm, height: 3cm)\n#rect(width: 2cm, height: 1cm)";
        let image = render_png(raw(source), 10000).await.unwrap();

        assert_eq!(&image.png[..8], &PNG_SIGNATURE);
        assert!(image.width > image.height);
    }

    #[tokio::test]
    async fn test_ppi_scales_output() {
        let source = "#set page(width: 2in, height: 1in)\nHi";

        let low = render_png(raw(source).with_ppi(72.0), 10000).await.unwrap();
        let high = render_png(raw(source).with_ppi(144.0), 10000).await.unwrap();

        assert_eq!(low.width, 144);
        assert_eq!(high.width, 288);
    }

    #[tokio::test]
    async fn test_syntax_error_reported() {
        let result = render_png(raw("#let x = ("), 10000).await;
        match result {
            Err(ChartError::Compile(diagnostics)) => assert!(!diagnostics.is_empty()),
            other => panic!("expected compile error, got {:?}", other.map(|i| i.width)),
        }
    }

    #[tokio::test]
    async fn test_missing_file_reported() {
        let result = render_png(raw(r#"#image("logo.png")"#), 10000).await;
        assert!(matches!(result, Err(ChartError::Compile(_))));
    }

    #[tokio::test]
    async fn test_unknown_template() {
        let request = RenderRequest::new(ChartSource::Template("pie".to_string()), Dict::new());
        let result = render_png(request, 10000).await;
        assert!(matches!(result, Err(ChartError::UnknownTemplate(name)) if name == "pie"));
    }
}
