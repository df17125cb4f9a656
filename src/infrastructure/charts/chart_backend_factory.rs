use std::sync::Arc;

use super::HtmlChartRenderer;
use crate::application::ports::ChartRenderer;
use crate::presentation::config::ChartBackend;

pub struct ChartBackendFactory;

impl ChartBackendFactory {
    /// Resolves the configured backend once at startup. When the preferred
    /// backend is not compiled in, the HTML renderer stands in for it.
    pub fn create(preferred: ChartBackend) -> Arc<dyn ChartRenderer> {
        let renderer = match preferred {
            ChartBackend::Svg => svg_or_fallback(),
            ChartBackend::Html => Arc::new(HtmlChartRenderer) as Arc<dyn ChartRenderer>,
        };
        tracing::info!(
            preferred = preferred.as_str(),
            selected = renderer.name(),
            "Chart backend selected"
        );
        renderer
    }
}

#[cfg(feature = "svg-charts")]
fn svg_or_fallback() -> Arc<dyn ChartRenderer> {
    Arc::new(super::SvgChartRenderer)
}

#[cfg(not(feature = "svg-charts"))]
fn svg_or_fallback() -> Arc<dyn ChartRenderer> {
    tracing::warn!("SVG charts are not built in, falling back to HTML charts");
    Arc::new(HtmlChartRenderer)
}
