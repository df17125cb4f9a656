mod chart_backend_factory;
mod html_chart_renderer;
mod palette;
mod resvg_word_cloud;
#[cfg(feature = "svg-charts")]
mod svg_chart_renderer;

pub use chart_backend_factory::ChartBackendFactory;
pub use html_chart_renderer::HtmlChartRenderer;
pub use resvg_word_cloud::{DEFAULT_HEIGHT, DEFAULT_MAX_WORDS, DEFAULT_WIDTH, ResvgWordCloud};
#[cfg(feature = "svg-charts")]
pub use svg_chart_renderer::SvgChartRenderer;
