mod chart_renderer;
mod entity_extractor;
mod file_loader;
mod model_error;
mod model_loader;
mod news_classifier;
mod text_summarizer;
mod word_cloud_renderer;

pub use chart_renderer::ChartRenderer;
pub use entity_extractor::EntityExtractor;
pub use file_loader::{FileLoader, FileLoaderError};
pub use model_error::ModelError;
pub use model_loader::{ModelLoadError, ModelLoader};
pub use news_classifier::NewsClassifier;
pub use text_summarizer::TextSummarizer;
pub use word_cloud_renderer::{WordCloudError, WordCloudRenderer};
