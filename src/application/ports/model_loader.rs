use std::sync::Arc;

use super::{EntityExtractor, NewsClassifier, TextSummarizer};

/// Constructs the analysis collaborators. Each load is independent so a
/// failure of one leaves the others usable.
pub trait ModelLoader: Send + Sync {
    fn load_classifier(&self) -> Result<Arc<dyn NewsClassifier>, ModelLoadError>;
    fn load_summarizer(&self) -> Result<Arc<dyn TextSummarizer>, ModelLoadError>;
    fn load_extractor(&self) -> Result<Arc<dyn EntityExtractor>, ModelLoadError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("endpoint is not configured for the {0}")]
    MissingEndpoint(&'static str),
    #[error("model initialization failed: {0}")]
    InitializationFailed(String),
}
