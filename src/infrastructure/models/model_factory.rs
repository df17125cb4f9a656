use std::sync::Arc;
use std::time::Duration;

use super::{
    HttpEntityExtractor, HttpModelClient, HttpNewsClassifier, HttpTextSummarizer,
    ScaffoldClassifier, ScaffoldEntityExtractor, ScaffoldSummarizer,
};
use crate::application::ports::{
    EntityExtractor, ModelLoadError, ModelLoader, NewsClassifier, TextSummarizer,
};
use crate::presentation::config::{ModelBackend, ModelSettings, ScaffoldConfig};

const SCAFFOLD_SUMMARY_SENTENCES: usize = 3;

/// Builds the collaborators named by [`ModelSettings`]. Scaffold mode forces
/// the in-process implementations regardless of the configured backend.
pub struct ModelFactory {
    settings: ModelSettings,
    scaffold: ScaffoldConfig,
}

impl ModelFactory {
    pub fn new(settings: ModelSettings, scaffold: ScaffoldConfig) -> Self {
        Self { settings, scaffold }
    }

    pub fn backend(&self) -> ModelBackend {
        if self.scaffold.enabled {
            ModelBackend::Scaffold
        } else {
            self.settings.provider
        }
    }

    fn scaffold_delay(&self) -> Duration {
        Duration::from_millis(self.scaffold.mock_response_delay_ms)
    }

    fn http_client(
        &self,
        endpoint: Option<&str>,
        model: &'static str,
    ) -> Result<HttpModelClient, ModelLoadError> {
        let endpoint = endpoint
            .filter(|e| !e.trim().is_empty())
            .ok_or(ModelLoadError::MissingEndpoint(model))?;
        tracing::info!(model, endpoint, "Connecting HTTP model backend");
        HttpModelClient::new(
            endpoint,
            self.settings.api_key.clone(),
            Duration::from_secs(self.settings.timeout_secs),
        )
    }
}

impl ModelLoader for ModelFactory {
    fn load_classifier(&self) -> Result<Arc<dyn NewsClassifier>, ModelLoadError> {
        match self.backend() {
            ModelBackend::Scaffold => {
                tracing::info!("Loading scaffold classifier");
                Ok(Arc::new(ScaffoldClassifier::new(self.scaffold_delay())))
            }
            ModelBackend::Http => {
                let client =
                    self.http_client(self.settings.classifier_url.as_deref(), "classifier")?;
                Ok(Arc::new(HttpNewsClassifier::new(client)))
            }
        }
    }

    fn load_summarizer(&self) -> Result<Arc<dyn TextSummarizer>, ModelLoadError> {
        match self.backend() {
            ModelBackend::Scaffold => {
                tracing::info!("Loading scaffold summarizer");
                Ok(Arc::new(ScaffoldSummarizer::new(
                    SCAFFOLD_SUMMARY_SENTENCES,
                    self.scaffold_delay(),
                )))
            }
            ModelBackend::Http => {
                let client =
                    self.http_client(self.settings.summarizer_url.as_deref(), "summarizer")?;
                Ok(Arc::new(HttpTextSummarizer::new(client)))
            }
        }
    }

    fn load_extractor(&self) -> Result<Arc<dyn EntityExtractor>, ModelLoadError> {
        match self.backend() {
            ModelBackend::Scaffold => {
                tracing::info!("Loading scaffold entity extractor");
                Ok(Arc::new(ScaffoldEntityExtractor::new(self.scaffold_delay())))
            }
            ModelBackend::Http => {
                let client =
                    self.http_client(self.settings.extractor_url.as_deref(), "extractor")?;
                Ok(Arc::new(HttpEntityExtractor::new(client)))
            }
        }
    }
}
