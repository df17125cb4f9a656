use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::application::ports::{
    EntityExtractor, ModelLoadError, ModelLoader, NewsClassifier, TextSummarizer,
};
use crate::domain::{ModelKind, Notice};

/// The three analysis collaborators, each either loaded or absent.
///
/// Built once per process and shared read-only by every request. A missing
/// handle disables only the analysis that needs it.
pub struct ModelProvider {
    classifier: Option<Arc<dyn NewsClassifier>>,
    summarizer: Option<Arc<dyn TextSummarizer>>,
    extractor: Option<Arc<dyn EntityExtractor>>,
    load_failures: Vec<Notice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelAvailability {
    pub classifier: bool,
    pub summarizer: bool,
    pub extractor: bool,
}

impl ModelProvider {
    pub fn new(
        classifier: Option<Arc<dyn NewsClassifier>>,
        summarizer: Option<Arc<dyn TextSummarizer>>,
        extractor: Option<Arc<dyn EntityExtractor>>,
    ) -> Self {
        Self {
            classifier,
            summarizer,
            extractor,
            load_failures: Vec::new(),
        }
    }

    /// Attempts every load even when an earlier one fails.
    pub fn initialize(loader: &dyn ModelLoader) -> Self {
        let mut load_failures = Vec::new();

        let classifier = settle(
            ModelKind::Classifier,
            loader.load_classifier(),
            &mut load_failures,
        );
        let summarizer = settle(
            ModelKind::Summarizer,
            loader.load_summarizer(),
            &mut load_failures,
        );
        let extractor = settle(
            ModelKind::Extractor,
            loader.load_extractor(),
            &mut load_failures,
        );

        Self {
            classifier,
            summarizer,
            extractor,
            load_failures,
        }
    }

    pub fn classifier(&self) -> Option<Arc<dyn NewsClassifier>> {
        self.classifier.clone()
    }

    pub fn summarizer(&self) -> Option<Arc<dyn TextSummarizer>> {
        self.summarizer.clone()
    }

    pub fn extractor(&self) -> Option<Arc<dyn EntityExtractor>> {
        self.extractor.clone()
    }

    pub fn load_failures(&self) -> &[Notice] {
        &self.load_failures
    }

    pub fn availability(&self) -> ModelAvailability {
        ModelAvailability {
            classifier: self.classifier.is_some(),
            summarizer: self.summarizer.is_some(),
            extractor: self.extractor.is_some(),
        }
    }
}

fn settle<T: ?Sized>(
    kind: ModelKind,
    result: Result<Arc<T>, ModelLoadError>,
    failures: &mut Vec<Notice>,
) -> Option<Arc<T>> {
    match result {
        Ok(model) => {
            tracing::info!(model = %kind, "Model loaded");
            Some(model)
        }
        Err(e) => {
            tracing::error!(model = %kind, error = %e, "Failed to load model");
            failures.push(Notice::error(kind.load_failure_message(&e.to_string())));
            None
        }
    }
}

/// Process-wide memo of the provider. Construction runs at most once.
pub struct SharedModelProvider {
    cell: OnceCell<Arc<ModelProvider>>,
}

impl SharedModelProvider {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn get_or_init(&self, loader: &dyn ModelLoader) -> Arc<ModelProvider> {
        let provider = self
            .cell
            .get_or_init(|| Arc::new(ModelProvider::initialize(loader)));
        Arc::clone(provider)
    }

    pub fn get(&self) -> Option<Arc<ModelProvider>> {
        self.cell.get().cloned()
    }
}

impl Default for SharedModelProvider {
    fn default() -> Self {
        Self::new()
    }
}
