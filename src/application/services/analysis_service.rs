use std::sync::Arc;

use serde::Serialize;

use crate::application::ports::{ModelError, WordCloudRenderer};
use crate::application::services::ModelProvider;
use crate::domain::{
    AnalysisMode, ChartSeries, DisplayOptions, ENTITY_CHART_TITLE, Entity, ModelKind,
    SummaryStats, TOP_WORDS_LIMIT, TOP_WORDS_TITLE, WordCloudImage, label_counts,
    word_frequencies,
};

/// Result of one display region. A region never affects its neighbours.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum SectionOutcome<T> {
    Ready(T),
    Unavailable(String),
    Failed(String),
}

impl<T> SectionOutcome<T> {
    fn unavailable(kind: ModelKind) -> Self {
        SectionOutcome::Unavailable(kind.unavailable_message().to_string())
    }

    fn failed(kind: ModelKind, error: &ModelError) -> Self {
        SectionOutcome::Failed(kind.invocation_failure_message(&error.to_string()))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            SectionOutcome::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationView {
    pub category: String,
    /// Present only when requested and reported by the classifier.
    pub confidence: Option<f64>,
    pub probabilities: Option<ChartSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub summary: String,
    pub stats: Option<SummaryStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitiesView {
    pub entities: Vec<Entity>,
    pub label_chart: Option<ChartSeries>,
}

impl EntitiesView {
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComprehensiveReport {
    pub classification: SectionOutcome<ClassificationView>,
    pub summary: SectionOutcome<SummaryView>,
    pub entities: SectionOutcome<EntitiesView>,
    pub top_words: ChartSeries,
    pub word_cloud: Option<SectionOutcome<WordCloudImage>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "result", rename_all = "lowercase")]
pub enum AnalysisReport {
    Classification(SectionOutcome<ClassificationView>),
    Summarization(SectionOutcome<SummaryView>),
    Entities(SectionOutcome<EntitiesView>),
    Comprehensive(ComprehensiveReport),
}

impl AnalysisReport {
    pub fn mode(&self) -> AnalysisMode {
        match self {
            AnalysisReport::Classification(_) => AnalysisMode::Classification,
            AnalysisReport::Summarization(_) => AnalysisMode::Summarization,
            AnalysisReport::Entities(_) => AnalysisMode::Entities,
            AnalysisReport::Comprehensive(_) => AnalysisMode::Comprehensive,
        }
    }
}

/// Routes text to the collaborators for the selected mode and shapes their
/// output for display.
pub struct AnalysisService {
    models: Arc<ModelProvider>,
    word_cloud: Arc<dyn WordCloudRenderer>,
}

impl AnalysisService {
    pub fn new(models: Arc<ModelProvider>, word_cloud: Arc<dyn WordCloudRenderer>) -> Self {
        Self { models, word_cloud }
    }

    pub fn models(&self) -> &ModelProvider {
        &self.models
    }

    /// Returns `None` for empty text: the trigger is inert without input.
    #[tracing::instrument(skip(self, text, options), fields(chars = text.chars().count()))]
    pub async fn analyze(
        &self,
        text: &str,
        mode: AnalysisMode,
        options: DisplayOptions,
    ) -> Option<AnalysisReport> {
        if text.is_empty() {
            tracing::debug!("Analysis trigger ignored for empty input");
            return None;
        }

        let report = match mode {
            AnalysisMode::Classification => AnalysisReport::Classification(
                self.classify(text, options.show_confidence, options.show_visualizations)
                    .await,
            ),
            AnalysisMode::Summarization => {
                AnalysisReport::Summarization(self.summarize(text, options.show_stats).await)
            }
            AnalysisMode::Entities => {
                AnalysisReport::Entities(self.extract(text, options.show_visualizations).await)
            }
            AnalysisMode::Comprehensive => {
                AnalysisReport::Comprehensive(self.comprehensive(text, options).await)
            }
        };

        tracing::info!(mode = %mode, "Analysis complete");
        Some(report)
    }

    async fn classify(
        &self,
        text: &str,
        show_confidence: bool,
        show_chart: bool,
    ) -> SectionOutcome<ClassificationView> {
        let Some(classifier) = self.models.classifier() else {
            tracing::warn!("Classification requested without a classifier");
            return SectionOutcome::unavailable(ModelKind::Classifier);
        };

        match classifier.classify(text).await {
            Ok(result) => {
                tracing::debug!(
                    category = result.category_or_default(),
                    confidence = ?result.confidence,
                    "Classification result"
                );
                SectionOutcome::Ready(ClassificationView {
                    category: result.category_or_default().to_string(),
                    confidence: result.clamped_confidence().filter(|_| show_confidence),
                    probabilities: result.probability_series().filter(|_| show_chart),
                })
            }
            Err(e) => {
                tracing::error!(error = %e, "Classification failed");
                SectionOutcome::failed(ModelKind::Classifier, &e)
            }
        }
    }

    async fn summarize(&self, text: &str, show_stats: bool) -> SectionOutcome<SummaryView> {
        let Some(summarizer) = self.models.summarizer() else {
            tracing::warn!("Summarization requested without a summarizer");
            return SectionOutcome::unavailable(ModelKind::Summarizer);
        };

        match summarizer.summarize(text).await {
            Ok(result) => {
                let stats = show_stats.then(|| SummaryStats::compute(text, &result));
                SectionOutcome::Ready(SummaryView {
                    summary: result.summary_or_default().to_string(),
                    stats,
                })
            }
            Err(e) => {
                tracing::error!(error = %e, "Summarization failed");
                SectionOutcome::failed(ModelKind::Summarizer, &e)
            }
        }
    }

    async fn extract(&self, text: &str, show_chart: bool) -> SectionOutcome<EntitiesView> {
        let Some(extractor) = self.models.extractor() else {
            tracing::warn!("Entity extraction requested without an extractor");
            return SectionOutcome::unavailable(ModelKind::Extractor);
        };

        match extractor.extract(text).await {
            Ok(entities) => {
                tracing::debug!(count = entities.len(), "Entities extracted");
                let label_chart = (show_chart && !entities.is_empty())
                    .then(|| ChartSeries::from_counts(ENTITY_CHART_TITLE, &label_counts(&entities)));
                SectionOutcome::Ready(EntitiesView {
                    entities,
                    label_chart,
                })
            }
            Err(e) => {
                tracing::error!(error = %e, "Entity extraction failed");
                SectionOutcome::failed(ModelKind::Extractor, &e)
            }
        }
    }

    async fn comprehensive(&self, text: &str, options: DisplayOptions) -> ComprehensiveReport {
        let (classification, summary, entities) = tokio::join!(
            self.classify(text, true, false),
            self.summarize(text, false),
            self.extract(text, false),
        );

        let top_words =
            ChartSeries::from_counts(TOP_WORDS_TITLE, &word_frequencies(text, TOP_WORDS_LIMIT));

        let word_cloud = if options.show_visualizations {
            Some(self.render_word_cloud(text).await)
        } else {
            None
        };

        ComprehensiveReport {
            classification,
            summary,
            entities,
            top_words,
            word_cloud,
        }
    }

    async fn render_word_cloud(&self, text: &str) -> SectionOutcome<WordCloudImage> {
        let renderer = Arc::clone(&self.word_cloud);
        let owned = text.to_string();

        match tokio::task::spawn_blocking(move || renderer.render(&owned)).await {
            Ok(Ok(image)) => SectionOutcome::Ready(image),
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Word cloud rendering failed");
                SectionOutcome::Failed(format!("خطأ في إنشاء سحابة الكلمات: {}", e))
            }
            Err(e) => {
                tracing::error!(error = %e, "Word cloud task aborted");
                SectionOutcome::Failed(format!("خطأ في إنشاء سحابة الكلمات: {}", e))
            }
        }
    }
}
