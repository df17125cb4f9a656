mod analysis_service;
mod input_collector;
mod model_provider;

pub use analysis_service::{
    AnalysisReport, AnalysisService, ClassificationView, ComprehensiveReport, EntitiesView,
    SectionOutcome, SummaryView,
};
pub use input_collector::{
    CollectedInput, InputCollector, InputRequest, TXT_ONLY_WARNING, UNSUPPORTED_FILE_WARNING,
    URL_IN_DEVELOPMENT, Upload,
};
pub use model_provider::{ModelAvailability, ModelProvider, SharedModelProvider};
