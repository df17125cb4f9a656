mod analysis_mode;
mod chart;
mod classification;
mod display_options;
mod entity;
mod input_method;
mod model_kind;
mod notice;
mod summary;
mod text_metrics;
mod uploaded_file;
mod word_cloud_image;
mod word_frequency;

pub use analysis_mode::AnalysisMode;
pub use chart::{ChartKind, ChartPoint, ChartSeries};
pub use classification::{
    CategoryScore, ClassificationResult, PROBABILITY_CHART_TITLE, UNSPECIFIED_CATEGORY,
};
pub use display_options::DisplayOptions;
pub use entity::{ENTITY_CHART_TITLE, Entity, label_counts};
pub use input_method::InputMethod;
pub use model_kind::ModelKind;
pub use notice::{Notice, NoticeLevel};
pub use summary::{NO_SUMMARY, SummaryResult, SummaryStats};
pub use text_metrics::{Readability, TextMetrics, count_sentences, count_words};
pub use uploaded_file::{UploadKind, UploadedFile};
pub use word_cloud_image::{WORD_CLOUD_TITLE, WordCloudImage};
pub use word_frequency::{TOP_WORDS_LIMIT, TOP_WORDS_TITLE, word_frequencies};
