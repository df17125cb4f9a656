mod http_entity_extractor;
mod http_model_client;
mod http_news_classifier;
mod http_text_summarizer;
mod model_factory;
mod scaffold_classifier;
mod scaffold_entity_extractor;
mod scaffold_summarizer;

pub use http_entity_extractor::HttpEntityExtractor;
pub use http_model_client::HttpModelClient;
pub use http_news_classifier::HttpNewsClassifier;
pub use http_text_summarizer::HttpTextSummarizer;
pub use model_factory::ModelFactory;
pub use scaffold_classifier::ScaffoldClassifier;
pub use scaffold_entity_extractor::ScaffoldEntityExtractor;
pub use scaffold_summarizer::ScaffoldSummarizer;
