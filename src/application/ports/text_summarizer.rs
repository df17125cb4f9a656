use async_trait::async_trait;

use super::ModelError;
use crate::domain::SummaryResult;

#[async_trait]
pub trait TextSummarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<SummaryResult, ModelError>;
}
