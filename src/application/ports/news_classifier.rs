use async_trait::async_trait;

use super::ModelError;
use crate::domain::ClassificationResult;

#[async_trait]
pub trait NewsClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<ClassificationResult, ModelError>;
}
