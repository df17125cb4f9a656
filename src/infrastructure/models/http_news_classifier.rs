use async_trait::async_trait;

use super::HttpModelClient;
use crate::application::ports::{ModelError, NewsClassifier};
use crate::domain::ClassificationResult;

pub struct HttpNewsClassifier {
    client: HttpModelClient,
}

impl HttpNewsClassifier {
    pub fn new(client: HttpModelClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NewsClassifier for HttpNewsClassifier {
    async fn classify(&self, text: &str) -> Result<ClassificationResult, ModelError> {
        let value = self.client.post_text(text).await?;

        if !value.is_object() {
            return Err(ModelError::InvalidResponse(
                "classifier response is not a JSON object".to_string(),
            ));
        }

        Ok(ClassificationResult::from_json(&value))
    }
}
