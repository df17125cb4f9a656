use async_trait::async_trait;

use super::HttpModelClient;
use crate::application::ports::{ModelError, TextSummarizer};
use crate::domain::SummaryResult;

pub struct HttpTextSummarizer {
    client: HttpModelClient,
}

impl HttpTextSummarizer {
    pub fn new(client: HttpModelClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TextSummarizer for HttpTextSummarizer {
    async fn summarize(&self, text: &str) -> Result<SummaryResult, ModelError> {
        let value = self.client.post_text(text).await?;

        // Either `{"summary": "..."}` or a bare string.
        if !(value.is_object() || value.is_string()) {
            return Err(ModelError::InvalidResponse(
                "summarizer response is neither an object nor a string".to_string(),
            ));
        }

        Ok(SummaryResult::from_json(&value))
    }
}
