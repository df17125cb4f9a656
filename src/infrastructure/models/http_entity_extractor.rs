use async_trait::async_trait;
use serde_json::Value;

use super::HttpModelClient;
use crate::application::ports::{EntityExtractor, ModelError};
use crate::domain::Entity;

pub struct HttpEntityExtractor {
    client: HttpModelClient,
}

impl HttpEntityExtractor {
    pub fn new(client: HttpModelClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EntityExtractor for HttpEntityExtractor {
    async fn extract(&self, text: &str) -> Result<Vec<Entity>, ModelError> {
        let value = self.client.post_text(text).await?;

        let records = match &value {
            Value::Array(items) => items,
            Value::Object(map) => map
                .get("entities")
                .and_then(Value::as_array)
                .ok_or_else(|| {
                    ModelError::InvalidResponse("missing `entities` array".to_string())
                })?,
            _ => {
                return Err(ModelError::InvalidResponse(
                    "extractor response is not a list of entities".to_string(),
                ));
            }
        };

        Ok(records.iter().filter_map(Entity::from_json).collect())
    }
}
