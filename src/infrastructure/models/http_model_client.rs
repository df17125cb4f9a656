use std::time::Duration;

use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::{ModelError, ModelLoadError};

#[derive(Serialize)]
struct TextRequest<'a> {
    text: &'a str,
}

/// JSON-over-HTTP transport shared by the remote collaborators. Every model
/// endpoint takes `{"text": ...}` and answers with free-form JSON.
pub struct HttpModelClient {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl HttpModelClient {
    pub fn new(
        endpoint: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ModelLoadError> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            ModelLoadError::InitializationFailed(format!("invalid endpoint {}: {}", endpoint, e))
        })?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ModelLoadError::InitializationFailed(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }

    pub async fn post_text(&self, text: &str) -> Result<Value, ModelError> {
        let mut request = self
            .client
            .post(self.endpoint.clone())
            .json(&TextRequest { text });

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ModelError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::RequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))
    }
}
