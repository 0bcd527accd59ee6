//! HTTP transport to the image model.

use std::time::Duration;

use async_trait::async_trait;
use inpaint_types::protocol::{GenerateContentRequest, GenerateContentResponse};
use inpaint_types::{ApiKey, GenerationConfig};
use reqwest::Client;
use tracing::debug;

use crate::classify::error_body_message;
use crate::error::TransportError;

/// One request/response exchange with a GenerateContent-compatible model.
#[async_trait]
pub trait ImageModel: Send + Sync {
    async fn generate_content(
        &self,
        api_key: &ApiKey,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, TransportError>;
}

/// Gemini REST endpoint over reqwest.
pub struct GeminiTransport {
    client: Client,
    base_url: String,
    model: String,
}

impl GeminiTransport {
    pub fn new(config: &GenerationConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TransportError::Connection(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl ImageModel for GeminiTransport {
    async fn generate_content(
        &self,
        api_key: &ApiKey,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, TransportError> {
        let url = self.endpoint();
        debug!("POST {}", url);

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key.expose())
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: error_body_message(&body),
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| TransportError::InvalidResponse(e.to_string()))
    }
}
