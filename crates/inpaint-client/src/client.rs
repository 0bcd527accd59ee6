use inpaint_types::protocol::GenerateContentRequest;
use inpaint_types::{
    ApiKey, GeneratedImage, GenerationConfig, GenerationError, GenerationOutcome, RetryConfig,
};
use tracing::{error, info, warn};

use crate::classify::{classify_response, classify_transport_error};
use crate::request::GenerationRequest;
use crate::transport::{GeminiTransport, ImageModel};

/// Generation client with bounded exponential backoff.
pub struct GenerationClient<M = GeminiTransport> {
    model: M,
    retry: RetryConfig,
    image_size: String,
}

impl GenerationClient<GeminiTransport> {
    /// Client talking to the configured Gemini endpoint.
    pub fn from_config(config: &GenerationConfig) -> Result<Self, GenerationError> {
        let transport = GeminiTransport::new(config)
            .map_err(|e| GenerationError::Fatal { message: e.to_string() })?;
        Ok(Self::with_model(transport, config.retry, config.image_size.clone()))
    }
}

impl<M: ImageModel> GenerationClient<M> {
    pub fn with_model(model: M, retry: RetryConfig, image_size: impl Into<String>) -> Self {
        Self { model, retry, image_size: image_size.into() }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Run one generation, retrying only transient failures.
    pub async fn generate(
        &self,
        api_key: &ApiKey,
        request: &GenerationRequest,
    ) -> Result<GeneratedImage, GenerationError> {
        let body = request.to_body(&self.image_size);
        let max_attempts = self.retry.max_attempts.max(1);
        let mut backoff = self.retry.backoff_table().into_iter();
        let mut attempt = 0;

        loop {
            attempt += 1;
            let outcome = self.attempt(api_key, &body).await;

            if outcome.is_retryable() {
                if let Some(delay) = backoff.next() {
                    warn!(
                        "Model overloaded (attempt {}/{}), retrying in {:?}",
                        attempt, max_attempts, delay
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }
            }

            match &outcome {
                GenerationOutcome::Success(_) => {
                    info!("Image generated (attempt {}/{})", attempt, max_attempts)
                }
                GenerationOutcome::TransientFailure { message } => {
                    error!("Model still overloaded after {} attempts: {}", attempt, message)
                }
                other => warn!("Generation stopped: {}", outcome_kind(other)),
            }
            return outcome.into_result(attempt);
        }
    }

    async fn attempt(
        &self,
        api_key: &ApiKey,
        body: &GenerateContentRequest,
    ) -> GenerationOutcome {
        match self.model.generate_content(api_key, body).await {
            Ok(response) => classify_response(&response),
            Err(e) => classify_transport_error(&e),
        }
    }
}

fn outcome_kind(outcome: &GenerationOutcome) -> &'static str {
    match outcome {
        GenerationOutcome::Success(_) => "success",
        GenerationOutcome::SafetyBlocked { .. } => "safety_blocked",
        GenerationOutcome::Refused { .. } => "refused",
        GenerationOutcome::Malformed { .. } => "malformed",
        GenerationOutcome::TransientFailure { .. } => "transient_failure",
        GenerationOutcome::FatalFailure { .. } => "fatal_failure",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use async_trait::async_trait;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use inpaint_types::protocol::GenerateContentResponse;
    use inpaint_types::TearingStyle;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::io::Cursor;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::time::Instant;

    type Reply = Result<GenerateContentResponse, TransportError>;

    /// Model that replays a fixed script and records call times.
    struct ScriptedModel {
        replies: Mutex<VecDeque<Reply>>,
        calls: Mutex<Vec<Instant>>,
    }

    impl ScriptedModel {
        fn new(replies: Vec<Reply>) -> Self {
            Self { replies: Mutex::new(replies.into()), calls: Mutex::new(Vec::new()) }
        }

        fn call_times(&self) -> Vec<Instant> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ImageModel for ScriptedModel {
        async fn generate_content(
            &self,
            _api_key: &ApiKey,
            _request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse, TransportError> {
            self.calls.lock().unwrap().push(Instant::now());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Connection("script exhausted".to_string())))
        }
    }

    fn overloaded() -> Reply {
        Err(TransportError::Status { status: 503, message: "The model is overloaded.".to_string() })
    }

    fn image_reply() -> Reply {
        Ok(serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "inlineData": { "mimeType": "image/png", "data": "AAAA" } }] },
                "finishReason": "STOP"
            }]
        }))
        .unwrap())
    }

    fn text_reply(text: &str) -> Reply {
        Ok(serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] }, "finishReason": "STOP" }]
        }))
        .unwrap())
    }

    fn request() -> GenerationRequest {
        let encode = |img: RgbaImage| {
            let mut out = Cursor::new(Vec::new());
            DynamicImage::ImageRgba8(img).write_to(&mut out, ImageFormat::Png).unwrap();
            out.into_inner()
        };
        let image = encode(RgbaImage::from_pixel(16, 16, Rgba([50, 50, 50, 255])));
        let mut mask = RgbaImage::new(16, 16);
        mask.put_pixel(8, 8, Rgba([255, 0, 0, 153]));
        GenerationRequest::from_png(&image, &encode(mask), TearingStyle::Wild).unwrap()
    }

    fn key() -> ApiKey {
        ApiKey::new("scripted-key").unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_three_transient_failures_exhaust_budget() {
        let client = GenerationClient::with_model(
            ScriptedModel::new(vec![overloaded(), overloaded(), overloaded(), image_reply()]),
            RetryConfig::default(),
            "1K",
        );
        let started = Instant::now();

        let err = client.generate(&key(), &request()).await.unwrap_err();

        assert!(matches!(err, GenerationError::Overloaded { attempts: 3, .. }));
        let calls = client.model().call_times();
        assert_eq!(calls.len(), 3, "no fourth attempt");
        assert_eq!(calls[1] - calls[0], Duration::from_secs(2));
        assert_eq!(calls[2] - calls[1], Duration::from_secs(4));
        assert_eq!(started.elapsed(), Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_transient_failure() {
        let client = GenerationClient::with_model(
            ScriptedModel::new(vec![overloaded(), image_reply()]),
            RetryConfig::default(),
            "1K",
        );

        let image = client.generate(&key(), &request()).await.unwrap();
        assert_eq!(image.data, "AAAA");
        assert_eq!(client.model().call_times().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refusal_is_not_retried() {
        let client = GenerationClient::with_model(
            ScriptedModel::new(vec![text_reply("I cannot do this"), image_reply()]),
            RetryConfig::default(),
            "1K",
        );
        let started = Instant::now();

        let err = client.generate(&key(), &request()).await.unwrap_err();

        assert_eq!(err, GenerationError::Refused { text: "I cannot do this".to_string() });
        assert_eq!(client.model().call_times().len(), 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fatal_status_is_not_retried() {
        let client = GenerationClient::with_model(
            ScriptedModel::new(vec![
                Err(TransportError::Status { status: 400, message: "bad request".to_string() }),
                image_reply(),
            ]),
            RetryConfig::default(),
            "1K",
        );

        let err = client.generate(&key(), &request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Fatal { .. }));
        assert_eq!(client.model().call_times().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_retry_budget() {
        let retry = RetryConfig { max_attempts: 2, base_delay_ms: 100 };
        let client = GenerationClient::with_model(
            ScriptedModel::new(vec![overloaded(), overloaded()]),
            retry,
            "1K",
        );
        let started = Instant::now();

        let err = client.generate(&key(), &request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Overloaded { attempts: 2, .. }));
        assert_eq!(started.elapsed(), Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_follow_backoff_table() {
        let retry = RetryConfig { max_attempts: 4, base_delay_ms: 50 };
        let client = GenerationClient::with_model(
            ScriptedModel::new(vec![overloaded(), overloaded(), overloaded(), overloaded()]),
            retry,
            "1K",
        );

        let err = client.generate(&key(), &request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Overloaded { attempts: 4, .. }));

        let calls = client.model().call_times();
        let waits: Vec<Duration> = calls.windows(2).map(|w| w[1] - w[0]).collect();
        assert_eq!(waits, retry.backoff_table());
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_attempt_never_sleeps() {
        let retry = RetryConfig { max_attempts: 1, base_delay_ms: 1000 };
        let client = GenerationClient::with_model(
            ScriptedModel::new(vec![overloaded(), image_reply()]),
            retry,
            "1K",
        );
        let started = Instant::now();

        let err = client.generate(&key(), &request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Overloaded { attempts: 1, .. }));
        assert_eq!(client.model().call_times().len(), 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
