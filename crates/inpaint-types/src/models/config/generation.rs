//! Remote model configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::Validate;

/// Public Gemini endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Image-capable model used for edits.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-image-preview";

/// Settings for the generation client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct GenerationConfig {
    /// API base URL (without the `/models/...` suffix)
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier
    #[validate(length(min = 1_u64))]
    #[serde(default = "default_model")]
    pub model: String,
    /// Output resolution tier requested from the model
    #[validate(length(min = 1_u64))]
    #[serde(default = "default_image_size")]
    pub image_size: String,
    /// Per-attempt HTTP timeout in seconds
    #[validate(range(min = 5_u64, max = 600_u64))]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Retry policy for transient failures
    #[serde(default)]
    #[validate(nested)]
    pub retry: RetryConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_image_size() -> String {
    "1K".to_string()
}

fn default_timeout_secs() -> u64 {
    180
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            image_size: default_image_size(),
            timeout_secs: default_timeout_secs(),
            retry: RetryConfig::default(),
        }
    }
}

/// Bounded exponential backoff for overloaded upstreams.
///
/// The delay before retry `n` (1-based) is `base_delay_ms * 2^n`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct RetryConfig {
    /// Total attempts including the first one
    #[validate(range(min = 1_u32, max = 10_u32))]
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base delay in milliseconds
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1000
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_attempts: default_max_attempts(), base_delay_ms: default_base_delay_ms() }
    }
}

impl RetryConfig {
    /// Delay to wait before retry number `retry` (1 for the first retry).
    pub fn delay_before_retry(&self, retry: u32) -> Duration {
        let factor = 2_u64.saturating_pow(retry);
        Duration::from_millis(self.base_delay_ms.saturating_mul(factor))
    }

    /// Full backoff table, one entry per possible retry.
    pub fn backoff_table(&self) -> Vec<Duration> {
        (1..self.max_attempts).map(|n| self.delay_before_retry(n)).collect()
    }
}
