//! Core domain models for Inpaint Studio.
//!
//! This module contains the data structures shared by the normalizer, the
//! mask canvas, the generation client and the session shell.

mod api_key;
mod config;
mod generated;
mod outcome;
mod ratio;
mod style;

// Re-export all models
pub use api_key::ApiKey;
pub use config::{AppConfig, EditorConfig, GenerationConfig, RetryConfig};
pub use generated::GeneratedImage;
pub use outcome::GenerationOutcome;
pub use ratio::{SupportedRatio, SUPPORTED_RATIOS};
pub use style::TearingStyle;
