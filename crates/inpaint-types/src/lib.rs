//! # Inpaint Types
//!
//! Core types, models, and error definitions for Inpaint Studio.
//!
//! This crate provides the foundational type system for the workspace:
//!
//! - **`error`** - Typed error hierarchy for images, generation, and configuration
//! - **`models`** - Domain models (ratios, styles, config, results)
//! - **`protocol`** - Gemini GenerateContent message types
//! - **`data_url`** - `data:` URL encoding shared by upload and client
//!
//! ## Architecture Role
//!
//! `inpaint-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!                inpaint-types (this crate)
//!                        │
//!              ┌─────────┴─────────┐
//!              ▼                   ▼
//!        inpaint-core        inpaint-client
//!              │                   │
//!              └─────────┬─────────┘
//!                        ▼
//!                   inpaint-cli
//! ```

pub mod data_url;
pub mod error;
pub mod models;
pub mod protocol;

// Re-export error types for convenience
pub use error::{ConfigError, GenerationError, ImageError, Result, TypedError};

// Re-export core model types
pub use models::{
    ApiKey, AppConfig, EditorConfig, GeneratedImage, GenerationConfig, GenerationOutcome,
    RetryConfig, SupportedRatio, TearingStyle, SUPPORTED_RATIOS,
};
