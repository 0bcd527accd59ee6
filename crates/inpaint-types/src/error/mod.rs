//! Typed error definitions for Inpaint Studio.
//!
//! This module provides a structured error hierarchy with specific error types
//! for different domains. All errors are designed to be:
//!
//! - **Serializable** for IPC/front-end consumption via serde
//! - **Displayable** for logging and inline user messages via Display
//! - **Matchable** for error handling logic via enum variants
//! - **Composable** via thiserror derive macros

mod config;
mod generation;
mod image;

pub use self::image::ImageError;
pub use config::ConfigError;
pub use generation::GenerationError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps an image decode/encode error
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    /// Wraps a remote generation error
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;
