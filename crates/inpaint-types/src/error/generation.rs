//! Generation (remote model) errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Final failure of a generation request as seen by callers.
///
/// The retry loop is internal to the client, so `Overloaded` only appears
/// after the attempt budget is spent.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum GenerationError {
    /// No API key configured for the session
    #[error("API key is missing")]
    MissingApiKey,

    /// Mask has no painted pixels
    #[error("Mask is empty: paint over the area to edit first")]
    EmptyMask,

    /// Mask and image are not the same size
    #[error("Mask size {mask_width}x{mask_height} does not match image size {image_width}x{image_height}")]
    DimensionMismatch {
        image_width: u32,
        image_height: u32,
        mask_width: u32,
        mask_height: u32,
    },

    /// Request inputs could not be read
    #[error("Invalid generation input: {message}")]
    InvalidInput { message: String },

    /// Model stopped for safety reasons
    #[error("Generation was blocked by the safety filter ({reason}). Try a different area or style.")]
    SafetyBlocked { reason: String },

    /// Model answered with text instead of an image
    #[error("The model did not produce an image: \"{text}...\"")]
    Refused { text: String },

    /// Response had neither image nor text
    #[error("Generation did not complete (finish reason: {finish_reason})")]
    Malformed { finish_reason: String },

    /// Transient overload persisted through every attempt
    #[error("The server is busy after {attempts} attempts, please try again later: {message}")]
    Overloaded { attempts: u32, message: String },

    /// Non-retryable transport, auth or protocol failure
    #[error("Image generation failed: {message}")]
    Fatal { message: String },
}

impl GenerationError {
    /// Whether the failure came from the caller's inputs rather than the model.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingApiKey
                | Self::EmptyMask
                | Self::DimensionMismatch { .. }
                | Self::InvalidInput { .. }
        )
    }

    /// Whether the user has to change mask or style to get a different result.
    pub fn needs_new_input(&self) -> bool {
        matches!(self, Self::SafetyBlocked { .. } | Self::Refused { .. })
    }

    /// Single inline message shown to the user.
    pub fn user_message(&self) -> String {
        format!("Generation failed. {}", self)
    }
}
