//! Image decoding and encoding errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while turning uploads into bitmaps or bitmaps into PNG payloads.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ImageError {
    /// Source bytes could not be decoded as an image
    #[error("Failed to decode image: {message}")]
    Decode {
        /// Decoder message
        message: String,
    },

    /// Decoded image has a zero width or height
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// PNG encoding of a raster failed
    #[error("Failed to encode image: {message}")]
    Encode {
        /// Encoder message
        message: String,
    },

    /// A data URL was malformed or not base64
    #[error("Invalid data URL: {message}")]
    InvalidDataUrl { message: String },
}

impl ImageError {
    /// Create a decode error from an `image` crate error.
    pub fn decode(e: &image::ImageError) -> Self {
        Self::Decode { message: e.to_string() }
    }

    /// Create an encode error from an `image` crate error.
    pub fn encode(e: &image::ImageError) -> Self {
        Self::Encode { message: e.to_string() }
    }
}
