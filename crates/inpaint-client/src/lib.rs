//! # Inpaint Client
//!
//! Sends a processed image, its mask and a tearing style to a Gemini
//! image model and classifies what comes back.
//!
//! ```text
//! GenerationRequest ──► GenerationClient ──► ImageModel (GeminiTransport)
//!                            │  ▲                     │
//!                            │  └── retry on 503/429 ─┘
//!                            ▼
//!                 Result<GeneratedImage, GenerationError>
//! ```
//!
//! Only overload and rate-limit failures are retried, with the delay before
//! retry `n` being `base_delay_ms * 2^n` (2 s then 4 s by default).

mod classify;
mod client;
mod error;
mod prompt;
mod request;
mod transport;

pub use classify::{classify_response, classify_transport_error, is_overloaded_message};
pub use client::GenerationClient;
pub use error::TransportError;
pub use prompt::{build_instruction, style_fragment};
pub use request::GenerationRequest;
pub use transport::{GeminiTransport, ImageModel};
