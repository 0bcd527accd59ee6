//! Error types for the transport layer.

use thiserror::Error;

/// Failure of a single HTTP exchange with the model endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Could not reach the server or the connection dropped.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Request exceeded the per-attempt timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Server answered with a non-success status.
    #[error("Server error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error message from the server body, if any.
        message: String,
    },

    /// Body could not be parsed as a GenerateContent response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else if e.is_decode() {
            Self::InvalidResponse(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status { status: status.as_u16(), message: e.to_string() }
        } else {
            Self::Connection(e.to_string())
        }
    }
}
