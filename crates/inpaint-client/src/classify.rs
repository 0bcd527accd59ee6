//! Mapping of one model attempt to a [`GenerationOutcome`].

use inpaint_types::protocol::{GeminiErrorBody, GeminiPart, GenerateContentResponse};
use inpaint_types::{GeneratedImage, GenerationOutcome};
use tracing::{debug, warn};

use crate::error::TransportError;

/// Finish reasons that mean a safety filter stopped the candidate.
const SAFETY_FINISH_REASONS: [&str; 4] = ["SAFETY", "IMAGE_SAFETY", "PROHIBITED_CONTENT", "BLOCKLIST"];

const NORMAL_STOP: &str = "STOP";

/// Substrings that mark an overloaded or rate-limited upstream.
const OVERLOAD_MARKERS: [&str; 4] = ["overloaded", "503", "UNAVAILABLE", "RESOURCE_EXHAUSTED"];

/// Refusal text is cut to this many characters.
const REFUSAL_PREVIEW_CHARS: usize = 100;

/// Classify a successfully parsed response body.
pub fn classify_response(response: &GenerateContentResponse) -> GenerationOutcome {
    if let Some(reason) = response.prompt_feedback.as_ref().and_then(|f| f.block_reason.as_deref()) {
        warn!("Prompt blocked: {}", reason);
        return GenerationOutcome::SafetyBlocked { reason: reason.to_string() };
    }

    let Some(candidate) = response.candidates.first() else {
        warn!("Response carried no candidates");
        return GenerationOutcome::FatalFailure { message: "No candidates in response".to_string() };
    };
    let finish_reason = candidate.finish_reason.as_deref().unwrap_or("UNSPECIFIED");

    if SAFETY_FINISH_REASONS.contains(&finish_reason) {
        warn!("Candidate blocked by safety filter: {}", finish_reason);
        return GenerationOutcome::SafetyBlocked { reason: finish_reason.to_string() };
    }

    let mut text = String::new();
    for part in candidate.parts() {
        match part {
            GeminiPart::InlineData { inline_data } if !inline_data.data.is_empty() => {
                debug!("Image part found ({})", inline_data.mime_type);
                return GenerationOutcome::Success(GeneratedImage::new(
                    inline_data.mime_type.clone(),
                    inline_data.data.clone(),
                ));
            }
            GeminiPart::Text { text: t } => text.push_str(t),
            _ => {}
        }
    }

    if !text.trim().is_empty() {
        warn!("Model returned text instead of an image");
        let preview: String = text.trim().chars().take(REFUSAL_PREVIEW_CHARS).collect();
        return GenerationOutcome::Refused { text: preview };
    }

    if finish_reason == NORMAL_STOP {
        warn!("Candidate finished normally with no content");
        return GenerationOutcome::FatalFailure {
            message: "No image or text in response".to_string(),
        };
    }

    GenerationOutcome::Malformed { finish_reason: finish_reason.to_string() }
}

/// Classify a failed HTTP exchange.
pub fn classify_transport_error(error: &TransportError) -> GenerationOutcome {
    match error {
        TransportError::Status { status, message } => {
            if matches!(status, 429 | 503) || is_overloaded_message(message) {
                GenerationOutcome::TransientFailure { message: status_message(*status, message) }
            } else {
                GenerationOutcome::FatalFailure { message: status_message(*status, message) }
            }
        }
        TransportError::Connection(message) | TransportError::Timeout(message)
            if is_overloaded_message(message) =>
        {
            GenerationOutcome::TransientFailure { message: message.clone() }
        }
        other => GenerationOutcome::FatalFailure { message: other.to_string() },
    }
}

/// Whether an upstream message signals overload.
pub fn is_overloaded_message(message: &str) -> bool {
    OVERLOAD_MARKERS.iter().any(|marker| message.contains(marker))
}

/// Prefer the structured Gemini error message over the raw body.
pub(crate) fn error_body_message(body: &str) -> String {
    match serde_json::from_str::<GeminiErrorBody>(body) {
        Ok(parsed) if !parsed.error.message.is_empty() => {
            if parsed.error.status.is_empty() {
                parsed.error.message
            } else {
                format!("{} ({})", parsed.error.message, parsed.error.status)
            }
        }
        _ => body.trim().to_string(),
    }
}

fn status_message(status: u16, message: &str) -> String {
    if message.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, message)
    }
}
