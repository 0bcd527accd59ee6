//! Classification of a single model attempt.

use serde::{Deserialize, Serialize};

use super::generated::GeneratedImage;
use crate::error::GenerationError;

/// Result of one attempt against the remote model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GenerationOutcome {
    /// Model returned an image
    Success(GeneratedImage),
    /// Prompt or candidate was stopped by a safety filter
    SafetyBlocked { reason: String },
    /// Model answered with text only
    Refused { text: String },
    /// No usable content and no normal stop
    Malformed { finish_reason: String },
    /// Overload or rate limit; eligible for retry
    TransientFailure { message: String },
    /// Anything else
    FatalFailure { message: String },
}

impl GenerationOutcome {
    /// Only overload/rate-limit signals are retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::TransientFailure { .. })
    }

    /// Convert a final outcome into the caller-facing result.
    ///
    /// `attempts` is only reported for transient failures that exhausted the budget.
    pub fn into_result(self, attempts: u32) -> Result<GeneratedImage, GenerationError> {
        match self {
            Self::Success(image) => Ok(image),
            Self::SafetyBlocked { reason } => Err(GenerationError::SafetyBlocked { reason }),
            Self::Refused { text } => Err(GenerationError::Refused { text }),
            Self::Malformed { finish_reason } => Err(GenerationError::Malformed { finish_reason }),
            Self::TransientFailure { message } => {
                Err(GenerationError::Overloaded { attempts, message })
            }
            Self::FatalFailure { message } => Err(GenerationError::Fatal { message }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_transient_is_retryable() {
        assert!(GenerationOutcome::TransientFailure { message: "503".to_string() }.is_retryable());
        assert!(!GenerationOutcome::Refused { text: "no".to_string() }.is_retryable());
        assert!(!GenerationOutcome::FatalFailure { message: "401".to_string() }.is_retryable());
    }

    #[test]
    fn test_into_result_maps_refusal() {
        let result = GenerationOutcome::Refused { text: "I cannot do this".to_string() }.into_result(1);
        assert_eq!(result, Err(GenerationError::Refused { text: "I cannot do this".to_string() }));
    }

    #[test]
    fn test_into_result_reports_attempts() {
        let result =
            GenerationOutcome::TransientFailure { message: "overloaded".to_string() }.into_result(3);
        assert!(matches!(result, Err(GenerationError::Overloaded { attempts: 3, .. })));
    }
}
