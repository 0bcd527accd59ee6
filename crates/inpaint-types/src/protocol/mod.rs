//! Protocol definitions for the remote image model.
//!
//! Only the Gemini GenerateContent subset needed for masked image edits is
//! modelled here.

pub mod gemini;

pub use gemini::{
    GeminiCandidate, GeminiContent, GeminiErrorBody, GeminiErrorDetail, GeminiGenerationConfig,
    GeminiImageConfig, GeminiInlineData, GeminiPart, GeminiPromptFeedback, GeminiRole,
    GenerateContentRequest, GenerateContentResponse,
};
