//! Google Gemini GenerateContent API types (image editing subset).

use serde::{Deserialize, Serialize};

/// Gemini content role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum GeminiRole {
    User,
    Model,
}

/// Gemini content part.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GeminiPart {
    InlineData {
        #[serde(rename = "inlineData", alias = "inline_data")]
        inline_data: GeminiInlineData,
    },
    Text {
        text: String,
    },
    /// Parts this client does not interpret (function calls, thoughts, ...)
    Other(serde_json::Value),
}

impl GeminiPart {
    /// Inline PNG part from an already prefix-stripped base64 payload.
    pub fn png(data: impl Into<String>) -> Self {
        Self::InlineData {
            inline_data: GeminiInlineData { mime_type: "image/png".to_string(), data: data.into() },
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

/// Gemini inline data (for images, etc).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeminiInlineData {
    #[serde(alias = "mime_type")]
    pub mime_type: String,
    pub data: String,
}

/// One turn of conversation content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<GeminiRole>,
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// Image output options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeminiImageConfig {
    pub aspect_ratio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<String>,
}

/// Generation options block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub response_modalities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_config: Option<GeminiImageConfig>,
}

/// `models/{model}:generateContent` request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(default)]
    pub generation_config: GeminiGenerationConfig,
}

/// One response candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GeminiCandidate {
    /// Parts of the candidate content, empty when the model returned none.
    pub fn parts(&self) -> &[GeminiPart] {
        self.content.as_ref().map(|c| c.parts.as_slice()).unwrap_or(&[])
    }
}

/// Prompt-level feedback (set when the whole request was blocked).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeminiPromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// `generateContent` response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    pub prompt_feedback: Option<GeminiPromptFeedback>,
    #[serde(default)]
    pub usage_metadata: Option<GeminiUsageMetadata>,
}

/// Gemini usage metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeminiUsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeminiErrorBody {
    #[serde(default)]
    pub error: GeminiErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeminiErrorDetail {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = GenerateContentRequest {
            contents: vec![GeminiContent {
                role: None,
                parts: vec![GeminiPart::png("AAAA"), GeminiPart::text("edit")],
            }],
            generation_config: GeminiGenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
                image_config: Some(GeminiImageConfig {
                    aspect_ratio: "16:9".to_string(),
                    image_size: Some("1K".to_string()),
                }),
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(json["contents"][0]["parts"][1]["text"], "edit");
        assert_eq!(json["generationConfig"]["imageConfig"]["aspectRatio"], "16:9");
        assert_eq!(json["generationConfig"]["imageConfig"]["imageSize"], "1K");
        assert!(json["contents"][0].get("role").is_none());
    }

    #[test]
    fn test_response_parsing() {
        let body = serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "Here you go"},
                        {"inlineData": {"mimeType": "image/png", "data": "iVBOR"}}
                    ]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 10, "totalTokenCount": 20}
        });

        let resp: GenerateContentResponse = serde_json::from_value(body).unwrap();
        let candidate = &resp.candidates[0];
        assert_eq!(candidate.finish_reason.as_deref(), Some("STOP"));
        assert_eq!(candidate.parts().len(), 2);
        assert!(matches!(&candidate.parts()[1], GeminiPart::InlineData { inline_data } if inline_data.data == "iVBOR"));
        assert_eq!(resp.usage_metadata.map(|u| u.total_token_count), Some(20));
    }

    #[test]
    fn test_candidate_without_content() {
        let resp: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert!(resp.candidates[0].parts().is_empty());
    }

    #[test]
    fn test_unknown_part_is_kept() {
        let content: GeminiContent =
            serde_json::from_str(r#"{"parts":[{"functionCall":{"name":"f"}}]}"#).unwrap();
        assert!(matches!(content.parts[0], GeminiPart::Other(_)));
    }

    #[test]
    fn test_error_body() {
        let body: GeminiErrorBody = serde_json::from_str(
            r#"{"error":{"code":503,"message":"The model is overloaded.","status":"UNAVAILABLE"}}"#,
        )
        .unwrap();
        assert_eq!(body.error.code, 503);
        assert_eq!(body.error.status, "UNAVAILABLE");
    }
}
