//! `data:` URL helpers shared by the upload boundary and the generation client.

use base64::Engine as _;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::ImageError;

static IMAGE_DATA_URL_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^data:image/[\w.+-]+;base64,").ok());

/// Remove a leading `data:image/<type>;base64,` prefix if present.
pub fn strip_image_prefix(input: &str) -> &str {
    let trimmed = input.trim();
    match IMAGE_DATA_URL_PREFIX.as_ref().and_then(|re| re.find(trimmed)) {
        Some(m) => &trimmed[m.end()..],
        None => trimmed,
    }
}

/// Encode raw bytes as a `data:` URL.
pub fn encode(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, base64::engine::general_purpose::STANDARD.encode(bytes))
}

/// Decode a `data:` URL (or bare base64) into bytes.
pub fn decode(input: &str) -> Result<Vec<u8>, ImageError> {
    let payload = strip_image_prefix(input);
    if payload.is_empty() {
        return Err(ImageError::InvalidDataUrl { message: "empty payload".to_string() });
    }
    if payload.starts_with("data:") {
        return Err(ImageError::InvalidDataUrl {
            message: "only base64 image data URLs are supported".to_string(),
        });
    }
    base64::engine::general_purpose::STANDARD
        .decode(payload.as_bytes())
        .map_err(|e| ImageError::InvalidDataUrl { message: e.to_string() })
}
