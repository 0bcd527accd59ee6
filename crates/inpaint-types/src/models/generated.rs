//! Result image returned by the model.

use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::path::Path;

use crate::error::ImageError;

/// Inline image produced by a successful generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedImage {
    /// MIME type reported by the model
    pub mime_type: String,
    /// Base64 payload without any data-URL prefix
    pub data: String,
}

impl GeneratedImage {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self { mime_type: mime_type.into(), data: data.into() }
    }

    /// `data:` URL suitable for direct display.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decode the base64 payload.
    pub fn decode_bytes(&self) -> Result<Vec<u8>, ImageError> {
        base64::engine::general_purpose::STANDARD
            .decode(self.data.as_bytes())
            .map_err(|e| ImageError::InvalidDataUrl { message: e.to_string() })
    }

    /// Encode the result as PNG bytes, transcoding if the model returned another format.
    pub fn to_png(&self) -> Result<Vec<u8>, ImageError> {
        let bytes = self.decode_bytes()?;
        if self.mime_type.eq_ignore_ascii_case("image/png") {
            return Ok(bytes);
        }
        let img = image::load_from_memory(&bytes).map_err(|e| ImageError::decode(&e))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).map_err(|e| ImageError::encode(&e))?;
        Ok(out.into_inner())
    }

    /// Write the result to disk as a PNG file.
    pub fn save_png(&self, path: &Path) -> Result<(), ImageError> {
        let png = self.to_png()?;
        std::fs::write(path, png).map_err(|e| ImageError::Encode { message: e.to_string() })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url() {
        let img = GeneratedImage::new("image/png", "AAAA");
        assert_eq!(img.data_url(), "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_invalid_base64() {
        let img = GeneratedImage::new("image/png", "not base64 !!");
        assert!(matches!(img.decode_bytes(), Err(ImageError::InvalidDataUrl { .. })));
    }

    #[test]
    fn test_jpeg_is_transcoded_to_png() {
        let rgb = image::RgbImage::from_pixel(4, 3, image::Rgb([10, 200, 30]));
        let mut jpeg = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(rgb).write_to(&mut jpeg, image::ImageFormat::Jpeg).unwrap();
        let data = base64::engine::general_purpose::STANDARD.encode(jpeg.into_inner());

        let png = GeneratedImage::new("image/jpeg", data).to_png().unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
        assert_eq!(&png[..4], b"\x89PNG");
    }
}
