//! Validated input for one generation.

use std::io::Cursor;

use image::ImageReader;
use inpaint_types::protocol::{
    GeminiContent, GeminiGenerationConfig, GeminiImageConfig, GeminiPart, GenerateContentRequest,
};
use inpaint_types::{data_url, GenerationError, SupportedRatio, TearingStyle};
use tracing::{debug, warn};

use crate::prompt::build_instruction;

/// Processed image, mask and style, ready to be sent.
///
/// Both images are stored as bare base64 PNG; any `data:` prefix is stripped
/// on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    image_base64: String,
    mask_base64: String,
    style: TearingStyle,
    aspect_ratio: &'static SupportedRatio,
}

impl GenerationRequest {
    /// Build from data URLs or bare base64 strings.
    ///
    /// The mask must decode, contain at least one painted pixel and match the
    /// image size. The aspect ratio is read back from the image header and
    /// falls back to `1:1` when the header cannot be read.
    pub fn new(image: &str, mask: &str, style: TearingStyle) -> Result<Self, GenerationError> {
        let image_base64 = data_url::strip_image_prefix(image).to_string();
        let mask_base64 = data_url::strip_image_prefix(mask).to_string();
        if image_base64.is_empty() {
            return Err(GenerationError::InvalidInput { message: "image is empty".to_string() });
        }

        let image_size = read_dimensions(&image_base64);
        let aspect_ratio = match image_size {
            Some((width, height)) => {
                let ratio = SupportedRatio::for_dimensions(width, height);
                debug!("Requesting aspect ratio {} for {}x{}", ratio, width, height);
                ratio
            }
            None => {
                warn!("Could not read processed image dimensions, requesting 1:1");
                &inpaint_types::SUPPORTED_RATIOS[0]
            }
        };

        validate_mask(&mask_base64, image_size)?;

        Ok(Self { image_base64, mask_base64, style, aspect_ratio })
    }

    /// Build from raw PNG bytes.
    pub fn from_png(image: &[u8], mask: &[u8], style: TearingStyle) -> Result<Self, GenerationError> {
        Self::new(&data_url::encode("image/png", image), &data_url::encode("image/png", mask), style)
    }

    pub fn style(&self) -> TearingStyle {
        self.style
    }

    /// Ratio label sent as the `aspectRatio` parameter.
    pub fn aspect_ratio(&self) -> &'static SupportedRatio {
        self.aspect_ratio
    }

    /// GenerateContent body: base image, mask, then the instruction text.
    pub fn to_body(&self, image_size: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![GeminiContent {
                role: None,
                parts: vec![
                    GeminiPart::png(self.image_base64.clone()),
                    GeminiPart::png(self.mask_base64.clone()),
                    GeminiPart::text(build_instruction(self.style)),
                ],
            }],
            generation_config: GeminiGenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
                image_config: Some(GeminiImageConfig {
                    aspect_ratio: self.aspect_ratio.label.to_string(),
                    image_size: Some(image_size.to_string()),
                }),
            },
        }
    }
}

/// Width and height from the image header without a full decode.
fn read_dimensions(base64: &str) -> Option<(u32, u32)> {
    let bytes = data_url::decode(base64).ok()?;
    ImageReader::new(Cursor::new(bytes)).with_guessed_format().ok()?.into_dimensions().ok()
}

fn validate_mask(mask_base64: &str, image_size: Option<(u32, u32)>) -> Result<(), GenerationError> {
    if mask_base64.is_empty() {
        return Err(GenerationError::EmptyMask);
    }
    let bytes = data_url::decode(mask_base64)
        .map_err(|e| GenerationError::InvalidInput { message: format!("mask: {}", e) })?;
    let mask = image::load_from_memory(&bytes)
        .map_err(|e| GenerationError::InvalidInput { message: format!("mask: {}", e) })?
        .to_rgba8();

    if let Some((image_width, image_height)) = image_size {
        if mask.dimensions() != (image_width, image_height) {
            return Err(GenerationError::DimensionMismatch {
                image_width,
                image_height,
                mask_width: mask.width(),
                mask_height: mask.height(),
            });
        }
    }
    if !mask.pixels().any(|p| p[3] > 0) {
        return Err(GenerationError::EmptyMask);
    }
    Ok(())
}
