//! Geometry normalizer: source upload to canonical processed image.

use image::{DynamicImage, ImageFormat, RgbaImage};
use inpaint_types::{data_url, ImageError, SupportedRatio};
use std::io::Cursor;
use std::path::Path;
use tracing::info;

use super::plan::{plan_geometry, GeometryPlan};
use super::sample::resample_crop;
use crate::upload::{decode_upload, SourceImage};

/// Canonical bitmap used for display, mask painting and the remote call.
///
/// Its dimensions are the authoritative pixel space for everything downstream.
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    pixels: RgbaImage,
    ratio: &'static SupportedRatio,
}

impl ProcessedImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Ratio selected during normalization.
    pub fn ratio(&self) -> &'static SupportedRatio {
        self.ratio
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// PNG encoding of the bitmap.
    pub fn to_png(&self) -> Result<Vec<u8>, ImageError> {
        encode_png(&self.pixels)
    }

    /// `data:image/png;base64,` URL of the bitmap.
    pub fn to_data_url(&self) -> Result<String, ImageError> {
        Ok(data_url::encode("image/png", &self.to_png()?))
    }

    /// Write the bitmap to disk as PNG.
    pub fn save_png(&self, path: &Path) -> Result<(), ImageError> {
        let png = self.to_png()?;
        std::fs::write(path, png).map_err(|e| ImageError::Encode { message: e.to_string() })
    }
}

/// Encode an RGBA raster as PNG bytes.
pub(crate) fn encode_png(pixels: &RgbaImage) -> Result<Vec<u8>, ImageError> {
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(pixels.clone())
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|e| ImageError::encode(&e))?;
    Ok(out.into_inner())
}

/// Crop `source` to the nearest supported ratio and bound its longest side.
pub fn normalize(source: &SourceImage) -> ProcessedImage {
    let plan: GeometryPlan = plan_geometry(source.width(), source.height());
    info!(
        "Normalizing {}x{} -> {} crop {:.1}x{:.1}@({:.1},{:.1}) -> {}x{}",
        source.width(),
        source.height(),
        plan.ratio.label,
        plan.crop.width,
        plan.crop.height,
        plan.crop.x,
        plan.crop.y,
        plan.width,
        plan.height
    );
    let pixels = resample_crop(source.pixels(), plan.crop, plan.width, plan.height);
    ProcessedImage { pixels, ratio: plan.ratio }
}

/// Decode an upload and normalize it. Nothing is produced if decoding fails.
pub fn normalize_bytes(bytes: &[u8]) -> Result<ProcessedImage, ImageError> {
    let source = decode_upload(bytes)?;
    Ok(normalize(&source))
}
