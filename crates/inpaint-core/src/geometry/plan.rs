//! Pure crop/resize arithmetic.

use inpaint_types::SupportedRatio;
use serde::Serialize;

/// Longest side of a processed image.
pub const MAX_DIMENSION: u32 = 1024;

/// Crop rectangle in source pixel space. Origins may be fractional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything needed to turn a source of a given size into a processed image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometryPlan {
    pub ratio: &'static SupportedRatio,
    pub crop: CropRect,
    pub width: u32,
    pub height: u32,
}

impl GeometryPlan {
    /// Whether the output is smaller than the crop (a downscale happens).
    pub fn is_downscaled(&self) -> bool {
        f64::from(self.width) < self.crop.width.round() || f64::from(self.height) < self.crop.height.round()
    }
}

/// Plan the center crop and bounded resize for a `width x height` source.
///
/// Callers guarantee both dimensions are non-zero.
pub fn plan_geometry(width: u32, height: u32) -> GeometryPlan {
    let src_w = f64::from(width);
    let src_h = f64::from(height);
    let source_ratio = src_w / src_h;
    let ratio = SupportedRatio::nearest(source_ratio);

    let (crop_w, crop_h) = if source_ratio > ratio.value {
        (src_h * ratio.value, src_h)
    } else {
        (src_w, src_w / ratio.value)
    };

    let crop = CropRect {
        x: (src_w - crop_w) / 2.0,
        y: (src_h - crop_h) / 2.0,
        width: crop_w,
        height: crop_h,
    };

    let max = f64::from(MAX_DIMENSION);
    let (out_w, out_h) = if crop_w > crop_h {
        if crop_w > max {
            (max, (max / ratio.value).round())
        } else {
            (crop_w.round(), crop_h.round())
        }
    } else if crop_h > max {
        ((max * ratio.value).round(), max)
    } else {
        (crop_w.round(), crop_h.round())
    };

    GeometryPlan {
        ratio,
        crop,
        width: (out_w as u32).max(1),
        height: (out_h as u32).max(1),
    }
}
