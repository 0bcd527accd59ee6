//! Geometry normalizer.
//!
//! Picks the nearest supported aspect ratio, center-crops to it and bounds
//! the longest side to [`MAX_DIMENSION`] without ever upscaling.

mod normalize;
mod plan;
mod sample;

#[cfg(test)]
mod tests;

pub(crate) use normalize::encode_png;
pub use normalize::{normalize, normalize_bytes, ProcessedImage};
pub use plan::{plan_geometry, CropRect, GeometryPlan, MAX_DIMENSION};
pub use sample::resample_crop;
