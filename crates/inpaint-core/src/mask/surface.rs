//! Display-space to image-space coordinate mapping.

use serde::{Deserialize, Serialize};

/// A point in processed-image pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp into `[0, width) x [0, height)`. Non-finite components become 0.
    pub fn clamped(self, width: u32, height: u32) -> Self {
        Self::new(clamp_below(self.x, width as f32), clamp_below(self.y, height as f32))
    }
}

/// On-screen bounding box of the painting surface (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Surface displayed at exactly the raster size, anchored at the origin.
    pub fn unscaled(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, f64::from(width), f64::from(height))
    }

    fn is_usable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Map a client coordinate into a `raster_w x raster_h` pixel space.
    ///
    /// Results are clamped into `[0, raster_w) x [0, raster_h)`. Returns
    /// `None` when the surface has no usable size or the input is not finite.
    pub fn to_pixel(
        &self,
        client_x: f64,
        client_y: f64,
        raster_w: u32,
        raster_h: u32,
    ) -> Option<PixelPoint> {
        if !self.is_usable() || !client_x.is_finite() || !client_y.is_finite() {
            return None;
        }
        if raster_w == 0 || raster_h == 0 {
            return None;
        }
        let w = f64::from(raster_w);
        let h = f64::from(raster_h);
        let x = (client_x - self.left) * (w / self.width);
        let y = (client_y - self.top) * (h / self.height);
        Some(PixelPoint::new(x as f32, y as f32).clamped(raster_w, raster_h))
    }
}

/// Distance kept from the far edge so clamped points stay inside the raster.
const EDGE_EPSILON: f32 = 1e-3;

fn clamp_below(value: f32, upper: f32) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, (upper - EDGE_EPSILON).max(0.0))
}
