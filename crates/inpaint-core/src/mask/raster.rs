//! Mask raster and stroke rasterization.

use image::{Rgba, RgbaImage};
use inpaint_types::ImageError;

use super::surface::PixelPoint;
use crate::geometry::encode_png;

/// Colour of painted mask pixels (semi-transparent red).
pub const MASK_COLOR: Rgba<u8> = Rgba([255, 0, 0, 153]);

/// Smallest effective radius. Must exceed half a pixel diagonal so the pixel
/// containing a point is always hit by hairline brushes.
const MIN_COVER_RADIUS: f32 = 0.75;

/// Accumulated mask, exactly the size of the processed image.
///
/// Painted pixels hold [`MASK_COLOR`]; all others are fully transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskRaster {
    pixels: RgbaImage,
}

impl MaskRaster {
    pub fn new(width: u32, height: u32) -> Self {
        Self { pixels: RgbaImage::new(width, height) }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn is_painted(&self, x: u32, y: u32) -> bool {
        self.pixels.get_pixel_checked(x, y).is_some_and(|p| p[3] > 0)
    }

    pub fn is_empty(&self) -> bool {
        !self.pixels.pixels().any(|p| p[3] > 0)
    }

    /// Erase every stroke.
    pub fn clear(&mut self) {
        for p in self.pixels.pixels_mut() {
            *p = Rgba([0, 0, 0, 0]);
        }
    }

    /// Paint a filled disc of diameter `width` centred on `at`.
    pub fn paint_dot(&mut self, at: PixelPoint, width: f32) {
        self.paint_segment(at, at, width);
    }

    /// Paint a round-capped segment of the given width.
    ///
    /// A pixel is painted when its centre lies within `width / 2` of the
    /// segment, so consecutive segments join without gaps.
    pub fn paint_segment(&mut self, from: PixelPoint, to: PixelPoint, width: f32) {
        let radius = (width / 2.0).max(MIN_COVER_RADIUS);
        let (w, h) = self.pixels.dimensions();
        if w == 0 || h == 0 {
            return;
        }

        let min_x = (from.x.min(to.x) - radius).floor().max(0.0) as u32;
        let min_y = (from.y.min(to.y) - radius).floor().max(0.0) as u32;
        let max_x = ((from.x.max(to.x) + radius).ceil().max(0.0) as u32).min(w - 1);
        let max_y = ((from.y.max(to.y) + radius).ceil().max(0.0) as u32).min(h - 1);
        if min_x > max_x || min_y > max_y {
            return;
        }

        let radius_sq = radius * radius;
        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let centre = PixelPoint::new(px as f32 + 0.5, py as f32 + 0.5);
                if distance_sq_to_segment(centre, from, to) <= radius_sq {
                    self.pixels.put_pixel(px, py, MASK_COLOR);
                }
            }
        }
    }

    /// PNG encoding of the raster.
    pub fn to_png(&self) -> Result<Vec<u8>, ImageError> {
        encode_png(&self.pixels)
    }
}

/// Squared distance from `p` to the segment `a..b`.
fn distance_sq_to_segment(p: PixelPoint, a: PixelPoint, b: PixelPoint) -> f32 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let (apx, apy) = (p.x - a.x, p.y - a.y);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq > 0.0 { ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0) } else { 0.0 };
    let dx = apx - abx * t;
    let dy = apy - aby * t;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_segment() {
        let a = PixelPoint::new(0.0, 0.0);
        let b = PixelPoint::new(10.0, 0.0);
        assert_eq!(distance_sq_to_segment(PixelPoint::new(5.0, 3.0), a, b), 9.0);
        assert_eq!(distance_sq_to_segment(PixelPoint::new(13.0, 4.0), a, b), 25.0);
        assert_eq!(distance_sq_to_segment(PixelPoint::new(-3.0, 0.0), a, a), 9.0);
    }

    #[test]
    fn test_hairline_brush_marks_containing_pixel() {
        let mut raster = MaskRaster::new(8, 8);
        raster.paint_dot(PixelPoint::new(3.0, 3.0), 1.0);
        assert!(raster.is_painted(3, 3));
    }

    #[test]
    fn test_clear() {
        let mut raster = MaskRaster::new(8, 8);
        raster.paint_dot(PixelPoint::new(4.0, 4.0), 4.0);
        assert!(!raster.is_empty());
        raster.clear();
        assert!(raster.is_empty());
    }
}
