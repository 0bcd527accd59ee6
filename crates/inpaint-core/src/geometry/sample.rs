//! Resampling of a fractional crop rectangle into an output buffer.

use image::{Rgba, RgbaImage};

use super::plan::CropRect;

/// Upper bound on supersamples per axis when shrinking.
const MAX_SUPERSAMPLE: u32 = 4;

/// Clamp-sample a pixel (edge pixels repeat outside the bitmap).
#[inline]
fn sample_clamped(img: &RgbaImage, x: i64, y: i64) -> [f32; 4] {
    let cx = x.clamp(0, i64::from(img.width()) - 1) as u32;
    let cy = y.clamp(0, i64::from(img.height()) - 1) as u32;
    let p = img.get_pixel(cx, cy);
    [f32::from(p[0]), f32::from(p[1]), f32::from(p[2]), f32::from(p[3])]
}

/// Bilinear sample at a fractional pixel-centre coordinate.
#[inline]
fn sample_bilinear(img: &RgbaImage, fx: f64, fy: f64) -> [f32; 4] {
    let x0 = fx.floor();
    let y0 = fy.floor();
    let dx = (fx - x0) as f32;
    let dy = (fy - y0) as f32;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let p00 = sample_clamped(img, x0, y0);
    let p10 = sample_clamped(img, x0 + 1, y0);
    let p01 = sample_clamped(img, x0, y0 + 1);
    let p11 = sample_clamped(img, x0 + 1, y0 + 1);

    let mut out = [0.0f32; 4];
    for c in 0..4 {
        out[c] = p00[c] * (1.0 - dx) * (1.0 - dy)
            + p10[c] * dx * (1.0 - dy)
            + p01[c] * (1.0 - dx) * dy
            + p11[c] * dx * dy;
    }
    out
}

/// Resample `crop` of `src` into a new `out_w x out_h` bitmap.
///
/// Each output pixel averages an `n x n` grid of bilinear samples spread over
/// its footprint in the source, with `n` growing with the shrink factor.
pub fn resample_crop(src: &RgbaImage, crop: CropRect, out_w: u32, out_h: u32) -> RgbaImage {
    let scale_x = crop.width / f64::from(out_w);
    let scale_y = crop.height / f64::from(out_h);
    let n = (scale_x.max(scale_y).ceil() as u32).clamp(1, MAX_SUPERSAMPLE);
    let inv = 1.0 / f64::from(n);
    let weight = 1.0 / (n * n) as f32;

    let mut out = RgbaImage::new(out_w, out_h);
    for (ox, oy, pixel) in out.enumerate_pixels_mut() {
        let mut acc = [0.0f32; 4];
        for j in 0..n {
            let sy = crop.y + (f64::from(oy) + (f64::from(j) + 0.5) * inv) * scale_y - 0.5;
            for i in 0..n {
                let sx = crop.x + (f64::from(ox) + (f64::from(i) + 0.5) * inv) * scale_x - 0.5;
                let s = sample_bilinear(src, sx, sy);
                for c in 0..4 {
                    acc[c] += s[c];
                }
            }
        }
        *pixel = Rgba([
            (acc[0] * weight).round().clamp(0.0, 255.0) as u8,
            (acc[1] * weight).round().clamp(0.0, 255.0) as u8,
            (acc[2] * weight).round().clamp(0.0, 255.0) as u8,
            (acc[3] * weight).round().clamp(0.0, 255.0) as u8,
        ]);
    }
    out
}
