#![allow(clippy::unwrap_used)]

use image::{Rgba, RgbaImage};
use inpaint_types::{SupportedRatio, SUPPORTED_RATIOS};

use super::*;
use crate::upload::SourceImage;

fn source(width: u32, height: u32) -> SourceImage {
    SourceImage::from_rgba(RgbaImage::from_pixel(width, height, Rgba([90, 120, 150, 255]))).unwrap()
}

fn assert_ratio_close(width: u32, height: u32, ratio: &SupportedRatio) {
    let actual = f64::from(width) / f64::from(height);
    assert!(
        (actual - ratio.value).abs() < 0.01,
        "{}x{} has ratio {} but expected {} ({})",
        width,
        height,
        actual,
        ratio.value,
        ratio.label
    );
}

#[test]
fn test_wide_source_scenario() {
    let plan = plan_geometry(2000, 1000);

    assert_eq!(plan.ratio.label, "16:9");
    assert!((plan.crop.width - 1777.78).abs() < 0.01);
    assert_eq!(plan.crop.height, 1000.0);
    assert!((plan.crop.x - 111.11).abs() < 0.01);
    assert_eq!(plan.crop.y, 0.0);
    assert_eq!((plan.width, plan.height), (1024, 576));
    assert!(plan.is_downscaled());
}

#[test]
fn test_tall_source_crops_height() {
    // 1000x3000 (0.333) -> 9:16, crop height 1000 / 0.5625 = 1777.8
    let plan = plan_geometry(1000, 3000);

    assert_eq!(plan.ratio.label, "9:16");
    assert_eq!(plan.crop.width, 1000.0);
    assert!((plan.crop.height - 1777.78).abs() < 0.01);
    assert!((plan.crop.y - 611.11).abs() < 0.01);
    assert_eq!((plan.width, plan.height), (576, 1024));
}

#[test]
fn test_square_source_over_limit() {
    let plan = plan_geometry(3000, 3000);
    assert_eq!(plan.ratio.label, "1:1");
    assert_eq!((plan.width, plan.height), (1024, 1024));
}

#[test]
fn test_small_source_is_not_upscaled() {
    // 300x200 (1.5) -> 4:3, crop width 266.67, no resize
    let plan = plan_geometry(300, 200);

    assert_eq!(plan.ratio.label, "4:3");
    assert_eq!((plan.width, plan.height), (267, 200));
    assert!(!plan.is_downscaled());
}

#[test]
fn test_outputs_match_ratio_and_bound() {
    let sizes = [
        (1, 1),
        (17, 3),
        (640, 480),
        (480, 640),
        (1920, 1080),
        (1080, 1920),
        (4032, 3024),
        (3024, 4032),
        (5000, 700),
        (700, 5000),
        (1025, 1024),
        (1300, 1000),
    ];
    for (w, h) in sizes {
        let plan = plan_geometry(w, h);
        assert!(plan.width.max(plan.height) <= MAX_DIMENSION, "{}x{} exceeded bound", w, h);
        assert!(plan.width >= 1 && plan.height >= 1);
        if plan.width.min(plan.height) >= 100 {
            assert_ratio_close(plan.width, plan.height, plan.ratio);
        }
    }
}

#[test]
fn test_normalizing_processed_sizes_is_idempotent() {
    for (w, h) in [(1024, 576), (576, 1024), (1024, 1024), (768, 1024), (1024, 768), (800, 600), (267, 200)] {
        let first = plan_geometry(w, h);
        let second = plan_geometry(first.width, first.height);
        assert_eq!((second.width, second.height), (first.width, first.height), "for {}x{}", w, h);
        assert_eq!(second.ratio.label, first.ratio.label);
    }
}

#[test]
fn test_every_ratio_round_trips() {
    for ratio in &SUPPORTED_RATIOS {
        let (w, h) = if ratio.value >= 1.0 {
            (2048, (2048.0 / ratio.value).round() as u32)
        } else {
            ((2048.0 * ratio.value).round() as u32, 2048)
        };
        let plan = plan_geometry(w, h);
        assert_eq!(plan.ratio.label, ratio.label);
        assert_ratio_close(plan.width, plan.height, ratio);
    }
}

#[test]
fn test_normalize_produces_planned_bitmap() {
    let processed = normalize(&source(2000, 1000));

    assert_eq!(processed.dimensions(), (1024, 576));
    assert_eq!(processed.ratio().label, "16:9");
    // Uniform input stays uniform after resampling.
    assert_eq!(processed.pixels().get_pixel(0, 0), &Rgba([90, 120, 150, 255]));
    assert_eq!(processed.pixels().get_pixel(1023, 575), &Rgba([90, 120, 150, 255]));
}

#[test]
fn test_center_crop_keeps_middle() {
    // Left third red, middle third green, right third blue; a 3:1 source
    // cropped to 16:9 keeps mostly green in the centre.
    let mut img = RgbaImage::new(300, 100);
    for (x, _, p) in img.enumerate_pixels_mut() {
        *p = match x {
            0..=99 => Rgba([255, 0, 0, 255]),
            100..=199 => Rgba([0, 255, 0, 255]),
            _ => Rgba([0, 0, 255, 255]),
        };
    }
    let processed = normalize(&SourceImage::from_rgba(img).unwrap());

    assert_eq!(processed.dimensions(), (178, 100));
    let centre = processed.pixels().get_pixel(89, 50);
    assert_eq!(centre, &Rgba([0, 255, 0, 255]));
    let left = processed.pixels().get_pixel(0, 50);
    assert_eq!(left[0], 255);
}

#[test]
fn test_normalize_bytes_fails_closed() {
    assert!(normalize_bytes(b"not an image").is_err());
}

#[test]
fn test_png_export_round_trip_dimensions() {
    let processed = normalize(&source(640, 480));
    let png = processed.to_png().unwrap();
    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (640, 480));
    assert!(processed.to_data_url().unwrap().starts_with("data:image/png;base64,"));
}
