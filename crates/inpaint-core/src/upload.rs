//! Upload boundary: raw file bytes or data URLs into a decoded bitmap.

use image::{ImageReader, RgbaImage};
use inpaint_types::{data_url, ImageError};
use std::io::Cursor;
use tracing::debug;

/// Raw decoded upload. Discarded once the processed image is derived.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    /// Wrap an already decoded bitmap. Zero-sized bitmaps are rejected.
    pub fn from_rgba(pixels: RgbaImage) -> Result<Self, ImageError> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(ImageError::EmptyImage { width, height });
        }
        Ok(Self { pixels })
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
}

/// Decode an uploaded file of any supported format.
pub fn decode_upload(bytes: &[u8]) -> Result<SourceImage, ImageError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ImageError::Decode { message: e.to_string() })?;
    let format = reader.format();
    let decoded = reader.decode().map_err(|e| ImageError::decode(&e))?;
    debug!(
        "Decoded upload: format={:?}, size={}x{}",
        format,
        decoded.width(),
        decoded.height()
    );
    SourceImage::from_rgba(decoded.to_rgba8())
}

/// Decode a `data:image/...;base64,` URL as produced by a browser file reader.
pub fn decode_data_url(url: &str) -> Result<SourceImage, ImageError> {
    let bytes = data_url::decode(url)?;
    decode_upload(&bytes)
}

/// Read and decode an image file from disk.
pub fn read_upload(path: &std::path::Path) -> Result<SourceImage, ImageError> {
    let bytes =
        std::fs::read(path).map_err(|e| ImageError::Decode { message: format!("{}: {}", path.display(), e) })?;
    decode_upload(&bytes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgba};

    fn encoded(format: ImageFormat, width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([20, 40, 60, 255]));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img).to_rgb8().write_to(&mut out, format).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decode_png_and_jpeg() {
        let png = decode_upload(&encoded(ImageFormat::Png, 7, 5)).unwrap();
        assert_eq!((png.width(), png.height()), (7, 5));

        let jpeg = decode_upload(&encoded(ImageFormat::Jpeg, 9, 4)).unwrap();
        assert_eq!((jpeg.width(), jpeg.height()), (9, 4));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_upload(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ImageError::Decode { .. }));
    }

    #[test]
    fn test_decode_data_url() {
        let url = data_url::encode("image/png", &encoded(ImageFormat::Png, 3, 2));
        let img = decode_data_url(&url).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
    }

    #[test]
    fn test_empty_bitmap_rejected() {
        let err = SourceImage::from_rgba(RgbaImage::new(0, 4)).unwrap_err();
        assert_eq!(err, ImageError::EmptyImage { width: 0, height: 4 });
    }
}
