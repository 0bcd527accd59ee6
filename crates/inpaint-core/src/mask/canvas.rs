//! Interactive mask canvas: pointer gestures to an accumulated raster.

use inpaint_types::{data_url, ImageError};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::raster::MaskRaster;
use super::surface::{PixelPoint, SurfaceRect};
use crate::geometry::ProcessedImage;

/// One continuous paint gesture in image pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskStroke {
    pub points: Vec<PixelPoint>,
    /// Brush diameter in pixels, fixed when the stroke began
    pub width: f32,
}

/// Pointer or touch input in client (display) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { client_x: f64, client_y: f64 },
    Move { client_x: f64, client_y: f64 },
    Up,
    Leave,
}

/// Snapshot of the full mask emitted when a stroke completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskExport {
    png: Vec<u8>,
    width: u32,
    height: u32,
    stroke_count: usize,
}

impl MaskExport {
    pub fn png(&self) -> &[u8] {
        &self.png
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of strokes accumulated into this snapshot.
    pub fn stroke_count(&self) -> usize {
        self.stroke_count
    }

    pub fn data_url(&self) -> String {
        data_url::encode("image/png", &self.png)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum CanvasState {
    Idle,
    Painting(MaskStroke),
}

/// Freehand mask surface locked to a processed image's pixel dimensions.
///
/// Until bound to an image the canvas ignores all input.
#[derive(Debug, Clone)]
pub struct MaskCanvas {
    raster: Option<MaskRaster>,
    brush_size: u32,
    state: CanvasState,
    strokes: Vec<MaskStroke>,
}

impl MaskCanvas {
    /// Unbound canvas with the given brush diameter.
    pub fn new(brush_size: u32) -> Self {
        Self { raster: None, brush_size: brush_size.max(1), state: CanvasState::Idle, strokes: Vec::new() }
    }

    /// Canvas bound to `image`'s dimensions.
    pub fn for_image(image: &ProcessedImage, brush_size: u32) -> Self {
        let mut canvas = Self::new(brush_size);
        canvas.bind(image.width(), image.height());
        canvas
    }

    /// Bind to a new pixel space, discarding any previous mask.
    pub fn bind(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            self.unbind();
            return;
        }
        debug!("Mask canvas bound to {}x{}", width, height);
        self.raster = Some(MaskRaster::new(width, height));
        self.state = CanvasState::Idle;
        self.strokes.clear();
    }

    /// Drop the raster entirely (full session reset).
    pub fn unbind(&mut self) {
        self.raster = None;
        self.state = CanvasState::Idle;
        self.strokes.clear();
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.raster.as_ref().map(|r| (r.width(), r.height()))
    }

    pub fn raster(&self) -> Option<&MaskRaster> {
        self.raster.as_ref()
    }

    /// Completed strokes since the last bind.
    pub fn strokes(&self) -> &[MaskStroke] {
        &self.strokes
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    /// Change the brush. Only strokes begun afterwards use the new size.
    pub fn set_brush_size(&mut self, brush_size: u32) {
        self.brush_size = brush_size.max(1);
    }

    pub fn is_painting(&self) -> bool {
        matches!(self.state, CanvasState::Painting(_))
    }

    /// Start a stroke at `point`. Returns `false` when unbound.
    ///
    /// A stroke still in progress is kept but not exported; call
    /// [`end_stroke`](Self::end_stroke) first to get its export.
    pub fn begin_stroke(&mut self, point: PixelPoint) -> bool {
        let Some(raster) = self.raster.as_mut() else {
            return false;
        };
        if let CanvasState::Painting(previous) = std::mem::replace(&mut self.state, CanvasState::Idle) {
            self.strokes.push(previous);
        }
        let point = point.clamped(raster.width(), raster.height());
        let width = self.brush_size as f32;
        raster.paint_dot(point, width);
        trace!("Stroke begin at ({:.1}, {:.1}) width={}", point.x, point.y, width);
        self.state = CanvasState::Painting(MaskStroke { points: vec![point], width });
        true
    }

    /// Extend the current stroke to `point`. Ignored while idle.
    pub fn extend_stroke(&mut self, point: PixelPoint) -> bool {
        let (Some(raster), CanvasState::Painting(stroke)) = (self.raster.as_mut(), &mut self.state) else {
            return false;
        };
        let point = point.clamped(raster.width(), raster.height());
        let previous = stroke.points.last().copied().unwrap_or(point);
        raster.paint_segment(previous, point, stroke.width);
        stroke.points.push(point);
        true
    }

    /// Finish the current stroke and export the whole mask.
    ///
    /// Returns `Ok(None)` when no stroke was in progress.
    pub fn end_stroke(&mut self) -> Result<Option<MaskExport>, ImageError> {
        let CanvasState::Painting(stroke) = std::mem::replace(&mut self.state, CanvasState::Idle) else {
            return Ok(None);
        };
        debug!("Stroke finished with {} points", stroke.points.len());
        self.strokes.push(stroke);
        self.export()
    }

    /// Export the current raster. `Ok(None)` when unbound.
    pub fn export(&self) -> Result<Option<MaskExport>, ImageError> {
        let Some(raster) = self.raster.as_ref() else {
            return Ok(None);
        };
        Ok(Some(MaskExport {
            png: raster.to_png()?,
            width: raster.width(),
            height: raster.height(),
            stroke_count: self.strokes.len(),
        }))
    }

    /// Feed a pointer event measured against `surface`.
    ///
    /// Returns the mask export when the event completes a stroke, including
    /// a pointer-down that arrives before the previous stroke's pointer-up.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        surface: &SurfaceRect,
    ) -> Result<Option<MaskExport>, ImageError> {
        let Some((width, height)) = self.dimensions() else {
            return Ok(None);
        };
        match event {
            PointerEvent::Down { client_x, client_y } => {
                let finished = self.end_stroke()?;
                if let Some(point) = surface.to_pixel(client_x, client_y, width, height) {
                    self.begin_stroke(point);
                }
                Ok(finished)
            }
            PointerEvent::Move { client_x, client_y } => {
                if self.is_painting() {
                    if let Some(point) = surface.to_pixel(client_x, client_y, width, height) {
                        self.extend_stroke(point);
                    }
                }
                Ok(None)
            }
            PointerEvent::Up | PointerEvent::Leave => self.end_stroke(),
        }
    }
}
