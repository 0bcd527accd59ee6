//! Recorded pointer strokes replayed onto a [`MaskCanvas`].

use std::path::Path;

use anyhow::{Context, Result};
use inpaint_core::mask::{MaskCanvas, MaskExport, PointerEvent, SurfaceRect};
use serde::Deserialize;
use tracing::debug;

/// Stroke script as written by hand or captured from a browser.
#[derive(Debug, Clone, Deserialize)]
pub struct StrokeScript {
    /// On-screen box the points were measured against. Defaults to the
    /// processed image shown at 1:1 in the top-left corner.
    #[serde(default)]
    pub surface: Option<SurfaceRect>,
    pub strokes: Vec<ScriptedStroke>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptedStroke {
    /// Brush diameter for this stroke; keeps the current brush when absent
    #[serde(default)]
    pub brush: Option<u32>,
    pub points: Vec<[f64; 2]>,
}

impl StrokeScript {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stroke script {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid stroke script {}", path.display()))
    }

    /// Replay every stroke as pointer events.
    ///
    /// Each completed stroke yields one mask export, in order.
    pub fn replay(&self, canvas: &mut MaskCanvas) -> Result<Vec<MaskExport>> {
        let Some((width, height)) = canvas.dimensions() else {
            return Ok(Vec::new());
        };
        let surface = self.surface.unwrap_or_else(|| SurfaceRect::unscaled(width, height));
        let mut exports = Vec::new();

        for stroke in &self.strokes {
            let Some((first, rest)) = stroke.points.split_first() else {
                continue;
            };
            if let Some(brush) = stroke.brush {
                canvas.set_brush_size(brush);
            }
            canvas.handle_pointer(
                PointerEvent::Down { client_x: first[0], client_y: first[1] },
                &surface,
            )?;
            for point in rest {
                canvas.handle_pointer(
                    PointerEvent::Move { client_x: point[0], client_y: point[1] },
                    &surface,
                )?;
            }
            if let Some(export) = canvas.handle_pointer(PointerEvent::Up, &surface)? {
                debug!("Stroke {} replayed ({} points)", export.stroke_count(), stroke.points.len());
                exports.push(export);
            }
        }
        Ok(exports)
    }
}
