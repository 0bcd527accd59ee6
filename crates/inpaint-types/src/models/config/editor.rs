//! Mask editor configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Brush settings for the mask canvas.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct EditorConfig {
    /// Brush diameter in image pixels used when a session starts
    #[validate(range(min = 1_u32, max = 200_u32))]
    #[serde(default = "default_brush_size")]
    pub default_brush_size: u32,
}

fn default_brush_size() -> u32 {
    30
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { default_brush_size: default_brush_size() }
    }
}
