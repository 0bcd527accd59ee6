//! Supported output aspect ratios.

use serde::Serialize;
use std::fmt;

/// A named aspect ratio accepted by the image model.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SupportedRatio {
    /// Label sent to the model, e.g. `"16:9"`.
    pub label: &'static str,
    /// Width divided by height.
    pub value: f64,
}

/// Fixed ratio table. Order matters: exact ties resolve to the earlier entry.
pub const SUPPORTED_RATIOS: [SupportedRatio; 5] = [
    SupportedRatio { label: "1:1", value: 1.0 },
    SupportedRatio { label: "3:4", value: 3.0 / 4.0 },
    SupportedRatio { label: "4:3", value: 4.0 / 3.0 },
    SupportedRatio { label: "9:16", value: 9.0 / 16.0 },
    SupportedRatio { label: "16:9", value: 16.0 / 9.0 },
];

impl SupportedRatio {
    /// Nearest supported ratio to `ratio` by absolute difference.
    ///
    /// Non-finite input falls back to the first entry.
    pub fn nearest(ratio: f64) -> &'static SupportedRatio {
        let mut best = &SUPPORTED_RATIOS[0];
        if !ratio.is_finite() {
            return best;
        }
        for candidate in &SUPPORTED_RATIOS[1..] {
            if (candidate.value - ratio).abs() < (best.value - ratio).abs() {
                best = candidate;
            }
        }
        best
    }

    /// Nearest supported ratio for a `width x height` bitmap.
    pub fn for_dimensions(width: u32, height: u32) -> &'static SupportedRatio {
        if height == 0 {
            return &SUPPORTED_RATIOS[0];
        }
        Self::nearest(f64::from(width) / f64::from(height))
    }

    /// Look up a ratio by its label.
    pub fn from_label(label: &str) -> Option<&'static SupportedRatio> {
        SUPPORTED_RATIOS.iter().find(|r| r.label == label)
    }
}

impl fmt::Display for SupportedRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}
