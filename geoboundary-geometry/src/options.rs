//! Caller configuration for boundary extraction

use serde::{Deserialize, Serialize};

use crate::types::PixelRect;

/// Number of boundary samples per shorter raster side when no step is given
pub const DEFAULT_SAMPLES_PER_SIDE: i32 = 8;

/// Sampling step used to outline a whole raster when no step is given:
/// an eighth of the shorter side, but at least one pixel.
pub fn default_step(width: i32, height: i32) -> i32 {
    (width.min(height) / DEFAULT_SAMPLES_PER_SIDE).max(1)
}

/// How a boundary is sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryOptions {
    /// Sampling step in pixels; `None` selects [`default_step`], values `<= 0`
    /// emit corners only
    pub step: Option<i32>,
    /// Sample pixel centres (`+0.5`) instead of pixel corners
    pub use_pixel_center: bool,
}

impl Default for BoundaryOptions {
    fn default() -> Self {
        Self {
            step: None,
            use_pixel_center: true,
        }
    }
}

impl BoundaryOptions {
    pub fn with_step(mut self, step: i32) -> Self {
        self.step = Some(step);
        self
    }

    pub fn with_pixel_center(mut self, use_pixel_center: bool) -> Self {
        self.use_pixel_center = use_pixel_center;
        self
    }

    /// The step to trace `rect` with
    pub fn resolve_step(&self, rect: &PixelRect) -> i32 {
        self.step
            .unwrap_or_else(|| default_step(rect.width(), rect.height()))
    }
}
