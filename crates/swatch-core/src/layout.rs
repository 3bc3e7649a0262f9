//! Picker layout: where the hue strip and the saturation/value quad sit.
//!
//! `PickerLayout` is the only tunable input of the core. Every field has a
//! default, so a partial document (e.g. `{"sample_spacing": 4.0}`) is a
//! valid layout.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result};
use crate::geometry::Rect;

/// Default number of hue ramp points (two per row).
const DEFAULT_SAMPLE_COUNT: usize = 192;
/// Default vertical distance (px) between ramp rows.
const DEFAULT_SAMPLE_SPACING: f32 = 5.0;
/// Default window width (px).
const DEFAULT_WINDOW_WIDTH: u32 = 500;

/// Geometry of the picker in window pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerLayout {
    /// Number of hue ramp points. Must be even; points pair up into rows.
    pub sample_count: usize,
    /// Vertical distance between consecutive ramp rows.
    pub sample_spacing: f32,
    /// Left edge of the hue strip.
    pub strip_left: f32,
    /// Right edge of the hue strip.
    pub strip_right: f32,
    /// Left edge of the saturation/value quad.
    pub quad_left: f32,
    /// Right edge of the saturation/value quad.
    pub quad_right: f32,
    pub window_width: u32,
}

impl Default for PickerLayout {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            sample_spacing: DEFAULT_SAMPLE_SPACING,
            strip_left: 10.0,
            strip_right: 50.0,
            quad_left: 75.0,
            quad_right: 475.0,
            window_width: DEFAULT_WINDOW_WIDTH,
        }
    }
}

impl PickerLayout {
    /// Check that the layout can form a picker.
    pub fn validate(&self) -> Result<()> {
        if self.sample_count < 4 || self.sample_count % 2 != 0 {
            return Err(PickerError::InvalidLayout(format!(
                "sample_count must be even and at least 4, got {}",
                self.sample_count
            )));
        }
        if !(self.sample_spacing.is_finite() && self.sample_spacing > 0.0) {
            return Err(PickerError::InvalidLayout(format!(
                "sample_spacing must be positive, got {}",
                self.sample_spacing
            )));
        }
        if !(self.strip_left >= 0.0 && self.strip_right > self.strip_left) {
            return Err(PickerError::InvalidLayout(format!(
                "hue strip spans {}..{}",
                self.strip_left, self.strip_right
            )));
        }
        if !(self.quad_left >= self.strip_right && self.quad_right > self.quad_left) {
            return Err(PickerError::InvalidLayout(format!(
                "quad spans {}..{} and must start right of the strip (ends at {})",
                self.quad_left, self.quad_right, self.strip_right
            )));
        }
        if self.quad_right > self.window_width as f32 {
            return Err(PickerError::InvalidLayout(format!(
                "quad ends at {} but the window is {} wide",
                self.quad_right, self.window_width
            )));
        }
        Ok(())
    }

    /// Number of same-color rows in the ramp.
    pub fn row_count(&self) -> usize {
        self.sample_count / 2
    }

    /// Height shared by the strip and the quad: first to last ramp row.
    pub fn content_height(&self) -> f32 {
        self.sample_spacing * (self.row_count() - 1) as f32
    }

    pub fn strip_rect(&self) -> Rect {
        Rect::from_corners(
            Vec2::new(self.strip_left, 0.0),
            Vec2::new(self.strip_right, self.content_height()),
        )
    }

    pub fn quad_rect(&self) -> Rect {
        Rect::from_corners(
            Vec2::new(self.quad_left, 0.0),
            Vec2::new(self.quad_right, self.content_height()),
        )
    }

    /// Window height, truncated to whole pixels.
    pub fn window_height(&self) -> u32 {
        (self.sample_spacing * (self.sample_count - 1) as f32 / 2.0) as u32
    }

    /// `(width, height)` of the window in logical pixels.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height())
    }
}
