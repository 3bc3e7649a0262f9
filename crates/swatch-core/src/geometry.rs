//! Cursor geometry: rectangles and pixel → picker coordinate mapping.
//!
//! All positions are window pixels with the origin at the top-left corner
//! and y growing downward.

use glam::Vec2;

/// Axis-aligned rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Rectangle spanning two opposite corners.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        Self {
            min,
            size: a.max(b) - min,
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Half-open containment: the left/top edges are inside, the
    /// right/bottom edges are not.
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x < max.x && p.y >= self.min.y && p.y < max.y
    }
}

/// Map a vertical pixel offset to the hue ramp index of the row under it.
///
/// Ramp points come in same-color pairs, one pair per `spacing` pixels, so
/// the result is always the (even) index of the pair's first point.
pub fn position_to_hue_index(cursor_y: f32, spacing: f32) -> usize {
    let row = (cursor_y / spacing).floor().max(0.0) as usize;
    row * 2
}

/// Map an absolute cursor position to coordinates relative to `rect`.
///
/// Lands in `0..1` on both axes when `rect.contains(cursor)`; callers check
/// containment first.
pub fn position_to_normalized(cursor: Vec2, rect: &Rect) -> Vec2 {
    (cursor - rect.min) / rect.size
}
