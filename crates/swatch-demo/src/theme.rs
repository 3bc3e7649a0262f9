//! Colors, sizes, and draw order shared by the picker's render systems.

use bevy::color::Color;
use bevy::math::Vec2;

/// Window title before the first selection.
pub const WINDOW_TITLE: &str = "Color selector";

// ── Colors ──────────────────────────────────────────────────────────────────

/// Window clear color.
pub const BACKGROUND: Color = Color::BLACK;

/// Outline of both indicators.
pub const INDICATOR_OUTLINE: Color = Color::WHITE;

/// Fill of the hue bar.
pub const HUE_INDICATOR_FILL: Color = Color::BLACK;

// ── Sizing ──────────────────────────────────────────────────────────────────

/// Size (px) of the hue bar, without its outline.
pub const HUE_INDICATOR_SIZE: Vec2 = Vec2::new(45.0, 3.0);

/// Outline thickness (px) around the hue bar.
pub const HUE_INDICATOR_OUTLINE: f32 = 1.0;

/// Inner radius (px) of the quad ring; the inside stays transparent.
pub const QUAD_INDICATOR_RADIUS: f32 = 6.0;

/// Stroke width (px) of the quad ring, drawn outside the radius.
pub const QUAD_INDICATOR_THICKNESS: f32 = 3.0;

// ── Draw order ──────────────────────────────────────────────────────────────

/// Z of the hue strip and the saturation/value quad.
pub const Z_SURFACE: f32 = 0.0;

/// Z of the indicators, above the surfaces.
pub const Z_INDICATOR: f32 = 1.0;
