//! Linear and bilinear interpolation of 8-bit colors.
//!
//! # Bilinear layout
//! ```text
//!   top_left ─────────── top_right
//!      │                     │
//!      │        p (x, y)     │
//!      │                     │
//!   bottom_left ──────── bottom_right
//! ```
//! The top and bottom edges are blended by `p.x` first, then the two
//! results are blended by `p.y`.

use glam::Vec2;

use super::Rgb8;
use crate::error::{PickerError, Result};

/// Interpolate between `a` and `b` by fraction `f`.
///
/// Returns `a + f × (b − a)`, exact at `f = 0` and `f = 1` for channel-sized
/// inputs. Fractions outside `0..=1` (and NaN) are rejected rather than
/// clamped.
pub fn scalar_lerp(a: f32, b: f32, f: f32) -> Result<f32> {
    if !(0.0..=1.0).contains(&f) {
        return Err(PickerError::InvalidInterpolationFraction(f));
    }
    Ok(a + f * (b - a))
}

/// Interpolate each channel of two colors independently.
///
/// Each interpolated channel is truncated toward zero into `u8`, so
/// `color_lerp(red, blue, 0.5)` is `(127, 0, 127)`.
pub fn color_lerp(a: Rgb8, b: Rgb8, f: f32) -> Result<Rgb8> {
    let channel = |x: u8, y: u8| scalar_lerp(f32::from(x), f32::from(y), f).map(|v| v as u8);
    Ok(Rgb8::new(
        channel(a.r, b.r)?,
        channel(a.g, b.g)?,
        channel(a.b, b.b)?,
    ))
}

/// Bilinear interpolation of four corner colors at normalized point `p`.
///
/// Argument order follows the quad's vertex winding: top-left,
/// bottom-left, bottom-right, top-right.
pub fn bilinear_interp(
    top_left: Rgb8,
    bottom_left: Rgb8,
    bottom_right: Rgb8,
    top_right: Rgb8,
    p: Vec2,
) -> Result<Rgb8> {
    let top = color_lerp(top_left, top_right, p.x)?;
    let bottom = color_lerp(bottom_left, bottom_right, p.x)?;
    color_lerp(top, bottom, p.y)
}
