//! Color math: 8-bit RGB values, interpolation, and the hue ramp.

pub mod hue;
pub mod interpolate;

use palette::{LinSrgb, Srgb};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use hue::hue_ramp;
pub use interpolate::{bilinear_interp, color_lerp, scalar_lerp};

/// An opaque sRGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Linear-light components in `0..=1`, for GPU vertex colors.
    ///
    /// Renderers blend vertex attributes in linear space, so gradients drawn
    /// on screen are lighter in the midtones than the values produced by
    /// [`color_lerp`], which blends the encoded sRGB bytes.
    pub fn to_linear(self) -> [f32; 3] {
        let linear: LinSrgb<f32> = Srgb::from(self).into_format::<f32>().into_linear();
        [linear.red, linear.green, linear.blue]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb8> for Srgb<u8> {
    fn from(c: Rgb8) -> Self {
        Srgb::new(c.r, c.g, c.b)
    }
}

impl From<Srgb<u8>> for Rgb8 {
    fn from(c: Srgb<u8>) -> Self {
        Self::new(c.red, c.green, c.blue)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{}]", self.r, self.g, self.b)
    }
}
