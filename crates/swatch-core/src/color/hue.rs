//! Fully saturated hue ramp.
//!
//! The color wheel is split into six segments of 256 steps each. Within a
//! segment every channel is either pinned (0 or 255) or ramps with the
//! intra-segment offset `x`:
//! ```text
//!   seg   red      green    blue       transition
//!   0     255      0        x          red     → magenta
//!   1     255 − x  0        255        magenta → blue
//!   2     0        x        255        blue    → cyan
//!   3     0        255      255 − x    cyan    → green
//!   4     x        255      0          green   → yellow
//!   5     255      255 − x  0          yellow  → red
//! ```

use super::Rgb8;

/// Steps per segment.
const SEGMENT_LEN: i64 = 256;

/// How one channel behaves across a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChannelRamp {
    Zero,
    Full,
    Rising,
    Falling,
}

impl ChannelRamp {
    fn eval(self, x: u8) -> u8 {
        match self {
            Self::Zero => 0,
            Self::Full => 255,
            Self::Rising => x,
            Self::Falling => 255 - x,
        }
    }
}

use ChannelRamp::{Falling, Full, Rising, Zero};

/// `[red, green, blue]` behavior for each of the six segments.
const SEGMENTS: [[ChannelRamp; 3]; 6] = [
    [Full, Zero, Rising],
    [Falling, Zero, Full],
    [Zero, Rising, Full],
    [Zero, Full, Falling],
    [Rising, Full, Zero],
    [Full, Falling, Zero],
];

/// Map `ratio` in `0..=1` to a fully saturated color on the ramp.
///
/// The ramp is periodic: the segment index wraps, so `1.0` lands on red
/// again and values just below `1.0` approach it from the yellow side.
pub fn hue_ramp(ratio: f64) -> Rgb8 {
    let steps = SEGMENT_LEN * SEGMENTS.len() as i64;
    // Truncate like an integer cast, then wrap into one turn of the wheel.
    let n = ((ratio * steps as f64) as i64).rem_euclid(steps);
    let segment = (n / SEGMENT_LEN) as usize;
    let x = (n % SEGMENT_LEN) as u8;

    let [red, green, blue] = SEGMENTS[segment];
    Rgb8::new(red.eval(x), green.eval(x), blue.eval(x))
}
