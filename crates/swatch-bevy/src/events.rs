//! Bevy messages for cross-system communication.

use bevy::prelude::*;
use swatch_core::Rgb8;

/// Fired whenever a selecting pointer move recomputes the picked color.
///
/// Fired even if the color is unchanged, once per applied move.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSelected {
    pub color: Rgb8,
}
