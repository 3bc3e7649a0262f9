//! Swatch Core: domain layer for the hue/saturation-value color picker.
//!
//! This crate contains the color math (interpolation, hue ramp), the
//! cursor-to-color geometry, and the picker scene with its selection state
//! machine. No windowing or rendering dependencies.

pub mod color;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod scene;

// Re-exports for convenience.
pub use color::Rgb8;
pub use error::{PickerError, Result};
pub use layout::PickerLayout;
pub use scene::{ColorPicker, PointerButton, PointerEvent, RenderableState, SelectionState};
