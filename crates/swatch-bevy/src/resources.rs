//! Bevy resources for the color picker.

use bevy::prelude::*;
use swatch_core::ColorPicker;

/// Bevy resource holding the picker scene.
///
/// This is the single source of truth for picker state within the ECS.
/// Only [`handle_pointer_input`](crate::systems::handle_pointer_input)
/// mutates it; render systems watch it with change detection.
#[derive(Resource)]
pub struct PickerState {
    pub picker: ColorPicker,
}
