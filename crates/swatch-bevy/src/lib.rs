//! Swatch Bevy Plugin: drives the color picker scene from Bevy's ECS.
//!
//! Provides `SwatchPlugin` which owns the picker as a resource, feeds it
//! window pointer input, and announces every recomputed selection.

pub mod events;
pub mod resources;
pub mod systems;

use bevy::prelude::*;
use swatch_core::{ColorPicker, PickerLayout};

use events::ColorSelected;
use resources::PickerState;
use systems::{exit_on_invalid_layout, handle_pointer_input};

/// Main Bevy plugin for the color picker.
///
/// Registers:
/// - `PickerState` built from the configured layout
/// - the outbound `ColorSelected` message
/// - pointer input handling in `PreUpdate`, so `Update` systems see the
///   selection of the current frame
#[derive(Default)]
pub struct SwatchPlugin {
    pub layout: PickerLayout,
}

impl Plugin for SwatchPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ColorSelected>()
            .add_systems(PreUpdate, handle_pointer_input);

        match ColorPicker::new(self.layout.clone()) {
            Ok(picker) => {
                let (width, height) = picker.layout().window_size();
                tracing::info!(
                    "Color picker ready: {} hue samples, {}x{} window",
                    picker.ramp().points().len(),
                    width,
                    height
                );
                app.insert_resource(PickerState { picker });
            }
            Err(e) => {
                tracing::error!("Failed to build color picker: {e}");
                app.add_systems(Startup, exit_on_invalid_layout);
            }
        }
    }
}
