//! Bevy systems for the color picker.
//!
//! Pointer messages from the window are translated into
//! [`PointerEvent`]s and fed to the picker. These systems are the ONLY
//! place picker state changes.

use bevy::input::mouse::MouseButton;
use bevy::prelude::*;
use bevy::window::WindowEvent;
use swatch_core::{PickerError, PointerButton, PointerEvent};

use crate::events::ColorSelected;
use crate::resources::PickerState;

/// Feed this frame's pointer input through the selection state machine.
///
/// Reads [`WindowEvent`], which carries button transitions and cursor moves
/// in the order the window delivered them, so a move that follows a
/// release within one frame no longer selects.
pub fn handle_pointer_input(
    mut window_events: MessageReader<WindowEvent>,
    picker: Option<ResMut<PickerState>>,
    mut selected: MessageWriter<ColorSelected>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(mut state) = picker else {
        window_events.clear();
        return;
    };

    for event in window_events.read().filter_map(pointer_event) {
        match state.picker.handle_event(event) {
            Ok(Some(color)) => {
                tracing::debug!("Selected RGB color: {color}");
                selected.write(ColorSelected { color });
            }
            Ok(None) => {}
            Err(e) => {
                exit.write(exit_on_picker_error(&e));
                return;
            }
        }
    }
}

/// A failed selection means the cursor mapping is broken, not a runtime
/// condition: log it and request an error exit.
pub fn exit_on_picker_error(error: &PickerError) -> AppExit {
    tracing::error!("Color selection failed: {error}");
    AppExit::error()
}

/// Startup system: the picker could not be built, so there is nothing to run.
pub fn exit_on_invalid_layout(mut exit: MessageWriter<AppExit>) {
    exit.write(AppExit::error());
}

fn pointer_event(event: &WindowEvent) -> Option<PointerEvent> {
    match event {
        WindowEvent::MouseButtonInput(input) => {
            let button = convert_button(input.button);
            Some(if input.state.is_pressed() {
                PointerEvent::Pressed(button)
            } else {
                PointerEvent::Released(button)
            })
        }
        WindowEvent::CursorMoved(moved) => Some(PointerEvent::Moved(moved.position)),
        _ => None,
    }
}

fn convert_button(b: MouseButton) -> PointerButton {
    match b {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}
