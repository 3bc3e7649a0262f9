//! Shows the selected color in the window title.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use swatch_bevy::events::ColorSelected;
use swatch_core::Rgb8;

/// Title text for a selected color.
pub fn selection_title(color: Rgb8) -> String {
    format!("Selected RGB color: {color}")
}

/// Retitle the primary window with the last selection of the frame.
pub fn update_window_title(
    mut selections: MessageReader<ColorSelected>,
    mut window: Single<&mut Window, With<PrimaryWindow>>,
) {
    if let Some(last) = selections.read().last() {
        window.title = selection_title(last.color);
    }
}
