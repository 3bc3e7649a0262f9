//! Swatch Demo: standalone hue/saturation-value color picker.
//!
//! Opens a fixed-size window with the hue strip on the left and the
//! saturation/value quad on the right. Drag with the left mouse button to
//! pick; the window title shows the selected color.

mod config;
mod render;
mod theme;
mod title;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use swatch_bevy::SwatchPlugin;

use config::AppConfig;
use render::PickerRenderPlugin;

fn main() -> AppExit {
    let config = AppConfig::default();
    let (width, height) = config.layout.window_size();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: theme::WINDOW_TITLE.into(),
                resolution: WindowResolution::new(width, height),
                resizable: false,
                present_mode: PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(theme::BACKGROUND))
        .insert_resource(config.winit_settings())
        .add_plugins(SwatchPlugin {
            layout: config.layout.clone(),
        })
        .add_plugins(PickerRenderPlugin)
        .insert_resource(config)
        .add_systems(Startup, config::log_config)
        .add_systems(Update, title::update_window_title)
        .run()
}
