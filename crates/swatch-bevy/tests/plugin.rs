//! Headless plugin tests: input messages in, picker state and
//! `ColorSelected` messages out. No window or renderer required.

use bevy::input::ButtonState;
use bevy::input::mouse::{MouseButton, MouseButtonInput};
use bevy::prelude::*;
use bevy::window::{CursorMoved, WindowEvent};
use swatch_bevy::SwatchPlugin;
use swatch_bevy::events::ColorSelected;
use swatch_bevy::resources::PickerState;
use swatch_bevy::systems::handle_pointer_input;
use swatch_core::{PickerLayout, Rgb8, SelectionState};

/// Colors seen on `ColorSelected`, in order.
#[derive(Resource, Default)]
struct Seen(Vec<Rgb8>);

fn record_selections(mut reader: MessageReader<ColorSelected>, mut seen: ResMut<Seen>) {
    seen.0.extend(reader.read().map(|m| m.color));
}

fn test_app() -> App {
    let mut app = App::new();
    app.add_message::<WindowEvent>()
        .add_plugins(SwatchPlugin::default())
        .init_resource::<Seen>()
        .add_systems(PreUpdate, record_selections.after(handle_pointer_input));
    app
}

fn button(app: &mut App, button: MouseButton, state: ButtonState) {
    app.world_mut()
        .write_message(WindowEvent::MouseButtonInput(MouseButtonInput {
            button,
            state,
            window: Entity::PLACEHOLDER,
        }));
}

fn move_to(app: &mut App, x: f32, y: f32) {
    app.world_mut()
        .write_message(WindowEvent::CursorMoved(CursorMoved {
            window: Entity::PLACEHOLDER,
            position: Vec2::new(x, y),
            delta: None,
        }));
}

fn picker_state(app: &App) -> &PickerState {
    app.world().resource::<PickerState>()
}

#[test]
fn test_plugin_inserts_idle_picker() {
    let mut app = test_app();
    app.update();

    let state = picker_state(&app);
    assert_eq!(state.picker.state(), SelectionState::Idle);
    assert_eq!(state.picker.selected(), Rgb8::RED);
    assert!(app.world().resource::<Seen>().0.is_empty());
}

#[test]
fn test_drag_selects_and_emits_color() {
    let mut app = test_app();
    button(&mut app, MouseButton::Left, ButtonState::Pressed);
    move_to(&mut app, 30.0, 240.0);
    app.update();

    move_to(&mut app, 275.0, 237.5);
    app.update();

    let state = picker_state(&app);
    assert_eq!(state.picker.state(), SelectionState::Selecting);
    assert_eq!(state.picker.selected(), Rgb8::new(63, 123, 127));
    assert_eq!(
        app.world().resource::<Seen>().0,
        vec![Rgb8::new(0, 240, 255), Rgb8::new(63, 123, 127)]
    );
}

#[test]
fn test_moves_without_button_emit_nothing() {
    let mut app = test_app();
    move_to(&mut app, 30.0, 240.0);
    move_to(&mut app, 200.0, 100.0);
    app.update();

    assert!(app.world().resource::<Seen>().0.is_empty());
    assert_eq!(picker_state(&app).picker.selected(), Rgb8::RED);
}

#[test]
fn test_right_button_does_not_select() {
    let mut app = test_app();
    button(&mut app, MouseButton::Right, ButtonState::Pressed);
    move_to(&mut app, 200.0, 100.0);
    app.update();

    assert!(app.world().resource::<Seen>().0.is_empty());
}

#[test]
fn test_release_stops_selection() {
    let mut app = test_app();
    button(&mut app, MouseButton::Left, ButtonState::Pressed);
    move_to(&mut app, 200.0, 100.0);
    app.update();
    let chosen = picker_state(&app).picker.selected();

    button(&mut app, MouseButton::Left, ButtonState::Released);
    app.update();
    move_to(&mut app, 400.0, 400.0);
    app.update();

    assert_eq!(picker_state(&app).picker.state(), SelectionState::Idle);
    assert_eq!(picker_state(&app).picker.selected(), chosen);
    assert_eq!(app.world().resource::<Seen>().0.len(), 1);
}

#[test]
fn test_move_after_release_in_same_frame_is_ignored() {
    let mut app = test_app();
    button(&mut app, MouseButton::Left, ButtonState::Pressed);
    move_to(&mut app, 275.0, 100.0);
    app.update();
    let chosen = picker_state(&app).picker.selected();
    let indicator = picker_state(&app).picker.renderable().quad_indicator;

    button(&mut app, MouseButton::Left, ButtonState::Released);
    move_to(&mut app, 80.0, 400.0);
    app.update();

    let state = picker_state(&app);
    assert_eq!(state.picker.state(), SelectionState::Idle);
    assert_eq!(state.picker.selected(), chosen);
    assert_eq!(state.picker.renderable().quad_indicator, indicator);
    assert_eq!(app.world().resource::<Seen>().0, vec![chosen]);
}

#[test]
fn test_press_move_release_in_one_frame_selects_once() {
    let mut app = test_app();
    button(&mut app, MouseButton::Left, ButtonState::Pressed);
    move_to(&mut app, 75.0, 0.0);
    button(&mut app, MouseButton::Left, ButtonState::Released);
    move_to(&mut app, 275.0, 400.0);
    app.update();

    assert_eq!(picker_state(&app).picker.state(), SelectionState::Idle);
    assert_eq!(app.world().resource::<Seen>().0, vec![Rgb8::WHITE]);
}

#[test]
fn test_invalid_layout_skips_picker_and_exits_with_error() {
    let mut app = App::new();
    app.add_message::<WindowEvent>()
        .add_plugins(SwatchPlugin {
            layout: PickerLayout {
                sample_count: 7,
                ..Default::default()
            },
        });
    app.update();

    assert!(app.world().get_resource::<PickerState>().is_none());
    assert_eq!(app.should_exit(), Some(AppExit::error()));
}

#[test]
fn test_valid_layout_keeps_running() {
    let mut app = test_app();
    app.update();
    assert_eq!(app.should_exit(), None);
}
