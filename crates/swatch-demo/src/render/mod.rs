//! Picker rendering: hue strip, saturation/value quad, and indicators.
//!
//! Everything is a `Mesh2d` drawn by a single 2D camera. The strip never
//! changes after startup; the quad's vertex colors and the two indicator
//! transforms follow `PickerState`.

pub mod mesh;

use bevy::prelude::*;
use swatch_bevy::resources::PickerState;
use swatch_core::Rgb8;

use crate::theme;

/// Handle of the quad mesh, whose colors are rewritten on hue changes.
#[derive(Resource)]
pub struct QuadMeshHandle(pub Handle<Mesh>);

/// Marker for the hue strip mesh.
#[derive(Component)]
pub struct HueStrip;

/// Marker for the saturation/value quad mesh.
#[derive(Component)]
pub struct SvQuadSurface;

/// Marker for the bar that tracks the selected hue row.
#[derive(Component)]
pub struct HueIndicator;

/// Marker for the ring that tracks the selected quad point.
#[derive(Component)]
pub struct QuadIndicator;

/// Bevy plugin that draws the picker and keeps it in sync with the scene.
pub struct PickerRenderPlugin;

impl Plugin for PickerRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_picker_scene)
            .add_systems(Update, (sync_quad_colors, sync_indicators));
    }
}

fn window_extent(state: &PickerState) -> Vec2 {
    let (width, height) = state.picker.layout().window_size();
    Vec2::new(width as f32, height as f32)
}

/// Startup system: camera, surfaces, and indicators.
fn spawn_picker_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    picker: Option<Res<PickerState>>,
) {
    let Some(state) = picker else {
        tracing::warn!("No picker state; nothing to draw");
        return;
    };
    let window = window_extent(&state);
    let view = state.picker.renderable();

    commands.spawn(Camera2d);

    // Vertex colors are multiplied by the material color.
    let vertex_colored = materials.add(ColorMaterial::from_color(Color::WHITE));

    commands.spawn((
        HueStrip,
        Mesh2d(meshes.add(mesh::ramp_mesh(view.ramp, window))),
        MeshMaterial2d(vertex_colored.clone()),
        Transform::from_xyz(0.0, 0.0, theme::Z_SURFACE),
    ));

    let quad = meshes.add(mesh::quad_mesh(view.corners, window));
    commands.insert_resource(QuadMeshHandle(quad.clone()));
    commands.spawn((
        SvQuadSurface,
        Mesh2d(quad),
        MeshMaterial2d(vertex_colored),
        Transform::from_xyz(0.0, 0.0, theme::Z_SURFACE),
    ));

    let outline = materials.add(ColorMaterial::from_color(theme::INDICATOR_OUTLINE));
    let bar = theme::HUE_INDICATOR_SIZE;
    let bar_outline = bar + Vec2::splat(theme::HUE_INDICATOR_OUTLINE * 2.0);
    commands.spawn((
        HueIndicator,
        Mesh2d(meshes.add(Rectangle::from_size(bar_outline))),
        MeshMaterial2d(outline.clone()),
        Transform::from_translation(
            mesh::to_world(view.hue_indicator, window).extend(theme::Z_INDICATOR),
        ),
        children![(
            Mesh2d(meshes.add(Rectangle::from_size(bar))),
            MeshMaterial2d(materials.add(ColorMaterial::from_color(theme::HUE_INDICATOR_FILL))),
            Transform::from_xyz(0.0, 0.0, 0.1),
        )],
    ));

    let radius = theme::QUAD_INDICATOR_RADIUS;
    commands.spawn((
        QuadIndicator,
        Mesh2d(meshes.add(Annulus::new(radius, radius + theme::QUAD_INDICATOR_THICKNESS))),
        MeshMaterial2d(outline),
        Transform::from_translation(
            mesh::to_world(view.quad_indicator, window).extend(theme::Z_INDICATOR),
        ),
    ));
}

/// Rewrite the quad's vertex colors when the selected hue changes.
fn sync_quad_colors(
    picker: Option<Res<PickerState>>,
    handle: Option<Res<QuadMeshHandle>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut last_hue: Local<Option<Rgb8>>,
) {
    let (Some(state), Some(handle)) = (picker, handle) else {
        return;
    };
    if !state.is_changed() {
        return;
    }

    let hue = state.picker.quad().hue();
    if *last_hue == Some(hue) {
        return;
    }
    if let Some(mut quad) = meshes.get_mut(&handle.0) {
        quad.insert_attribute(
            Mesh::ATTRIBUTE_COLOR,
            mesh::quad_colors(state.picker.quad().corners()),
        );
        *last_hue = Some(hue);
    }
}

/// Move the indicators to the latest selection.
#[allow(clippy::type_complexity)]
fn sync_indicators(
    picker: Option<Res<PickerState>>,
    mut hue_indicator: Query<&mut Transform, (With<HueIndicator>, Without<QuadIndicator>)>,
    mut quad_indicator: Query<&mut Transform, (With<QuadIndicator>, Without<HueIndicator>)>,
) {
    let Some(state) = picker else {
        return;
    };
    if !state.is_changed() {
        return;
    }

    let window = window_extent(&state);
    let view = state.picker.renderable();
    for mut transform in hue_indicator.iter_mut() {
        transform.translation =
            mesh::to_world(view.hue_indicator, window).extend(theme::Z_INDICATOR);
    }
    for mut transform in quad_indicator.iter_mut() {
        transform.translation =
            mesh::to_world(view.quad_indicator, window).extend(theme::Z_INDICATOR);
    }
}
