//! Mesh builders for the hue strip and the saturation/value quad.
//!
//! Picker positions are window pixels (origin top-left, y down); Bevy's
//! 2D camera puts the origin at the window center with y up.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use swatch_core::Rgb8;
use swatch_core::scene::{HueRampPoint, QuadCorner};

/// Convert a window pixel position to 2D world space.
pub fn to_world(p: Vec2, window: Vec2) -> Vec2 {
    Vec2::new(p.x - window.x * 0.5, window.y * 0.5 - p.y)
}

fn vertex_color(c: Rgb8) -> [f32; 4] {
    let [r, g, b] = c.to_linear();
    [r, g, b, 1.0]
}

/// Triangle strip through the ramp points, colored per vertex.
pub fn ramp_mesh(points: &[HueRampPoint], window: Vec2) -> Mesh {
    let positions: Vec<[f32; 3]> = points
        .iter()
        .map(|p| to_world(p.position, window).extend(0.0).to_array())
        .collect();
    let colors: Vec<[f32; 4]> = points.iter().map(|p| vertex_color(p.color)).collect();

    Mesh::new(
        PrimitiveTopology::TriangleStrip,
        RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
}

/// Two triangles over the quad corners (top-left, bottom-left,
/// bottom-right, top-right). The color attribute is rewritten whenever the
/// hue changes, so the mesh stays in the main world.
pub fn quad_mesh(corners: &[QuadCorner; 4], window: Vec2) -> Mesh {
    let positions: Vec<[f32; 3]> = corners
        .iter()
        .map(|c| to_world(c.position, window).extend(0.0).to_array())
        .collect();

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, quad_colors(corners))
    .with_inserted_indices(Indices::U16(vec![0, 1, 2, 0, 2, 3]))
}

/// Per-vertex colors of the quad, in corner order.
pub fn quad_colors(corners: &[QuadCorner; 4]) -> Vec<[f32; 4]> {
    corners.iter().map(|c| vertex_color(c.color)).collect()
}
