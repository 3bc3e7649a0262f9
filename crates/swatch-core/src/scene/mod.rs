//! Picker scene: hue ramp, saturation/value quad, indicators, selection.
//!
//! [`ColorPicker`] owns every piece of mutable picker state. It is changed
//! only through [`ColorPicker::handle_event`]; renderers read it through
//! [`ColorPicker::renderable`].

mod selection;

use glam::Vec2;

use crate::color::{Rgb8, bilinear_interp, hue_ramp};
use crate::error::Result;
use crate::geometry::Rect;
use crate::layout::PickerLayout;

pub use selection::{PointerButton, PointerEvent, SelectionState};

/// One vertex of the hue strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueRampPoint {
    pub position: Vec2,
    pub color: Rgb8,
}

/// The hue strip as an ordered vertex list.
///
/// Points come in pairs (left edge, right edge) that share a row and a
/// color, which is the vertex order of a triangle strip.
#[derive(Debug, Clone)]
pub struct HueRamp {
    points: Vec<HueRampPoint>,
}

impl HueRamp {
    /// Sample the hue wheel once per row of `layout`.
    ///
    /// The sampled hue trails the row by one: rows 0 and 1 are both red and
    /// row `k >= 1` of `n` gets `hue_ramp((k - 1) / n)`, so the last row stops
    /// two steps short of wrapping back to red.
    pub fn new(layout: &PickerLayout) -> Self {
        let rows = layout.row_count();
        let points = (0..rows)
            .flat_map(|row| {
                let y = layout.sample_spacing * row as f32;
                let color = hue_ramp(row.saturating_sub(1) as f64 / rows as f64);
                [
                    HueRampPoint {
                        position: Vec2::new(layout.strip_left, y),
                        color,
                    },
                    HueRampPoint {
                        position: Vec2::new(layout.strip_right, y),
                        color,
                    },
                ]
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[HueRampPoint] {
        &self.points
    }

    /// Color of the point at `index`, clamped to the last row.
    fn color_at(&self, index: usize) -> Rgb8 {
        let last_row_start = self.points.len().saturating_sub(2);
        self.points[index.min(last_row_start)].color
    }
}

/// One vertex of the saturation/value quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadCorner {
    pub position: Vec2,
    pub color: Rgb8,
}

/// Corner indices, in quad vertex order.
pub const TOP_LEFT: usize = 0;
pub const BOTTOM_LEFT: usize = 1;
pub const BOTTOM_RIGHT: usize = 2;
pub const TOP_RIGHT: usize = 3;

/// The saturation/value quad.
///
/// The top row runs white → hue and the bottom row stays black. Only the
/// top-right color ever changes.
#[derive(Debug, Clone)]
pub struct SvQuad {
    corners: [QuadCorner; 4],
}

impl SvQuad {
    fn new(rect: &Rect, hue: Rgb8) -> Self {
        let max = rect.max();
        let corner = |position: Vec2, color: Rgb8| QuadCorner { position, color };
        Self {
            corners: [
                corner(rect.min, Rgb8::WHITE),
                corner(Vec2::new(rect.min.x, max.y), Rgb8::BLACK),
                corner(max, Rgb8::BLACK),
                corner(Vec2::new(max.x, rect.min.y), hue),
            ],
        }
    }

    pub fn corners(&self) -> &[QuadCorner; 4] {
        &self.corners
    }

    pub fn hue(&self) -> Rgb8 {
        self.corners[TOP_RIGHT].color
    }

    fn set_hue(&mut self, hue: Rgb8) {
        self.corners[TOP_RIGHT].color = hue;
    }

    /// Color at normalized point `p` inside the quad.
    pub fn color_at(&self, p: Vec2) -> Result<Rgb8> {
        let c = &self.corners;
        bilinear_interp(
            c[TOP_LEFT].color,
            c[BOTTOM_LEFT].color,
            c[BOTTOM_RIGHT].color,
            c[TOP_RIGHT].color,
            p,
        )
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderableState<'a> {
    pub ramp: &'a [HueRampPoint],
    pub corners: &'a [QuadCorner; 4],
    /// Center of the bar marking the selected hue row.
    pub hue_indicator: Vec2,
    /// Center of the ring marking the selected quad point.
    pub quad_indicator: Vec2,
    pub selected: Rgb8,
}

/// The picker scene and its selection state machine.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    layout: PickerLayout,
    strip_rect: Rect,
    quad_rect: Rect,
    ramp: HueRamp,
    quad: SvQuad,
    /// Pointer position inside the quad, normalized to `0..=1`.
    normalized: Vec2,
    hue_indicator: Vec2,
    quad_indicator: Vec2,
    selected: Rgb8,
    state: SelectionState,
}

impl ColorPicker {
    /// Build the scene for `layout`.
    ///
    /// Starts idle with red selected: the quad cursor sits on the top-right
    /// corner and the hue bar at the bottom of the strip.
    pub fn new(layout: PickerLayout) -> Result<Self> {
        layout.validate()?;

        let strip_rect = layout.strip_rect();
        let quad_rect = layout.quad_rect();
        let ramp = HueRamp::new(&layout);
        let quad = SvQuad::new(&quad_rect, Rgb8::RED);
        let normalized = Vec2::new(1.0, 0.0);
        let selected = quad.color_at(normalized)?;

        Ok(Self {
            hue_indicator: Vec2::new(strip_rect.center().x, strip_rect.max().y),
            quad_indicator: quad.corners()[TOP_RIGHT].position,
            layout,
            strip_rect,
            quad_rect,
            ramp,
            quad,
            normalized,
            selected,
            state: SelectionState::Idle,
        })
    }

    pub fn layout(&self) -> &PickerLayout {
        &self.layout
    }

    pub fn strip_rect(&self) -> &Rect {
        &self.strip_rect
    }

    pub fn quad_rect(&self) -> &Rect {
        &self.quad_rect
    }

    pub fn ramp(&self) -> &HueRamp {
        &self.ramp
    }

    pub fn quad(&self) -> &SvQuad {
        &self.quad
    }

    pub fn normalized_cursor(&self) -> Vec2 {
        self.normalized
    }

    pub fn selected(&self) -> Rgb8 {
        self.selected
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn renderable(&self) -> RenderableState<'_> {
        RenderableState {
            ramp: self.ramp.points(),
            corners: self.quad.corners(),
            hue_indicator: self.hue_indicator,
            quad_indicator: self.quad_indicator,
            selected: self.selected,
        }
    }
}
