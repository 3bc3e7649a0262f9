//! Selection state machine.
//!
//! ```text
//!            primary down
//!   Idle ─────────────────→ Selecting ──┐ pointer moved:
//!    ↑                          │       │   strip hit → hue + quad corner
//!    └──────────────────────────┘       │   quad hit  → normalized cursor
//!            primary up                 └── always    → recompute color
//! ```
//! Moves while idle and presses of other buttons are ignored.

use glam::Vec2;

use super::ColorPicker;
use crate::color::Rgb8;
use crate::error::Result;
use crate::geometry::{position_to_hue_index, position_to_normalized};

/// Whether pointer movement currently edits the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Selecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button or primary touch.
    Primary,
    Secondary,
    Middle,
    Other,
}

/// Input the picker reacts to. Positions are window pixels, y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(PointerButton),
    Released(PointerButton),
    Moved(Vec2),
}

impl ColorPicker {
    /// Feed one input event through the selection state machine.
    ///
    /// Returns the recomputed color when a selecting move was applied and
    /// `None` for everything that leaves the selection untouched.
    ///
    /// # Errors
    /// [`PickerError::InvalidInterpolationFraction`] if the cursor mapping
    /// produced a coordinate outside the quad. The picker is left with the
    /// hue and cursor of that move applied but the previous color.
    ///
    /// [`PickerError::InvalidInterpolationFraction`]: crate::PickerError::InvalidInterpolationFraction
    pub fn handle_event(&mut self, event: PointerEvent) -> Result<Option<Rgb8>> {
        match (self.state, event) {
            (_, PointerEvent::Pressed(PointerButton::Primary)) => {
                self.state = SelectionState::Selecting;
                Ok(None)
            }
            (_, PointerEvent::Released(PointerButton::Primary)) => {
                self.state = SelectionState::Idle;
                Ok(None)
            }
            (SelectionState::Selecting, PointerEvent::Moved(cursor)) => {
                self.select_at(cursor).map(Some)
            }
            _ => Ok(None),
        }
    }

    fn select_at(&mut self, cursor: Vec2) -> Result<Rgb8> {
        if self.strip_rect.contains(cursor) {
            let index = position_to_hue_index(
                cursor.y - self.strip_rect.min.y,
                self.layout.sample_spacing,
            );
            let hue = self.ramp.color_at(index);
            if hue != self.quad.hue() {
                tracing::debug!(index, %hue, "hue changed");
            }
            self.quad.set_hue(hue);
            self.hue_indicator = Vec2::new(self.strip_rect.center().x, cursor.y);
        }

        if self.quad_rect.contains(cursor) {
            self.normalized = position_to_normalized(cursor, &self.quad_rect);
            self.quad_indicator = cursor;
        }

        self.selected = self.quad.color_at(self.normalized)?;
        Ok(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PickerLayout;

    fn picker() -> ColorPicker {
        ColorPicker::new(PickerLayout::default()).unwrap()
    }

    fn press(p: &mut ColorPicker) {
        p.handle_event(PointerEvent::Pressed(PointerButton::Primary))
            .unwrap();
    }

    fn move_to(p: &mut ColorPicker, x: f32, y: f32) -> Option<Rgb8> {
        p.handle_event(PointerEvent::Moved(Vec2::new(x, y))).unwrap()
    }

    #[test]
    fn test_primary_button_toggles_state() {
        let mut p = picker();
        press(&mut p);
        assert_eq!(p.state(), SelectionState::Selecting);
        p.handle_event(PointerEvent::Released(PointerButton::Primary))
            .unwrap();
        assert_eq!(p.state(), SelectionState::Idle);
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        let mut p = picker();
        for button in [
            PointerButton::Secondary,
            PointerButton::Middle,
            PointerButton::Other,
        ] {
            assert_eq!(p.handle_event(PointerEvent::Pressed(button)), Ok(None));
        }
        assert_eq!(p.state(), SelectionState::Idle);
    }

    #[test]
    fn test_move_while_idle_is_a_no_op() {
        let mut p = picker();
        assert_eq!(move_to(&mut p, 30.0, 240.0), None);
        assert_eq!(move_to(&mut p, 275.0, 200.0), None);
        assert_eq!(p.selected(), Rgb8::RED);
        assert_eq!(p.quad().hue(), Rgb8::RED);
        assert_eq!(p.renderable().quad_indicator, Vec2::new(475.0, 0.0));
    }

    #[test]
    fn test_strip_move_sets_hue_and_corner() {
        let mut p = picker();
        press(&mut p);
        // Row 33 of 96 samples 32/96 of the wheel → pure blue.
        let selected = move_to(&mut p, 20.0, 167.0);
        assert_eq!(p.quad().hue(), Rgb8::new(0, 0, 255));
        // Quad cursor still on the top-right corner, so the selection is the hue.
        assert_eq!(selected, Some(Rgb8::new(0, 0, 255)));
        assert_eq!(p.renderable().hue_indicator, Vec2::new(30.0, 167.0));
    }

    #[test]
    fn test_quad_move_sets_cursor_and_indicator() {
        let mut p = picker();
        press(&mut p);
        let selected = move_to(&mut p, 75.0, 0.0);
        assert_eq!(selected, Some(Rgb8::WHITE));
        assert_eq!(p.normalized_cursor(), Vec2::ZERO);
        assert_eq!(p.renderable().quad_indicator, Vec2::new(75.0, 0.0));

        let selected = move_to(&mut p, 275.0, 474.0);
        let c = selected.unwrap();
        assert!(c.r <= 1 && c.g <= 1 && c.b <= 1, "near black, got {c}");
    }

    #[test]
    fn test_move_outside_regions_recomputes_without_changes() {
        let mut p = picker();
        press(&mut p);
        move_to(&mut p, 175.0, 100.0);
        let before = p.selected();
        let indicator = p.renderable().quad_indicator;

        // Gap between strip and quad.
        assert_eq!(move_to(&mut p, 60.0, 100.0), Some(before));
        // Below both regions.
        assert_eq!(move_to(&mut p, 200.0, 476.0), Some(before));
        assert_eq!(p.renderable().quad_indicator, indicator);
    }

    #[test]
    fn test_release_freezes_selection() {
        let mut p = picker();
        press(&mut p);
        let chosen = move_to(&mut p, 175.0, 100.0).unwrap();
        p.handle_event(PointerEvent::Released(PointerButton::Primary))
            .unwrap();

        assert_eq!(move_to(&mut p, 400.0, 400.0), None);
        assert_eq!(move_to(&mut p, 30.0, 10.0), None);
        assert_eq!(p.selected(), chosen);
    }

    #[test]
    fn test_hue_change_keeps_quad_cursor() {
        let mut p = picker();
        press(&mut p);
        move_to(&mut p, 275.0, 0.0);
        let cursor = p.normalized_cursor();

        // Pick the midpoint hue (0,240,255); the quad point stays where it was.
        move_to(&mut p, 30.0, 240.0);
        assert_eq!(p.normalized_cursor(), cursor);
        assert_eq!(p.selected(), Rgb8::new(127, 247, 255));
    }
}
