//! Mouse-drag swipes.
//!
//! A swipe is a left-button press followed by a release somewhere else. The dominant axis
//! of the drag picks the direction. Terminal cells are roughly twice as tall as they are
//! wide, so vertical distance counts double.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::Direction;

/// Drags shorter than this (in weighted columns) are treated as clicks.
pub const DEFAULT_MIN_SWIPE: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    min_distance: u16,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SWIPE)
    }
}

impl SwipeTracker {
    pub fn new(min_distance: u16) -> Self {
        Self {
            start: None,
            min_distance,
        }
    }

    /// Feed a mouse event; returns a direction when a swipe completes.
    pub fn handle_mouse(&mut self, ev: MouseEvent) -> Option<Direction> {
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some((ev.column, ev.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (x0, y0) = self.start.take()?;
                self.classify(x0, y0, ev.column, ev.row)
            }
            _ => None,
        }
    }

    /// Forget a half-finished drag (e.g. after a resize).
    pub fn reset(&mut self) {
        self.start = None;
    }

    fn classify(&self, x0: u16, y0: u16, x1: u16, y1: u16) -> Option<Direction> {
        let dx = x1 as i32 - x0 as i32;
        let dy = (y1 as i32 - y0 as i32) * 2;
        if dx.abs().max(dy.abs()) < self.min_distance as i32 {
            return None;
        }

        if dx.abs() >= dy.abs() {
            Some(if dx > 0 { Direction::Right } else { Direction::Left })
        } else {
            Some(if dy > 0 { Direction::Down } else { Direction::Up })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn swipe(t: &mut SwipeTracker, from: (u16, u16), to: (u16, u16)) -> Option<Direction> {
        assert_eq!(
            t.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), from.0, from.1)),
            None
        );
        t.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), to.0, to.1));
        t.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), to.0, to.1))
    }

    #[test]
    fn test_horizontal_swipes() {
        let mut t = SwipeTracker::default();
        assert_eq!(swipe(&mut t, (10, 10), (20, 11)), Some(Direction::Right));
        assert_eq!(swipe(&mut t, (20, 10), (5, 9)), Some(Direction::Left));
    }

    #[test]
    fn test_vertical_swipes_weight_rows() {
        let mut t = SwipeTracker::default();
        // 3 rows = 6 weighted columns, beats 5 columns sideways.
        assert_eq!(swipe(&mut t, (10, 10), (15, 13)), Some(Direction::Down));
        assert_eq!(swipe(&mut t, (10, 10), (10, 7)), Some(Direction::Up));
    }

    #[test]
    fn test_short_drag_is_a_click() {
        let mut t = SwipeTracker::default();
        assert_eq!(swipe(&mut t, (10, 10), (12, 11)), None);
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut t = SwipeTracker::default();
        assert_eq!(
            t.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30, 3)),
            None
        );

        t.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        t.reset();
        assert_eq!(
            t.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30, 0)),
            None
        );
    }

    #[test]
    fn test_right_button_does_not_swipe() {
        let mut t = SwipeTracker::default();
        t.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0));
        assert_eq!(
            t.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Right), 30, 0)),
            None
        );
    }
}
