//! Mouse-drag swipes.
//!
//! A drag from button-down to button-up is a swipe when it travels at least
//! the threshold along its dominant axis. Distances are in terminal cells.

use crate::types::Direction;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Minimum drag distance, in cells, for a swipe
pub const DEFAULT_SWIPE_THRESHOLD: u16 = 2;

/// Classify a drag delta. Ties between axes go vertical.
pub fn classify_swipe(dx: i32, dy: i32, threshold: u16) -> Option<Direction> {
    let threshold = i32::from(threshold.max(1));
    if dx.abs() > dy.abs() {
        if dx.abs() < threshold {
            None
        } else if dx > 0 {
            Some(Direction::Right)
        } else {
            Some(Direction::Left)
        }
    } else if dy.abs() < threshold {
        None
    } else if dy > 0 {
        Some(Direction::Down)
    } else {
        Some(Direction::Up)
    }
}

/// Tracks a left-button drag across mouse events.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: u16,
    start: Option<(u16, u16)>,
}

impl SwipeTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    /// Feed one mouse event; returns a direction when a drag completes.
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (col, row) = self.start.take()?;
                let dx = i32::from(event.column) - i32::from(col);
                let dy = i32::from(event.row) - i32::from(row);
                classify_swipe(dx, dy, self.threshold)
            }
            _ => None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}
