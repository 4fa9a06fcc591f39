//! Single-slot undo history.
//!
//! Holds at most one snapshot: the grid values and score from just before the
//! last successful move. Undo consumes it; the next move overwrites it.

use crate::grid::Grid;

/// Grid values (row-major, 0 = empty) and score before a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot {
    pub values: Vec<u32>,
    pub score: u32,
}

impl HistorySnapshot {
    pub fn capture(grid: &Grid, score: u32) -> Self {
        Self {
            values: grid.values(),
            score,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoSlot {
    slot: Option<HistorySnapshot>,
}

impl UndoSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a snapshot, replacing any previous one
    pub fn commit(&mut self, snapshot: HistorySnapshot) {
        self.slot = Some(snapshot);
    }

    /// Remove and return the snapshot
    pub fn take(&mut self) -> Option<HistorySnapshot> {
        self.slot.take()
    }

    pub fn peek(&self) -> Option<&HistorySnapshot> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}
