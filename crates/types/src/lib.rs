//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data: the engine, the terminal view and the input
//! layer all speak in these types, and none of them carry behaviour that
//! depends on I/O.
//!
//! # Grid Dimensions
//!
//! The classic game is played on a 4x4 grid:
//!
//! - **Default size**: 4 (rows and columns, indexed 0-3)
//! - **Supported sizes**: 2 through 8
//! - **Row index** grows downward, **column index** grows rightward
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_SIZE` | 4 | Side length of the square grid |
//! | `DEFAULT_WIN_VALUE` | 2048 | Tile value that wins the game |
//! | `DEFAULT_FOUR_PROBABILITY` | 0.1 | Chance a spawned tile is a 4 instead of a 2 |
//! | `DEFAULT_SETTLE_DELAY_MS` | 160 | Slide animation window before win/loss is evaluated |
//! | `DEFAULT_AD_UNDO_DELAY_MS` | 5000 | Interstitial duration before a rewarded undo applies |
//! | `TICK_MS` | 16 | Fixed timestep of the terminal loop (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Vector, DEFAULT_GRID_SIZE};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.vector(), Vector { row: 0, col: -1 });
//!
//! // Parse a game action
//! let action = GameAction::from_str("undo").unwrap();
//! assert_eq!(action, GameAction::Undo);
//!
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! ```

use serde::{Deserialize, Serialize};

/// Side length of the default grid (4x4)
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Smallest grid the engine accepts
pub const MIN_GRID_SIZE: usize = 2;

/// Largest grid the engine accepts
pub const MAX_GRID_SIZE: usize = 8;

/// Upper bound on the number of cells of any accepted grid
pub const MAX_CELLS: usize = MAX_GRID_SIZE * MAX_GRID_SIZE;

/// Tile value that triggers victory
pub const DEFAULT_WIN_VALUE: u32 = 2048;

/// Probability that a freshly spawned tile is a 4 (otherwise it is a 2)
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Slide animation window in milliseconds; the terminal check runs after it
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 160;

/// How long the interstitial runs before a rewarded undo is applied
pub const DEFAULT_AD_UNDO_DELAY_MS: u32 = 5000;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_defaults() {
        assert_eq!(DEFAULT_GRID_SIZE, 4);
        assert_eq!(DEFAULT_WIN_VALUE, 2048);
        assert_eq!(DEFAULT_SETTLE_DELAY_MS, 160);
        assert!((DEFAULT_FOUR_PROBABILITY - 0.1).abs() < f64::EPSILON);
        assert_eq!(MAX_CELLS, 64);
    }

    #[test]
    fn direction_vectors_are_unit_steps() {
        for dir in Direction::ALL {
            let v = dir.vector();
            assert_eq!(v.row.abs() + v.col.abs(), 1, "{:?}", dir);
        }
    }

    #[test]
    fn game_action_roundtrips_through_str() {
        for action in [
            GameAction::Move(Direction::Up),
            GameAction::Move(Direction::Right),
            GameAction::Undo,
            GameAction::RewardedUndo,
            GameAction::NewGame,
            GameAction::KeepPlaying,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn game_event_serializes_with_event_tag() {
        let ev = GameEvent::Move {
            direction: Direction::Down,
            score: 12,
        };
        let json = serde_json::to_string(&ev).unwrap();
        assert_eq!(json, r#"{"event":"move","direction":"down","score":12}"#);
        assert_eq!(ev.name(), "move");
    }
}

/// A cell coordinate on the grid (zero-based, row-major)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step one cell along `vector`.
    ///
    /// Returns `None` when the step would leave the `size`x`size` grid.
    ///
    /// ```
    /// use tui_2048_types::{Direction, Position};
    ///
    /// let p = Position::new(0, 1);
    /// assert_eq!(p.step(Direction::Left.vector(), 4), Some(Position::new(0, 0)));
    /// assert_eq!(p.step(Direction::Up.vector(), 4), None);
    /// ```
    pub fn step(self, vector: Vector, size: usize) -> Option<Self> {
        let row = self.row as isize + vector.row as isize;
        let col = self.col as isize + vector.col as isize;
        if row < 0 || col < 0 || row >= size as isize || col >= size as isize {
            return None;
        }
        Some(Self::new(row as usize, col as usize))
    }
}

/// Unit (row, col) delta for one move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub row: i8,
    pub col: i8,
}

/// The four directions tiles can be pushed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector: up=(-1,0), down=(1,0), left=(0,-1), right=(0,1)
    pub fn vector(&self) -> Vector {
        match self {
            Direction::Up => Vector { row: -1, col: 0 },
            Direction::Down => Vector { row: 1, col: 0 },
            Direction::Left => Vector { row: 0, col: -1 },
            Direction::Right => Vector { row: 0, col: 1 },
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions that can be applied to the engine
///
/// Produced by the key map and the swipe classifier; consumed by
/// `GameEngine::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Push every tile in a direction
    Move(Direction),
    /// Restore the grid and score from before the last move
    Undo,
    /// Undo gated behind an interstitial
    RewardedUndo,
    /// Throw the current game away and start over
    NewGame,
    /// Dismiss the victory screen and continue past the win tile
    KeepPlaying,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("down"), Some(GameAction::Move(Direction::Down)));
    /// assert_eq!(GameAction::from_str("newGame"), Some(GameAction::NewGame));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        if let Some(dir) = lower.strip_prefix("move").and_then(Direction::from_str) {
            return Some(GameAction::Move(dir));
        }
        match lower.as_str() {
            "undo" => Some(GameAction::Undo),
            "rewardedundo" => Some(GameAction::RewardedUndo),
            "newgame" | "restart" => Some(GameAction::NewGame),
            "keepplaying" | "continue" => Some(GameAction::KeepPlaying),
            other => Direction::from_str(other).map(GameAction::Move),
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Undo => "undo",
            GameAction::RewardedUndo => "rewardedUndo",
            GameAction::NewGame => "newGame",
            GameAction::KeepPlaying => "keepPlaying",
        }
    }
}

/// Cue passed to the sound hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Slide,
    Merge,
    GameOver,
    Undo,
    Error,
}

impl Sound {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sound::Slide => "slide",
            Sound::Merge => "merge",
            Sound::GameOver => "gameOver",
            Sound::Undo => "undo",
            Sound::Error => "error",
        }
    }
}

/// Fire-and-forget notification for the analytics sink
///
/// Serialized as a flat JSON object tagged by `event`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum GameEvent {
    Move { direction: Direction, score: u32 },
    Merge { value: u32, score: u32 },
    NewGame { best: u32 },
    Undo { score: u32 },
    Victory { score: u32 },
    GameOver { score: u32, best: u32 },
    AdView { ad_type: String },
}

impl GameEvent {
    /// Event name as used in the serialized tag
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::Move { .. } => "move",
            GameEvent::Merge { .. } => "merge",
            GameEvent::NewGame { .. } => "newGame",
            GameEvent::Undo { .. } => "undo",
            GameEvent::Victory { .. } => "victory",
            GameEvent::GameOver { .. } => "gameOver",
            GameEvent::AdView { .. } => "adView",
        }
    }
}
