//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the 2048 rules, state management and the move algorithm.
//! It never touches the terminal, the filesystem or the clock directly: storage,
//! audio, analytics, rendering and randomness all come in through
//! [`hooks::Collaborators`].
//!
//! # Module Structure
//!
//! - [`grid`]: NxN cell storage with tile identity
//! - [`traversal`]: farthest-first visiting order per direction
//! - [`engine`]: move/merge/spawn, settle window, win and loss detection, undo
//! - [`history`]: single-slot undo snapshot
//! - [`annotations`]: per-move render metadata (previous positions, merge sources)
//! - [`hooks`]: collaborator traits and their no-op implementations
//! - [`rng`]: random sources (seeded LCG, `rand` adapters, fixed sequences)
//! - [`config`] / [`error`]: rule knobs and the error taxonomy
//!
//! # Game Rules
//!
//! - **Shift**: every tile slides as far as it can toward the chosen edge
//! - **Merge**: two equal tiles combine once per move; the score grows by the new value
//! - **Spawn**: a successful move places a 2 (10%: a 4) in a random empty cell
//! - **Win**: first tile of at least `win_value` (default 2048)
//! - **Loss**: full grid with no equal neighbours
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Collaborators, EngineConfig, GameEngine, SimpleRng};
//! use tui_2048_types::Direction;
//!
//! let mut game = GameEngine::new(EngineConfig::instant(), Collaborators::new(SimpleRng::new(7)))
//!     .unwrap();
//! game.load_values(&[2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], 0)
//!     .unwrap();
//!
//! assert!(game.attempt_move(Direction::Left));
//! assert_eq!(game.score(), 4);
//! assert!(game.undo().is_ok());
//! ```
//!
//! # Timing
//!
//! After a successful move the engine is busy for `settle_delay_ms` (160ms by
//! default). Call [`GameEngine::tick`](engine::GameEngine::tick) every frame
//! with elapsed time; win/loss is evaluated when the window closes.

pub mod annotations;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod history;
pub mod hooks;
pub mod rng;
pub mod snapshot;
pub mod tile;
pub mod traversal;

pub use tui_2048_types as types;

pub use annotations::MoveAnnotations;
pub use config::EngineConfig;
pub use engine::GameEngine;
pub use error::{ConfigError, EngineError};
pub use grid::Grid;
pub use history::{HistorySnapshot, UndoSlot};
pub use hooks::{
    BestScoreStore, Collaborators, EventSink, LogEventSink, NoRender, NullBestScore,
    NullEventSink, RenderHook, SilentSound, SoundHook,
};
pub use rng::{FixedSequence, RandomSource, SimpleRng};
pub use snapshot::{GameSnapshot, Phase, TileView};
pub use tile::{Tile, TileId};
pub use traversal::{traversal, Traversal};
