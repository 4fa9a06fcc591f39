//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and turns
//! mouse drags into swipe directions. Independent of any UI framework.

pub mod map;
pub mod swipe;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use swipe::{classify_swipe, SwipeTracker, DEFAULT_SWIPE_THRESHOLD};
