//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: snapshots are drawn into a plain
//! framebuffer which is then flushed (diffed) to the terminal through crossterm.
//! No widget/layout library is involved.
//!
//! Also hosts the terminal-side engine collaborators (bell, redraw flag).

pub mod fb;
pub mod game_view;
pub mod hooks;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{number_label, Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use game_view::{tile_colors, AnchorY, GameView, Viewport};
pub use hooks::{BellSound, RedrawFlag};
pub use renderer::{encode_frame, TerminalRenderer};
