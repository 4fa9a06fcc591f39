//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates under one name (`tui_2048::{core, input,
//! store, term, types}`) and hosts the runner's configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_store as store;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub use config::AppConfig;
