//! File-backed `tracing` setup.
//!
//! The terminal belongs to the game, so logs only ever go to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `log_path`.
///
/// Returns `Ok(false)` without installing anything when no path is given.
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init(log_path: Option<&Path>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow!("installing log subscriber: {err}"))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(true)
}
