//! Diagnostics setup.
//!
//! The screen belongs to the board printer while the game runs, so tracing
//! output only goes to a file. Without a log path nothing is installed.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{EngineError, Result};

/// Install a file-backed subscriber. Returns whether one was installed.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_logging(log_path: Option<&str>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| EngineError::LogFile {
            path: path.to_string(),
            source,
        })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok();
    Ok(installed)
}
