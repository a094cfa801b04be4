//! Engine configuration from environment variables.
//!
//! - `BLOCKS_TICK_MS`: gravity period in milliseconds (default: 1000)
//! - `BLOCKS_MOVE_GRAVITY`: `0`/`false` turns off the gravity step after each move
//! - `BLOCKS_INPUT`: `terminal` (default) or `stdin`
//! - `BLOCKS_QUEUE_DEPTH`: event channel capacity (default: 16)
//! - `BLOCKS_LOG_PATH`: write diagnostics to this file
//!
//! Invalid values fall back to the defaults with a warning. The log path is
//! read on its own by [`log_path_from_env`] so that logging is up before the
//! rest is parsed.

use std::env;
use std::fmt::Debug;
use std::time::Duration;

use tracing::warn;

use crate::input::InputSource;
use crate::types::TICK_MS;

const DEFAULT_QUEUE_DEPTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub tick: Duration,
    pub move_gravity: bool,
    pub input: InputSource,
    pub queue_depth: usize,
    pub log_path: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS),
            move_gravity: true,
            input: InputSource::Terminal,
            queue_depth: DEFAULT_QUEUE_DEPTH,
            log_path: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick = setting(&lookup, "BLOCKS_TICK_MS", defaults.tick, |s| {
            s.parse::<u64>()
                .ok()
                .filter(|&ms| ms > 0)
                .map(Duration::from_millis)
        });
        let move_gravity = setting(&lookup, "BLOCKS_MOVE_GRAVITY", defaults.move_gravity, parse_flag);
        let input = setting(&lookup, "BLOCKS_INPUT", defaults.input, InputSource::from_str);
        let queue_depth = setting(&lookup, "BLOCKS_QUEUE_DEPTH", defaults.queue_depth, |s| {
            s.parse::<usize>().ok().filter(|&n| n > 0)
        });

        Self {
            tick,
            move_gravity,
            input,
            queue_depth,
            log_path: log_path_from_lookup(&lookup),
        }
    }
}

/// `BLOCKS_LOG_PATH`, trimmed; blank counts as unset.
pub fn log_path_from_env() -> Option<String> {
    log_path_from_lookup(|name| env::var(name).ok())
}

fn log_path_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    lookup("BLOCKS_LOG_PATH")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse one variable, warning and keeping `default` when the value is bad.
fn setting<T: Debug>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
    parse: impl FnOnce(&str) -> Option<T>,
) -> T {
    let Some(raw) = lookup(name) else {
        return default;
    };
    match parse(raw.trim()) {
        Some(value) => value,
        None => {
            warn!(name, value = %raw, ?default, "invalid setting, using default");
            default
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
