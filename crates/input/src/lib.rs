//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events (or raw bytes) into [`crate::types::Key`] and
//! runs the keyboard service thread that feeds the event loop's queue. Keys the
//! game does not use never leave this crate.

pub mod keyboard;
pub mod map;

pub use tui_blocks_types as types;

pub use keyboard::{forward_bytes, forward_terminal_keys, InputSource, KeyboardService};
pub use map::{key_from_event, should_quit};
