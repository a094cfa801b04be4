//! Terminal "board printer" module.
//!
//! Turns the game board into text frames and writes them to the terminal.
//! The glyph mapping lives in [`frame`] and is pure; [`renderer`] owns the
//! byte sink and the raw-mode session.
//!
//! Glyphs:
//! - Wall: `*`
//! - Empty: ` `
//! - Block: `-` when marked by a horizontal block, `|` when vertical

pub mod frame;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use frame::{encode_frame_into, frame_lines, glyph};
pub use renderer::{BoardPrinter, FrameSink, TerminalRenderer};
