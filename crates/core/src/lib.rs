//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the board, the active block, and the rules that move
//! it. It has **zero dependencies** on terminal, timers, or I/O; the event loop
//! owns a [`GameState`] and calls into it one event at a time.
//!
//! # Module Structure
//!
//! - [`board`]: 22x21 walled grid with bounds-checked cell access
//! - [`game_state`]: board plus the single active block, spawn and relocation
//! - [`moves`]: left, right and rotate
//! - [`gravity`]: per-tick spawn, descend, or land
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{GameState, StepOutcome};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.step(), StepOutcome::Spawned);
//! assert!(game.move_left());
//! assert_eq!(game.step(), StepOutcome::Descended);
//!
//! let block = game.active().unwrap();
//! assert_eq!((block.x, block.y), (9, 1));
//! ```

pub mod board;
pub mod game_state;
pub mod gravity;
pub mod moves;

pub use tui_blocks_types as types;

pub use board::Board;
pub use game_state::{ActiveBlock, GameState};
pub use gravity::StepOutcome;
