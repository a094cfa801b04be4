//! Event engine - the composition root of the game
//!
//! Two producers feed one queue:
//!
//! - the gravity timer ([`timer`]), one `Event::Tick` per period
//! - the keyboard service (`tui-blocks-input`), one `Event::Move` per key
//!
//! The [`event_loop`] is the only consumer and the only owner of the game
//! state. It dispatches each event to the move engine or the gravity driver
//! and then prints the board. [`run_game`] wires the three together for one
//! game.
//!
//! # Example
//!
//! ```
//! use tokio::sync::mpsc;
//! use tui_blocks_engine::EventLoop;
//! use tui_blocks_term::BoardPrinter;
//! use tui_blocks_types::{Event, Key};
//!
//! let (tx, mut rx) = mpsc::channel(8);
//! tx.try_send(Event::Tick).unwrap();
//! tx.try_send(Event::Move(Key::Quit)).unwrap();
//!
//! let mut event_loop = EventLoop::new(BoardPrinter::new(Vec::new()));
//! tokio_test::block_on(event_loop.run(&mut rx)).unwrap();
//! assert!(event_loop.state().has_active());
//! ```

pub mod config;
pub mod error;
pub mod event_loop;
pub mod game;
pub mod logging;
pub mod timer;

#[cfg(test)]
mod test_support;

pub use tui_blocks_core as core;
pub use tui_blocks_input as input;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;

pub use config::{log_path_from_env, EngineConfig};
pub use error::{EngineError, Result};
pub use event_loop::{EventLoop, Flow};
pub use game::run_game;
pub use logging::init_logging;
pub use timer::spawn_gravity_timer;
