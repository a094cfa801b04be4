//! Event loop: the single owner of `GameState`.
//!
//! Ticks and key moves arrive on one queue and are dispatched strictly one at
//! a time. An event's state change and its frame are finished before the next
//! event is taken off the queue, so the timer and the keyboard can never
//! interleave their effects.

use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, warn};

use crate::core::{GameState, StepOutcome};
use crate::error::{EngineError, Result};
use crate::term::FrameSink;
use crate::types::{Event, Key};

/// Whether the loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct EventLoop<S: FrameSink> {
    state: GameState,
    sink: S,
    /// Every non-quit key also runs one gravity step.
    move_gravity: bool,
    dispatched: u64,
}

impl<S: FrameSink> EventLoop<S> {
    pub fn new(sink: S) -> Self {
        Self::with_state(GameState::new(), sink)
    }

    /// Start from an existing state instead of a fresh board.
    pub fn with_state(state: GameState, sink: S) -> Self {
        Self {
            state,
            sink,
            move_gravity: true,
            dispatched: 0,
        }
    }

    pub fn with_move_gravity(mut self, enabled: bool) -> Self {
        self.move_gravity = enabled;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Events taken off the queue so far, quit included
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Draw the current board.
    pub fn render(&mut self) -> Result<()> {
        self.sink
            .present(self.state.board())
            .map_err(EngineError::Render)
    }

    /// Process one event to completion, including its frame.
    pub fn dispatch(&mut self, event: Event) -> Result<Flow> {
        self.dispatched += 1;

        match event {
            Event::Tick => self.gravity_step(),
            Event::Move(Key::Quit) => {
                info!("quit requested");
                return Ok(Flow::Quit);
            }
            Event::Move(key) => {
                // A refused spawn would be refused again by the gravity step.
                if self.state.has_active() || self.state.spawn() {
                    let moved = self.state.apply_key(key);
                    debug!(?key, moved, "move");
                    if self.move_gravity {
                        self.gravity_step();
                    }
                } else {
                    warn!(?key, "spawn cells occupied; key ignored");
                }
            }
        }

        debug_assert!(self.state.board().boundary_intact());
        debug_assert!(self.state.active_is_marked());

        self.render()?;
        Ok(Flow::Continue)
    }

    /// Render once, then dispatch queued events until Quit.
    ///
    /// Returns `EngineError::InputClosed` if the queue closes without a Quit.
    /// After Quit the queue is closed; nothing else is dispatched.
    pub async fn run(&mut self, events: &mut Receiver<Event>) -> Result<()> {
        self.render()?;

        while let Some(event) = events.recv().await {
            if self.dispatch(event)? == Flow::Quit {
                events.close();
                return Ok(());
            }
        }

        Err(EngineError::InputClosed)
    }

    fn gravity_step(&mut self) {
        match self.state.step() {
            StepOutcome::SpawnBlocked => warn!("spawn cells occupied; waiting for next tick"),
            outcome => debug!(?outcome, "gravity"),
        }
    }
}
