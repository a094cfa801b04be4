//! Gravity driver - one step per timer tick
//!
//! A step spawns a block when none is active, otherwise moves the active
//! block down one row or lands it. Landing leaves the cells marked and clears
//! the active block; the replacement only spawns on the following step.

use crate::game_state::GameState;

/// What a single gravity step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No block was active; a new one appeared at the top
    Spawned,
    /// The active block moved down one row
    Descended,
    /// The active block could not descend and is now terrain
    Landed,
    /// No block was active and the spawn cells are occupied
    SpawnBlocked,
}

impl GameState {
    /// Advance the game by one gravity tick.
    pub fn step(&mut self) -> StepOutcome {
        let Some(block) = self.active() else {
            return if self.spawn() {
                StepOutcome::Spawned
            } else {
                StepOutcome::SpawnBlocked
            };
        };

        if self.try_relocate(block.shifted(0, 1)) {
            StepOutcome::Descended
        } else {
            self.land();
            StepOutcome::Landed
        }
    }
}
