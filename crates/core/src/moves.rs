//! Move engine - left, right and rotate requests against the active block
//!
//! Each operation either applies completely or leaves the state untouched.
//! A request is rejected when any cell the block would newly occupy is not
//! empty; walls and landed blocks are never entered, so the block can never
//! leave the interior.

use crate::game_state::GameState;
use crate::types::Key;

impl GameState {
    /// Shift the active block one column left.
    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    /// Shift the active block one column right.
    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    /// Toggle orientation about the center cell.
    ///
    /// Only the two arm cells of the new orientation are checked; the center
    /// never moves.
    pub fn rotate(&mut self) -> bool {
        match self.active() {
            Some(block) => self.try_relocate(block.rotated()),
            None => false,
        }
    }

    /// Apply the move a key stands for. Soft drop and quit move nothing here.
    pub fn apply_key(&mut self, key: Key) -> bool {
        match key {
            Key::Left => self.move_left(),
            Key::Right => self.move_right(),
            Key::Rotate => self.rotate(),
            Key::SoftDrop | Key::Quit => false,
        }
    }

    fn shift(&mut self, dx: i8) -> bool {
        match self.active() {
            Some(block) => self.try_relocate(block.shifted(dx, 0)),
            None => false,
        }
    }
}
