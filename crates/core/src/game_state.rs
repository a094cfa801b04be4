//! Game state module - the board plus the single active block
//!
//! `GameState` is owned by the event loop. Every mutation goes through the
//! methods here, in `moves`, or in `gravity`, which keep the active block's
//! three cells marked on the grid at all times.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Cell, Orientation, SPAWN_X, SPAWN_Y};

/// The falling straight 3-cell block, addressed by its center cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveBlock {
    pub x: i8,
    pub y: i8,
    pub orientation: Orientation,
}

impl ActiveBlock {
    pub fn new(x: i8, y: i8, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    /// Block at the top-center spawn position, horizontal
    pub fn spawn() -> Self {
        Self::new(SPAWN_X, SPAWN_Y, Orientation::Horizontal)
    }

    /// The three occupied cells, center in the middle
    pub fn cells(&self) -> [(i8, i8); 3] {
        let (dx, dy) = self.orientation.arm();
        [
            (self.x - dx, self.y - dy),
            (self.x, self.y),
            (self.x + dx, self.y + dy),
        ]
    }

    /// Same block moved by (dx, dy)
    pub fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Same block with the other orientation about the same center
    pub fn rotated(self) -> Self {
        Self {
            orientation: self.orientation.toggle(),
            ..self
        }
    }

    /// Grid mark for this block's cells
    pub fn mark(&self) -> Cell {
        Cell::Block(self.orientation)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    active: Option<ActiveBlock>,
}

impl GameState {
    /// Walled board, empty interior, no active block
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Lay down a terrain cell for test setups.
    ///
    /// Refused (returns false) for empty cells, anything outside the
    /// interior, and cells held by the active block.
    #[cfg(any(test, feature = "test-support"))]
    pub fn add_terrain(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if cell.is_empty() || !Board::is_interior(x, y) {
            return false;
        }
        if self.active.is_some_and(|block| block.cells().contains(&(x, y))) {
            return false;
        }
        self.board.set(x, y, cell)
    }

    pub fn active(&self) -> Option<ActiveBlock> {
        self.active
    }

    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    /// Spawn a new block at the top center.
    ///
    /// Returns false (and changes nothing) if a block is already active or
    /// the spawn cells are not all empty.
    pub fn spawn(&mut self) -> bool {
        self.place_block(ActiveBlock::spawn())
    }

    /// Make `block` the active block if none is active and its cells are empty.
    pub fn place_block(&mut self, block: ActiveBlock) -> bool {
        if self.active.is_some() {
            return false;
        }
        if !block.cells().iter().all(|&(x, y)| self.board.is_empty(x, y)) {
            return false;
        }
        self.paint(block);
        self.active = Some(block);
        true
    }

    /// Freeze the active block into terrain. Its cells stay marked.
    pub(crate) fn land(&mut self) -> Option<ActiveBlock> {
        self.active.take()
    }

    /// Move the active block to `target` if every cell it newly needs is empty.
    ///
    /// Cells shared between the current and target positions are the block's
    /// own, so only the rest are checked. On rejection nothing changes.
    pub(crate) fn try_relocate(&mut self, target: ActiveBlock) -> bool {
        let Some(current) = self.active else {
            return false;
        };

        let own = current.cells();
        let needed: ArrayVec<(i8, i8), 3> = target
            .cells()
            .into_iter()
            .filter(|cell| !own.contains(cell))
            .collect();

        if !needed.iter().all(|&(x, y)| self.board.is_empty(x, y)) {
            return false;
        }

        self.erase(current);
        self.paint(target);
        self.active = Some(target);
        true
    }

    /// True when no block is active, or the active block's cells are all
    /// inside the walls and carry its mark.
    pub fn active_is_marked(&self) -> bool {
        match self.active {
            None => true,
            Some(block) => block.cells().iter().all(|&(x, y)| {
                Board::is_interior(x, y) && self.board.get(x, y) == Some(block.mark())
            }),
        }
    }

    fn paint(&mut self, block: ActiveBlock) {
        for (x, y) in block.cells() {
            self.board.set(x, y, block.mark());
        }
    }

    fn erase(&mut self, block: ActiveBlock) {
        for (x, y) in block.cells() {
            self.board.set(x, y, Cell::Empty);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
