//! Board module - manages the game grid
//!
//! The board is a 22x21 grid where each cell is empty, wall, or a block mark.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..21 (left to right), y ranges 0..20 (top to bottom).
//! Columns 0 and 21 and the whole of row 20 are the permanent playfield boundary.

use crate::types::{Cell, GAME_HEIGHT, GAME_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (GAME_WIDTH as usize) * (GAME_HEIGHT as usize);

/// The game board - 22 columns x 21 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a board with boundary walls and an empty interior
    pub fn new() -> Self {
        let mut board = Self {
            cells: [Cell::Empty; BOARD_SIZE],
        };
        for y in 0..GAME_HEIGHT as i8 {
            board.set(0, y, Cell::Wall);
            board.set(GAME_WIDTH as i8 - 1, y, Cell::Wall);
        }
        for x in 0..GAME_WIDTH as i8 {
            board.set(x, GAME_HEIGHT as i8 - 1, Cell::Wall);
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GAME_WIDTH as i8 || y < 0 || y >= GAME_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GAME_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        GAME_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        GAME_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    /// Check if (x, y) lies strictly inside the walls
    pub fn is_interior(x: i8, y: i8) -> bool {
        x > 0 && x < GAME_WIDTH as i8 - 1 && (0..GAME_HEIGHT as i8 - 1).contains(&y)
    }

    /// One row of cells, left to right
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = GAME_WIDTH as usize;
        let start = y * width;
        &self.cells[start..start + width]
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True when both side columns and the floor row are all walls
    pub fn boundary_intact(&self) -> bool {
        let h = GAME_HEIGHT as i8;
        let w = GAME_WIDTH as i8;
        (0..h).all(|y| self.get(0, y) == Some(Cell::Wall) && self.get(w - 1, y) == Some(Cell::Wall))
            && (0..w).all(|x| self.get(x, h - 1) == Some(Cell::Wall))
    }

    /// Number of block-marked cells on the board
    pub fn block_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, Cell::Block(_)))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Orientation;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(21, 0), Some(21));
        assert_eq!(Board::index(0, 1), Some(22));
        assert_eq!(Board::index(21, 20), Some(461));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(22, 0), None);
        assert_eq!(Board::index(0, 21), None);
    }

    #[test]
    fn test_new_board_has_walls_and_empty_interior() {
        let board = Board::new();
        assert!(board.boundary_intact());
        assert_eq!(board.block_count(), 0);

        for y in 0..GAME_HEIGHT as i8 {
            for x in 0..GAME_WIDTH as i8 {
                let expected = if Board::is_interior(x, y) {
                    Cell::Empty
                } else {
                    Cell::Wall
                };
                assert_eq!(board.get(x, y), Some(expected), "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();
        let mark = Cell::Block(Orientation::Vertical);

        assert!(board.set(5, 10, mark));
        assert_eq!(board.get(5, 10), Some(mark));
        assert_eq!(board.cells[10 * 22 + 5], mark);
        assert_eq!(board.row(10)[5], mark);
    }

    #[test]
    fn test_out_of_bounds_is_never_empty() {
        let mut board = Board::new();
        assert!(!board.is_empty(-1, 0));
        assert!(!board.is_empty(0, -1));
        assert!(!board.is_empty(22, 3));
        assert!(!board.is_empty(3, 21));
        assert!(!board.set(3, -1, Cell::Wall));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_boundary_breach_is_detected() {
        let mut board = Board::new();
        board.set(0, 5, Cell::Empty);
        assert!(!board.boundary_intact());
    }
}
