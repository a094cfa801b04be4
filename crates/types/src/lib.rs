//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, rendering, keyboard capture, event loop).
//!
//! # Board Dimensions
//!
//! - **Height**: 21 rows (indexed 0-20), row 20 is the floor wall
//! - **Width**: 22 columns (indexed 0-21), columns 0 and 21 are side walls
//! - **Spawn position**: center (10, 0), horizontal
//!
//! # Input Bytes
//!
//! | Byte | Key |
//! |------|-----|
//! | `a` | Left |
//! | `d` | Right |
//! | `w` | Rotate |
//! | `s` | Soft drop |
//! | `q` | Quit |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{Key, Orientation, GAME_HEIGHT, GAME_WIDTH};
//!
//! assert_eq!(Key::from_byte(b'a'), Some(Key::Left));
//! assert_eq!(Key::from_byte(b'x'), None);
//! assert_eq!(Orientation::Horizontal.toggle(), Orientation::Vertical);
//!
//! assert_eq!(GAME_HEIGHT, 21);
//! assert_eq!(GAME_WIDTH, 22);
//! ```

/// Board height in rows (21, including the floor wall)
pub const GAME_HEIGHT: u8 = 21;

/// Board width in columns (22, including both side walls)
pub const GAME_WIDTH: u8 = 22;

/// Column of the center cell of a freshly spawned block
pub const SPAWN_X: i8 = (GAME_WIDTH as i8 - 1) / 2;

/// Row of the center cell of a freshly spawned block
pub const SPAWN_Y: i8 = 0;

/// Gravity period in milliseconds (one row per second)
pub const TICK_MS: u64 = 1000;

pub const KEY_LEFT: u8 = b'a';
pub const KEY_RIGHT: u8 = b'd';
pub const KEY_ROTATE: u8 = b'w';
pub const KEY_SOFT_DROP: u8 = b's';
pub const KEY_QUIT: u8 = b'q';

/// Layout of the straight 3-cell block about its center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Occupies (x-1, y), (x, y), (x+1, y)
    Horizontal,
    /// Occupies (x, y-1), (x, y), (x, y+1)
    Vertical,
}

impl Orientation {
    /// Swap Horizontal and Vertical.
    pub fn toggle(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Offsets of the two non-center cells, relative to the center.
    pub fn arm(self) -> (i8, i8) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A cell on the game board
///
/// Block cells remember the orientation of the block that marked them, so a
/// landed block keeps its glyph after it becomes terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Block(Orientation),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Keys the engine understands. Every other keystroke is filtered out before
/// it reaches the event queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    /// Toggle orientation
    Rotate,
    /// Accepted but moves nothing beyond the gravity step every key triggers
    SoftDrop,
    Quit,
}

impl Key {
    /// Decode one byte of the input stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::Key;
    ///
    /// assert_eq!(Key::from_byte(b'd'), Some(Key::Right));
    /// assert_eq!(Key::from_byte(b'w'), Some(Key::Rotate));
    /// assert_eq!(Key::from_byte(b'q'), Some(Key::Quit));
    /// assert_eq!(Key::from_byte(b'\n'), None);
    /// ```
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            KEY_LEFT => Some(Key::Left),
            KEY_RIGHT => Some(Key::Right),
            KEY_ROTATE => Some(Key::Rotate),
            KEY_SOFT_DROP => Some(Key::SoftDrop),
            KEY_QUIT => Some(Key::Quit),
            _ => None,
        }
    }

    /// Encode as the byte used on the input stream.
    pub fn as_byte(self) -> u8 {
        match self {
            Key::Left => KEY_LEFT,
            Key::Right => KEY_RIGHT,
            Key::Rotate => KEY_ROTATE,
            Key::SoftDrop => KEY_SOFT_DROP,
            Key::Quit => KEY_QUIT,
        }
    }
}

/// One unit of work for the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Gravity timer fired
    Tick,
    /// A filtered keystroke arrived
    Move(Key),
}
