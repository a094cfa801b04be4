//! Frame encoding: maps a `Board` into terminal text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::{cursor, terminal, QueueableCommand};
use std::io;

use crate::core::Board;
use crate::types::{Cell, Orientation};

pub const WALL_GLYPH: char = '*';
pub const EMPTY_GLYPH: char = ' ';
pub const HORIZONTAL_GLYPH: char = '-';
pub const VERTICAL_GLYPH: char = '|';

/// Character drawn for one cell.
pub fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => EMPTY_GLYPH,
        Cell::Wall => WALL_GLYPH,
        Cell::Block(Orientation::Horizontal) => HORIZONTAL_GLYPH,
        Cell::Block(Orientation::Vertical) => VERTICAL_GLYPH,
    }
}

/// The board as one string per row, top to bottom.
pub fn frame_lines(board: &Board) -> Vec<String> {
    (0..board.height() as usize)
        .map(|y| board.row(y).iter().map(|&cell| glyph(cell)).collect())
        .collect()
}

/// Encode a full-frame redraw into `out`.
///
/// Clears the screen, homes the cursor, then writes every row. Rows are joined
/// with `\r\n` because the terminal runs in raw mode.
pub fn encode_frame_into(board: &Board, out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let height = board.height() as usize;
    let mut utf8 = [0u8; 4];
    for y in 0..height {
        for &cell in board.row(y) {
            out.extend_from_slice(glyph(cell).encode_utf8(&mut utf8).as_bytes());
        }
        if y + 1 < height {
            out.extend_from_slice(b"\r\n");
        }
    }
    Ok(())
}
