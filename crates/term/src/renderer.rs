//! Terminal output: the board printer and the terminal session around it.
//!
//! Every frame is a full redraw. The board is small enough that diffing buys
//! nothing at one frame per second.

use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

use crate::core::Board;
use crate::frame::encode_frame_into;

/// Destination for rendered frames.
pub trait FrameSink {
    fn present(&mut self, board: &Board) -> io::Result<()>;
}

/// Writes full-redraw frames to any byte sink (stdout in the game).
pub struct BoardPrinter<W: Write> {
    out: W,
    buf: Vec<u8>,
    frames: u64,
}

impl<W: Write> BoardPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(1024),
            frames: 0,
        }
    }

    /// Frames written so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl BoardPrinter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> FrameSink for BoardPrinter<W> {
    fn present(&mut self, board: &Board) -> io::Result<()> {
        self.buf.clear();
        encode_frame_into(board, &mut self.buf)?;
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }
}

/// Raw-mode, alternate-screen terminal session.
///
/// `enter` before the first frame, `exit` on every way out.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64),
            entered: false,
        }
    }

    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal. Does nothing if `enter` never ran.
    pub fn exit(&mut self) -> io::Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.buf.clear();
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
