//! Terminal screen guard for playback.
//!
//! Owns the drawing area for the lifetime of one playback run: cursor hidden
//! and screen cleared on entry, cleared and cursor restored on exit. Restore
//! runs exactly once, with `Drop` as the backstop when the play loop unwinds
//! through an error.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    terminal::{Clear, ClearType},
};

/// RAII guard over the playback drawing area.
///
/// Generic over the sink so tests can capture the exact byte stream instead
/// of touching a real terminal.
pub struct Screen<W: Write> {
    out: W,
    restored: bool,
}

impl<W: Write> Screen<W> {
    /// Take over the drawing area: hide the cursor, clear, park at the
    /// top-left corner.
    pub fn new(mut out: W) -> io::Result<Self> {
        execute!(out, Hide, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(Self {
            out,
            restored: false,
        })
    }

    /// Clear and draw one frame from the top-left corner.
    pub fn draw(&mut self, content: &str) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.write_all(content.as_bytes())?;
        self.out.flush()
    }

    /// Hand the terminal back: clear once more and show the cursor.
    /// Idempotent; later calls (including the one from `Drop`) are no-ops.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0), Show)
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
