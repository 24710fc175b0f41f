//! TerminalRenderer: flushes a character grid to a real terminal.
//!
//! Every frame is a full redraw from the top-left corner. The cursor stays
//! hidden while frames are shown and is always made visible again by
//! [`DisplaySink::restore`].

use std::io::{self, Write};

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::fb::FrameBuffer;

/// Errors from writing to the display.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Where finished frames go.
///
/// The frame loop hands over a complete grid once per frame and calls
/// [`restore`](DisplaySink::restore) exactly once when it stops, whether the
/// loop ended normally or with an error.
pub trait DisplaySink {
    /// Show a finished frame.
    fn present(&mut self, fb: &FrameBuffer) -> Result<(), DisplayError>;

    /// Make the cursor visible again and release the display.
    fn restore(&mut self) -> Result<(), DisplayError>;
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    raw_mode: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
            raw_mode: false,
        }
    }

    /// Switch to raw mode and the alternate screen, hide the cursor.
    pub fn enter(&mut self) -> Result<(), DisplayError> {
        terminal::enable_raw_mode()?;
        self.raw_mode = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()
    }

    /// Undo [`enter`](Self::enter). Safe to call more than once.
    pub fn exit(&mut self) -> Result<(), DisplayError> {
        self.buf.clear();
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        if self.raw_mode {
            terminal::disable_raw_mode()?;
            self.raw_mode = false;
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<(), DisplayError> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl DisplaySink for TerminalRenderer {
    fn present(&mut self, fb: &FrameBuffer) -> Result<(), DisplayError> {
        self.buf.clear();
        encode_frame_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    fn restore(&mut self) -> Result<(), DisplayError> {
        self.exit()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// Moves the cursor to the origin and writes every row; rows are separated
/// by `\r\n` because raw mode disables newline translation.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    for (y, row) in fb.rows().enumerate() {
        if y > 0 {
            out.queue(Print("\r\n"))?;
        }
        for &ch in row {
            out.queue(Print(ch))?;
        }
    }
    Ok(())
}

/// Best-effort terminal restore for paths that cannot reach the renderer,
/// such as a panic hook.
pub fn force_restore_terminal() {
    let mut stdout = io::stdout();
    let _ = stdout.queue(terminal::EnableLineWrap);
    let _ = stdout.queue(cursor::Show);
    let _ = stdout.queue(terminal::LeaveAlternateScreen);
    let _ = stdout.flush();
    let _ = terminal::disable_raw_mode();
}
