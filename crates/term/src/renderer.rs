//! TerminalRenderer: flushes a composed frame to a real terminal.
//!
//! Every frame is written with a single `write_all` + `flush`. Terminal setup
//! (raw mode, alternate screen, hidden cursor) happens once in [`enter`] and is
//! undone by [`exit`].
//!
//! [`enter`]: TerminalRenderer::enter
//! [`exit`]: TerminalRenderer::exit

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};
use tracing::{debug, error, info, warn};

use crate::compositor::Compositor;
use crate::core::FrameBuffer;
use crate::engine::FrameSink;

/// Used when the terminal size cannot be queried.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    compositor: Compositor,
    /// Control sequences for enter/exit.
    ctl: Vec<u8>,
    /// Composed frame text, reused across frames.
    frame: String,
    entered: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            compositor: Compositor::default(),
            ctl: Vec::with_capacity(256),
            frame: String::with_capacity(64 * 1024),
            entered: false,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.ctl.clear();
        self.ctl.queue(terminal::EnterAlternateScreen)?;
        self.ctl.queue(cursor::Hide)?;
        self.ctl.queue(terminal::DisableLineWrap)?;
        self.ctl.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_ctl()?;
        info!("terminal entered");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.ctl.clear();
        self.ctl.queue(ResetColor)?;
        self.ctl.queue(SetAttribute(Attribute::Reset))?;
        self.ctl.queue(terminal::EnableLineWrap)?;
        self.ctl.queue(cursor::Show)?;
        self.ctl.queue(terminal::LeaveAlternateScreen)?;
        self.flush_ctl()?;
        terminal::disable_raw_mode()?;
        self.entered = false;
        info!("terminal restored");
        Ok(())
    }

    /// Run `body` inside an entered terminal.
    ///
    /// `body` only runs if [`enter`](Self::enter) succeeds, but the terminal
    /// is restored on every path, including a partially failed `enter`. A
    /// restore failure is logged and the first error wins.
    pub fn session<T>(&mut self, body: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let result = self.enter().and_then(|_| body(self));
        if let Err(e) = self.exit() {
            error!(error = %e, "failed to restore terminal");
            return result.and(Err(e));
        }
        result
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Compose `fb` and write it in one flush.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.compositor.compose_into(fb, &mut self.frame);
        self.out.write_all(self.frame.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Bytes written by the most recent [`draw`](Self::draw).
    pub fn last_frame(&self) -> &str {
        &self.frame
    }

    fn flush_ctl(&mut self) -> Result<()> {
        self.out.write_all(&self.ctl)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> FrameSink for TerminalRenderer<W> {
    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.draw(frame)
    }
}

/// Frame dimensions for a terminal of `cols` x `rows` cells.
///
/// One row is left free so the line break after the last row never scrolls.
pub fn frame_size_for(cols: u16, rows: u16) -> (u16, u16) {
    (cols, rows.saturating_sub(1).max(1))
}

/// Query the terminal once and size the frame from it.
pub fn query_frame_size() -> (u16, u16) {
    let (cols, rows) = match terminal::size() {
        Ok(size) => size,
        Err(e) => {
            warn!(error = %e, "terminal size unavailable, using fallback");
            FALLBACK_SIZE
        }
    };
    let size = frame_size_for(cols, rows);
    debug!(cols, rows, width = size.0, height = size.1, "frame size");
    size
}
