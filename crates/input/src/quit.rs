//! Non-blocking quit detection for the frame loop.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use crate::engine::StopSignal;
use crate::map::should_quit;

/// Drains pending terminal events before each frame and stops on a quit key.
///
/// Polling uses a zero timeout, so the frame delay stays a plain sleep.
#[derive(Debug, Default)]
pub struct QuitKeys {
    quit: bool,
}

impl QuitKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one event. Returns `true` once a quit key has been seen.
    pub fn handle_event(&mut self, ev: Event) -> bool {
        match ev {
            Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                info!(key = ?key.code, "quit requested");
                self.quit = true;
            }
            Event::Resize(width, height) => {
                // The frame buffer is sized once at startup.
                warn!(width, height, "terminal resized; frame size unchanged");
            }
            _ => {}
        }
        self.quit
    }
}

impl StopSignal for QuitKeys {
    fn should_stop(&mut self) -> Result<bool> {
        while !self.quit && event::poll(Duration::ZERO)? {
            self.handle_event(event::read()?);
        }
        Ok(self.quit)
    }
}
