//! Terminal cube runner (default binary).
//!
//! Sizes a frame from the terminal once, then loops
//! render -> draw -> reset -> sleep until `q`, `Esc` or `Ctrl-C`.
//! Logging goes to the file named by `TUI_CUBE_LOG`, never to the terminal.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_cube::core::CubeConfig;
use tui_cube::engine::{FrameLoop, RunConfig, ThreadSleep};
use tui_cube::input::QuitKeys;
use tui_cube::term::{query_frame_size, TerminalRenderer};

fn main() -> Result<()> {
    let config = RunConfig::from_env()?;
    if let Some(path) = config.log_path.as_deref() {
        init_logging(path)?;
    }

    let (width, height) = query_frame_size();
    let mut term = TerminalRenderer::new();
    term.session(|term| run(term, config, width, height))
}

fn run(term: &mut TerminalRenderer, config: RunConfig, width: u16, height: u16) -> Result<()> {
    let mut frame_loop = FrameLoop::new(CubeConfig::default(), config, width, height);
    let stats = frame_loop.run(term, &mut ThreadSleep, &mut QuitKeys::new())?;
    info!(frames = stats.frames, "done");
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
