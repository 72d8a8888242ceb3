//! Frame loop - drives the core pipeline once per frame.
//!
//! The loop is single-threaded and cooperative. Each iteration:
//!
//! 1. rasterizes the cube and advances the rotation,
//! 2. hands the finished frame to a [`FrameSink`],
//! 3. resets the frame buffer,
//! 4. waits via a [`FrameDelay`].
//!
//! The loop ends when a [`StopSignal`] fires or the configured frame limit
//! is reached. Delay and stop are injected so tests can run a bounded number
//! of frames without sleeping.
//!
//! # Environment Variables
//!
//! - `TUI_CUBE_FRAME_MS`: inter-frame delay in milliseconds (default: 8)
//! - `TUI_CUBE_MAX_FRAMES`: stop after this many frames (default: unlimited)
//! - `TUI_CUBE_LOG`: write logs to this file (default: no logging)

pub mod config;
pub mod frame_loop;

pub use tui_cube_core as core;
pub use tui_cube_types as types;

pub use config::{ConfigError, RunConfig};
pub use frame_loop::{
    FrameDelay, FrameLoop, FrameSink, NoDelay, RunStats, StopFlag, StopSignal, ThreadSleep,
};
