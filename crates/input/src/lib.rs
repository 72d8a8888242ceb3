//! Terminal input module (engine-facing).
//!
//! The renderer takes no input besides a request to quit. With the terminal in
//! raw mode the interrupt key arrives as an ordinary key event, so quitting is
//! detected here and surfaced to the frame loop as a
//! [`StopSignal`](tui_cube_engine::StopSignal).

pub mod map;
pub mod quit;

pub use tui_cube_engine as engine;

pub use map::should_quit;
pub use quit::QuitKeys;
