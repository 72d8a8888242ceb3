//! Terminal output module.
//!
//! Turns a finished [`FrameBuffer`](tui_cube_core::FrameBuffer) into one blob
//! of text and writes it to the terminal in a single flush:
//!
//! - [`palette`]: glyph -> color escape lookup, built once from the face table
//! - [`compositor`]: cursor-home prefix, rows, line breaks and color wrapping
//! - [`renderer`]: terminal setup/teardown and the per-frame write
//!
//! Composition is pure and allocation-free after the first frame; only
//! [`TerminalRenderer`] performs I/O.

pub mod compositor;
pub mod palette;
pub mod renderer;

pub use tui_cube_core as core;
pub use tui_cube_engine as engine;
pub use tui_cube_types as types;

pub use compositor::{Compositor, CURSOR_HOME, LINE_BREAK};
pub use palette::{Palette, COLOR_RESET};
pub use renderer::{frame_size_for, query_frame_size, TerminalRenderer};
