//! TUI Cube (workspace facade crate).
//!
//! Re-exports the member crates under one roof as
//! `tui_cube::{core,engine,input,term,types}`; the implementation lives in
//! dedicated crates under `crates/`.

pub use tui_cube_core as core;
pub use tui_cube_engine as engine;
pub use tui_cube_input as input;
pub use tui_cube_term as term;
pub use tui_cube_types as types;
