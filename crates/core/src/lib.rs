//! Core rendering pipeline - pure, deterministic, and testable
//!
//! This crate turns a rotating cube into a character grid. It has
//! **zero dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: the same angles always produce the same frame
//! - **Testable**: every stage can be driven with arbitrary angles and sizes
//! - **Fast**: the per-frame path does not allocate
//!
//! # Module Structure
//!
//! - [`config`]: fixed scene parameters (cube size, scale, camera distance, ...)
//! - [`rotation`]: accumulating angles and the point transform
//! - [`projection`]: perspective projection with near-plane and bounds clipping
//! - [`grid`]: row-major 2D container
//! - [`frame`]: paired glyph/depth buffers with depth-tested writes
//! - [`raster`]: cube surface sampling feeding the stages above
//!
//! # Pipeline
//!
//! For every scan coordinate and every face:
//!
//! ```text
//! Face::surface_point -> Transform::apply -> Projector::project -> FrameBuffer::write_if_nearer
//! ```
//!
//! After the scan the rotation advances by one step.
//!
//! # Example
//!
//! ```
//! use tui_cube_core::{CubeConfig, FrameBuffer, Rasterizer, RotationState};
//!
//! let config = CubeConfig::default();
//! let mut fb = FrameBuffer::new(80, 24);
//! let mut rotation = RotationState::new(config.rotation_speed);
//! let raster = Rasterizer::new(config, fb.width(), fb.height());
//!
//! let stats = raster.render(&mut rotation, &mut fb);
//! assert!(stats.written > 0);
//! assert_eq!(fb.glyph(40, 12), Some('@'));
//!
//! fb.reset();
//! assert_eq!(fb.glyph(40, 12), Some(' '));
//! ```

pub mod config;
pub mod frame;
pub mod grid;
pub mod projection;
pub mod raster;
pub mod rotation;

pub use tui_cube_types as types;

// Re-export commonly used types for convenience
pub use config::CubeConfig;
pub use frame::FrameBuffer;
pub use grid::Grid;
pub use projection::Projector;
pub use raster::{Plot, RasterStats, Rasterizer};
pub use rotation::{RotationState, Transform};
