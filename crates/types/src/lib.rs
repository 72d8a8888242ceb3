//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the renderer.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (projection math, rasterization, terminal output).
//!
//! # Scene Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CUBE_SIZE` | 20.0 | Cube half-extent in object units |
//! | `SCALE` | 30.0 | Projection scale factor |
//! | `CAMERA_DISTANCE` | 100.0 | Standoff along the depth axis |
//! | `ASPECT_FACTOR` | 2.0 | Horizontal stretch for tall terminal cells |
//! | `SAMPLE_DENSITY` | 0.8 | Surface sampling step |
//! | `NEAR_PLANE` | 0.1 | Points at or below this camera depth are clipped |
//! | `FRAME_DELAY_MS` | 8 | Inter-frame sleep |
//!
//! # Rotation
//!
//! Angles advance once per frame by `ROTATION_SPEED`: 0.05 rad around X and Y,
//! 0.01 rad around Z. The rates differ so the spin does not repeat quickly.
//!
//! # Examples
//!
//! ```
//! use tui_cube_types::{Face, Point3D, CUBE_SIZE};
//!
//! let front = Face::Front;
//! assert_eq!(front.glyph(), '@');
//! assert_eq!(Face::from_glyph('#'), Some(Face::Right));
//!
//! let p = front.surface_point(0.0, 0.0, CUBE_SIZE);
//! assert_eq!(p, Point3D::new(0.0, 0.0, -20.0));
//! ```

/// Cube half-extent in object units.
pub const CUBE_SIZE: f32 = 20.0;

/// Projection scale factor.
pub const SCALE: f32 = 30.0;

/// Distance the object is pushed away from the camera along the depth axis.
pub const CAMERA_DISTANCE: f32 = 100.0;

/// Terminal cells are roughly twice as tall as wide.
pub const ASPECT_FACTOR: f32 = 2.0;

/// Step between surface samples on each face.
pub const SAMPLE_DENSITY: f32 = 0.8;

/// Camera-space depth at or below which a point is clipped.
pub const NEAR_PLANE: f32 = 0.1;

/// Per-frame angle increments (A, B, C) in radians.
pub const ROTATION_SPEED: Angles = Angles::new(0.05, 0.05, 0.01);

/// Inter-frame delay in milliseconds.
pub const FRAME_DELAY_MS: u64 = 8;

/// Glyph of a cell nothing was drawn into.
pub const BLANK_GLYPH: char = ' ';

/// Point in object or camera space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3D {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A projected sample: terminal column, row and reciprocal depth.
///
/// `depth` is `1 / z` in camera space, so larger means nearer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: u16,
    pub y: u16,
    pub depth: f32,
}

/// Rotation angles in radians around the X (A), Y (B) and Z (C) axes.
///
/// Angles only grow; no wraparound is applied since sin/cos are periodic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angles {
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl Angles {
    pub const fn new(a: f32, b: f32, c: f32) -> Self {
        Self { a, b, c }
    }
}

/// One of the six cube faces.
///
/// Each face owns a fixed glyph and a fixed foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Right,
    Left,
    Back,
    Bottom,
    Top,
}

/// ANSI foreground colors used by the faces (SGR 30-37 range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl AnsiColor {
    /// SGR parameter selecting this foreground color.
    pub const fn sgr_code(self) -> u8 {
        match self {
            AnsiColor::Red => 31,
            AnsiColor::Green => 32,
            AnsiColor::Yellow => 33,
            AnsiColor::Blue => 34,
            AnsiColor::Magenta => 35,
            AnsiColor::Cyan => 36,
        }
    }
}

impl Face {
    /// All faces, in scan order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Right,
        Face::Left,
        Face::Back,
        Face::Bottom,
        Face::Top,
    ];

    pub const fn glyph(self) -> char {
        match self {
            Face::Front => '@',
            Face::Right => '#',
            Face::Left => '%',
            Face::Back => '.',
            Face::Bottom => '=',
            Face::Top => '^',
        }
    }

    pub const fn color(self) -> AnsiColor {
        match self {
            Face::Front => AnsiColor::Blue,
            Face::Right => AnsiColor::Red,
            Face::Left => AnsiColor::Yellow,
            Face::Back => AnsiColor::Cyan,
            Face::Bottom => AnsiColor::Magenta,
            Face::Top => AnsiColor::Green,
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Face> {
        Face::ALL.into_iter().find(|f| f.glyph() == glyph)
    }

    /// Map scan coordinates `(u, v)` onto this face of a cube with half-extent `half`.
    ///
    /// One axis is pinned to `±half`; the other two take `u` and `v`, flipped so
    /// that every face is traversed with its outward normal on the same side.
    /// With `u, v` in `[-half, half)` each face is covered exactly once.
    pub fn surface_point(self, u: f32, v: f32, half: f32) -> Point3D {
        match self {
            Face::Front => Point3D::new(u, v, -half),
            Face::Right => Point3D::new(half, v, u),
            Face::Left => Point3D::new(-half, v, -u),
            Face::Back => Point3D::new(-u, v, half),
            Face::Bottom => Point3D::new(u, -half, -v),
            Face::Top => Point3D::new(u, half, v),
        }
    }

    /// Index of the axis pinned to `±half` (0 = x, 1 = y, 2 = z) and its sign.
    pub const fn normal(self) -> (usize, f32) {
        match self {
            Face::Front => (2, -1.0),
            Face::Back => (2, 1.0),
            Face::Right => (0, 1.0),
            Face::Left => (0, -1.0),
            Face::Bottom => (1, -1.0),
            Face::Top => (1, 1.0),
        }
    }
}
