//! Scene configuration.
//!
//! These values are fixed for a run. `Default` yields the stock scene; tests
//! build other values directly.

use crate::types::{
    Angles, ASPECT_FACTOR, CAMERA_DISTANCE, CUBE_SIZE, NEAR_PLANE, ROTATION_SPEED, SAMPLE_DENSITY,
    SCALE,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeConfig {
    /// Cube half-extent.
    pub cube_size: f32,
    pub scale: f32,
    pub camera_distance: f32,
    /// Horizontal stretch compensating for non-square terminal cells.
    pub aspect_factor: f32,
    /// Step between surface samples. Must be positive.
    pub density: f32,
    pub near_plane: f32,
    /// Angle increments applied once per frame.
    pub rotation_speed: Angles,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            cube_size: CUBE_SIZE,
            scale: SCALE,
            camera_distance: CAMERA_DISTANCE,
            aspect_factor: ASPECT_FACTOR,
            density: SAMPLE_DENSITY,
            near_plane: NEAR_PLANE,
            rotation_speed: ROTATION_SPEED,
        }
    }
}
