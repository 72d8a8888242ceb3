//! Perspective projection onto the terminal grid.
//!
//! This is the only place perspective division happens. Every accepted point
//! has in-bounds coordinates and a finite, positive depth.

use crate::config::CubeConfig;
use crate::types::{Point3D, ScreenPoint};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    width: u16,
    height: u16,
    scale: f32,
    camera_distance: f32,
    aspect_factor: f32,
    near_plane: f32,
}

impl Projector {
    pub fn new(config: &CubeConfig, width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            scale: config.scale,
            camera_distance: config.camera_distance,
            aspect_factor: config.aspect_factor,
            near_plane: config.near_plane,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Project a rotated point.
    ///
    /// Returns `None` when the point sits at or in front of the near plane
    /// (after the camera standoff) or lands outside the grid.
    #[inline]
    pub fn project(&self, p: Point3D) -> Option<ScreenPoint> {
        let z = p.z + self.camera_distance;
        // Negated compare also rejects NaN.
        if !(z > self.near_plane) {
            return None;
        }

        let depth = 1.0 / z;
        if !(depth.is_finite() && depth > 0.0) {
            return None;
        }

        let cx = (self.width / 2) as f32;
        let cy = (self.height / 2) as f32;
        let fx = cx + self.scale * p.x / z * self.aspect_factor;
        let fy = cy - self.scale * p.y / z;
        if !(fx.is_finite() && fy.is_finite()) {
            return None;
        }

        // `as` truncates toward zero and saturates out-of-range values.
        let sx = fx as i32;
        let sy = fy as i32;

        if sx < 0 || sx >= self.width as i32 || sy < 0 || sy >= self.height as i32 {
            return None;
        }

        Some(ScreenPoint {
            x: sx as u16,
            y: sy as u16,
            depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projector(width: u16, height: u16) -> Projector {
        Projector::new(&CubeConfig::default(), width, height)
    }

    fn pt(x: f32, y: f32, z: f32) -> Point3D {
        Point3D::new(x, y, z)
    }

    #[test]
    fn test_origin_projects_to_center() {
        let p = projector(80, 24).project(pt(0.0, 0.0, 0.0)).unwrap();
        assert_eq!((p.x, p.y), (40, 12));
        assert!((p.depth - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_odd_dimensions_use_integer_center() {
        let p = projector(81, 25).project(pt(0.0, 0.0, 0.0)).unwrap();
        assert_eq!((p.x, p.y), (40, 12));
    }

    #[test]
    fn test_x_is_stretched_by_aspect_factor() {
        // scale * x / z * aspect = 30 * 8 / 80 * 2 = 6
        let p = projector(80, 24).project(pt(8.0, 0.0, -20.0)).unwrap();
        assert_eq!(p.x, 46);
        // scale * y / z = 30 * 8 / 80 = 3, and screen y grows downward
        let p = projector(80, 24).project(pt(0.0, 8.0, -20.0)).unwrap();
        assert_eq!(p.y, 9);
    }

    #[test]
    fn test_near_plane_clips() {
        let proj = projector(80, 24);
        // z + 100 == 0.1 exactly is still clipped
        assert!(proj.project(pt(0.0, 0.0, -99.9)).is_none());
        assert!(proj.project(pt(0.0, 0.0, -100.0)).is_none());
        assert!(proj.project(pt(0.0, 0.0, -250.0)).is_none());
        assert!(proj.project(pt(0.0, 0.0, -99.0)).is_some());
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let proj = projector(80, 24);
        assert!(proj.project(pt(1000.0, 0.0, 0.0)).is_none());
        assert!(proj.project(pt(-1000.0, 0.0, 0.0)).is_none());
        assert!(proj.project(pt(0.0, 1000.0, 0.0)).is_none());
        assert!(proj.project(pt(0.0, -1000.0, 0.0)).is_none());
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let proj = projector(80, 24);
        assert!(proj.project(pt(0.0, 0.0, f32::NAN)).is_none());
        assert!(proj.project(pt(0.0, 0.0, f32::INFINITY)).is_none());
        assert!(proj.project(pt(f32::INFINITY, 0.0, 0.0)).is_none());
        assert!(proj.project(pt(f32::NAN, 0.0, 0.0)).is_none());
        assert!(proj.project(pt(0.0, f32::NAN, 0.0)).is_none());
    }

    #[test]
    fn test_zero_sized_grid_accepts_nothing() {
        assert!(projector(0, 0).project(pt(0.0, 0.0, 0.0)).is_none());
    }
}
