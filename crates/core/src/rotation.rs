//! Rotation state and the object-to-camera transform.

use crate::types::{Angles, Point3D};

/// Accumulating rotation angles, advanced once per frame.
#[derive(Debug, Clone)]
pub struct RotationState {
    angles: Angles,
    speed: Angles,
}

impl RotationState {
    /// Start at zero angles.
    pub fn new(speed: Angles) -> Self {
        Self {
            angles: Angles::default(),
            speed,
        }
    }

    pub fn angles(&self) -> Angles {
        self.angles
    }

    /// Add one frame's worth of rotation to each axis.
    pub fn advance(&mut self) {
        self.angles.a += self.speed.a;
        self.angles.b += self.speed.b;
        self.angles.c += self.speed.c;
    }
}

/// Rotation by `Z(C) * Y(B) * X(A)` in closed form.
///
/// Sines and cosines are computed once per set of angles; applying the
/// transform to a point is then a handful of multiply-adds.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    sin_a: f32,
    cos_a: f32,
    sin_b: f32,
    cos_b: f32,
    sin_c: f32,
    cos_c: f32,
}

impl Transform {
    pub fn new(angles: &Angles) -> Self {
        let (sin_a, cos_a) = angles.a.sin_cos();
        let (sin_b, cos_b) = angles.b.sin_cos();
        let (sin_c, cos_c) = angles.c.sin_cos();
        Self {
            sin_a,
            cos_a,
            sin_b,
            cos_b,
            sin_c,
            cos_c,
        }
    }

    #[inline]
    pub fn apply(&self, p: Point3D) -> Point3D {
        let Point3D { x: i, y: j, z: k } = p;
        let Self {
            sin_a: sa,
            cos_a: ca,
            sin_b: sb,
            cos_b: cb,
            sin_c: sc,
            cos_c: cc,
        } = *self;

        let x = i * cc * cb + j * cc * sb * sa - j * sc * ca + k * cc * sb * ca + k * sc * sa;
        let y = i * sc * cb + j * sc * sb * sa + j * cc * ca + k * sc * sb * ca - k * cc * sa;
        let z = -i * sb + j * cb * sa + k * cb * ca;
        Point3D::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn rotate(p: Point3D, angles: &Angles) -> Point3D {
        Transform::new(angles).apply(p)
    }

    fn close(a: Point3D, b: Point3D) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4 && (a.z - b.z).abs() < 1e-4
    }

    #[test]
    fn test_zero_angles_is_identity() {
        let p = Point3D::new(1.5, -2.0, 3.25);
        assert!(close(rotate(p, &Angles::default()), p));
    }

    #[test]
    fn test_quarter_turn_around_each_axis() {
        let quarter_x = Angles::new(FRAC_PI_2, 0.0, 0.0);
        let quarter_y = Angles::new(0.0, FRAC_PI_2, 0.0);
        let quarter_z = Angles::new(0.0, 0.0, FRAC_PI_2);

        // X(A): y -> z
        let p = rotate(Point3D::new(0.0, 1.0, 0.0), &quarter_x);
        assert!(close(p, Point3D::new(0.0, 0.0, 1.0)), "{:?}", p);

        // Y(B): z -> x
        let p = rotate(Point3D::new(0.0, 0.0, 1.0), &quarter_y);
        assert!(close(p, Point3D::new(1.0, 0.0, 0.0)), "{:?}", p);

        // Z(C): x -> y
        let p = rotate(Point3D::new(1.0, 0.0, 0.0), &quarter_z);
        assert!(close(p, Point3D::new(0.0, 1.0, 0.0)), "{:?}", p);
    }

    #[test]
    fn test_composition_order_is_x_then_y_then_z() {
        // X first sends y to z, then Y sends z to x, then Z sends x to y.
        let angles = Angles::new(FRAC_PI_2, FRAC_PI_2, FRAC_PI_2);
        let p = rotate(Point3D::new(0.0, 1.0, 0.0), &angles);
        assert!(close(p, Point3D::new(0.0, 1.0, 0.0)), "{:?}", p);

        let p = rotate(Point3D::new(1.0, 0.0, 0.0), &angles);
        assert!(close(p, Point3D::new(0.0, 0.0, -1.0)), "{:?}", p);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let angles = Angles::new(0.7, -1.3, 2.9);
        let p = Point3D::new(20.0, -20.0, 20.0);
        let r = rotate(p, &angles);
        let len = |q: Point3D| (q.x * q.x + q.y * q.y + q.z * q.z).sqrt();
        assert!((len(p) - len(r)).abs() < 1e-3);
    }

    #[test]
    fn test_advance_is_additive() {
        let mut state = RotationState::new(Angles::new(0.05, 0.05, 0.01));
        for _ in 0..10 {
            state.advance();
        }
        let a = state.angles();
        assert!((a.a - 0.5).abs() < 1e-5);
        assert!((a.b - 0.5).abs() < 1e-5);
        assert!((a.c - 0.1).abs() < 1e-5);
    }
}
