//! Cube surface rasterizer.
//!
//! The surface is point-sampled: one 2D scan over `[-size, size)` in both axes
//! drives all six faces, each sample flowing through
//! transform -> projection -> depth-tested write. Coverage depends on the
//! sampling density relative to the projected size; too coarse a step leaves
//! gaps between samples. A density that is not a positive finite number
//! samples nothing.

use crate::config::CubeConfig;
use crate::frame::FrameBuffer;
use crate::projection::Projector;
use crate::rotation::{RotationState, Transform};
use crate::types::{Angles, Face, Point3D};

/// What happened to one surface sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plot {
    /// Rejected by the near plane or the screen bounds.
    Clipped,
    /// Projected, but something nearer already owns the cell.
    Occluded,
    Written,
}

/// Per-frame sample counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RasterStats {
    pub samples: u32,
    pub clipped: u32,
    pub written: u32,
}

impl RasterStats {
    fn record(&mut self, plot: Plot) {
        self.samples += 1;
        match plot {
            Plot::Clipped => self.clipped += 1,
            Plot::Occluded => {}
            Plot::Written => self.written += 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rasterizer {
    config: CubeConfig,
    projector: Projector,
    steps: u32,
}

impl Rasterizer {
    /// Build a rasterizer for a `width` x `height` frame.
    pub fn new(config: CubeConfig, width: u16, height: u16) -> Self {
        Self {
            projector: Projector::new(&config, width, height),
            steps: scan_steps(config.cube_size, config.density),
            config,
        }
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Scan coordinates: `-size, -size + step, ...` strictly below `size`.
    ///
    /// Each coordinate is computed from its step index rather than by
    /// repeated addition, so rounding does not accumulate across the scan.
    pub fn scan_coords(&self) -> impl Iterator<Item = f32> + Clone {
        let size = self.config.cube_size;
        let step = self.config.density;
        (0..self.steps).map(move |i| -size + i as f32 * step)
    }

    /// Sample every face and then advance the rotation by one frame.
    pub fn render(&self, rotation: &mut RotationState, fb: &mut FrameBuffer) -> RasterStats {
        let stats = self.rasterize(&rotation.angles(), fb);
        rotation.advance();
        stats
    }

    /// Sample every face at fixed angles. Does not touch any rotation state.
    pub fn rasterize(&self, angles: &Angles, fb: &mut FrameBuffer) -> RasterStats {
        debug_assert_eq!(fb.width(), self.projector.width());
        debug_assert_eq!(fb.height(), self.projector.height());

        let transform = Transform::new(angles);
        let size = self.config.cube_size;
        let mut stats = RasterStats::default();

        let coords = self.scan_coords();
        for u in coords.clone() {
            for v in coords.clone() {
                for face in Face::ALL {
                    let p = face.surface_point(u, v, size);
                    stats.record(self.plot(&transform, p, face.glyph(), fb));
                }
            }
        }
        stats
    }

    /// Push one object-space point through the pipeline.
    #[inline]
    pub fn plot(
        &self,
        transform: &Transform,
        point: Point3D,
        glyph: char,
        fb: &mut FrameBuffer,
    ) -> Plot {
        let rotated = transform.apply(point);
        let Some(sp) = self.projector.project(rotated) else {
            return Plot::Clipped;
        };
        let Some(index) = fb.index(sp.x, sp.y) else {
            return Plot::Clipped;
        };
        if fb.write_if_nearer(index, sp.depth, glyph) {
            Plot::Written
        } else {
            Plot::Occluded
        }
    }
}

/// Number of indices `i` with `-size + i * step < size`.
fn scan_steps(size: f32, step: f32) -> u32 {
    if !(step > 0.0 && step.is_finite() && size.is_finite()) {
        return 0;
    }
    let below = |i: u32| -size + i as f32 * step < size;
    // The float estimate can be off by one either way near the boundary.
    let mut n = (2.0 * size / step).ceil().max(0.0) as u32;
    while n > 0 && !below(n - 1) {
        n -= 1;
    }
    while n < u32::MAX && below(n) {
        n += 1;
    }
    n
}
