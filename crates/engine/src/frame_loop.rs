//! Cooperative frame loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info, trace};

use crate::config::RunConfig;
use crate::core::{CubeConfig, FrameBuffer, RasterStats, Rasterizer, RotationState};

/// Receives each finished frame before it is reset.
pub trait FrameSink {
    fn present(&mut self, frame: &FrameBuffer) -> Result<()>;
}

/// Paces the loop between frames.
pub trait FrameDelay {
    fn wait(&mut self, delay: Duration);
}

/// Asked once before every frame whether the loop should end.
pub trait StopSignal {
    fn should_stop(&mut self) -> Result<bool>;
}

/// Blocking sleep on the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleep;

impl FrameDelay for ThreadSleep {
    fn wait(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Returns immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl FrameDelay for NoDelay {
    fn wait(&mut self, _delay: Duration) {}
}

/// Shared stop flag, settable from anywhere holding a clone.
#[derive(Debug, Default, Clone)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl StopSignal for StopFlag {
    fn should_stop(&mut self) -> Result<bool> {
        Ok(self.is_stopped())
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub frames: u64,
    pub elapsed: Duration,
}

/// Owns the rotation, the frame buffer and the rasterizer for a run.
pub struct FrameLoop {
    raster: Rasterizer,
    rotation: RotationState,
    frame: FrameBuffer,
    config: RunConfig,
    frames: u64,
}

impl FrameLoop {
    /// Allocate a `width` x `height` frame. The size is fixed for the run.
    pub fn new(cube: CubeConfig, config: RunConfig, width: u16, height: u16) -> Self {
        Self {
            raster: Rasterizer::new(cube, width, height),
            rotation: RotationState::new(cube.rotation_speed),
            frame: FrameBuffer::new(width, height),
            config,
            frames: 0,
        }
    }

    /// Frames rendered so far, including any whose presentation failed.
    /// Always equal to the number of rotation advances.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    /// The frame buffer. Blank between steps.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Render, present and reset exactly one frame.
    ///
    /// The buffer is reset and the frame counted even when `sink` fails, so
    /// a later step never composites over a stale frame.
    pub fn step(&mut self, sink: &mut impl FrameSink) -> Result<RasterStats> {
        let stats = self.raster.render(&mut self.rotation, &mut self.frame);
        let presented = sink.present(&self.frame);
        self.frame.reset();
        self.frames += 1;
        presented?;
        trace!(
            frame = self.frames,
            written = stats.written,
            clipped = stats.clipped,
            "frame presented"
        );
        Ok(stats)
    }

    /// Run until `stop` fires or the frame limit is reached.
    pub fn run(
        &mut self,
        sink: &mut impl FrameSink,
        delay: &mut impl FrameDelay,
        stop: &mut impl StopSignal,
    ) -> Result<RunStats> {
        let started = Instant::now();
        let first = self.frames;
        info!(
            width = self.frame.width(),
            height = self.frame.height(),
            delay_ms = self.config.frame_delay.as_millis() as u64,
            max_frames = ?self.config.max_frames,
            "frame loop started"
        );

        loop {
            if let Some(max) = self.config.max_frames {
                if self.frames - first >= max {
                    debug!(max, "frame limit reached");
                    break;
                }
            }
            if stop.should_stop()? {
                debug!("stop requested");
                break;
            }

            self.step(&mut *sink)?;
            delay.wait(self.config.frame_delay);
        }

        let stats = RunStats {
            frames: self.frames - first,
            elapsed: started.elapsed(),
        };
        info!(
            frames = stats.frames,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "frame loop stopped"
        );
        Ok(stats)
    }
}
