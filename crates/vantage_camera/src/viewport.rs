//! Display surface seam
//!
//! The engine never talks to a renderer directly. Each tick produces a
//! [`CameraFrame`] which the host's surface implementation applies however
//! it renders.

use vantage_core::{Color, Vec3};

/// Everything the camera writes to the display surface each frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFrame {
    /// Background / clear color
    pub background: Color,
    /// Orthographic projection flag
    pub orthographic: bool,
    /// Orthographic half-height, meaningful when `orthographic` is set
    pub ortho_size: f32,
    /// Field of view in degrees, meaningful for perspective projection
    pub fov: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,
    /// Final world position (interpolated position + interpolated offset)
    pub position: Vec3,
}

/// Sink for camera output, implemented by the host's render surface
pub trait DisplaySurface {
    /// Apply one frame of camera state
    fn apply(&mut self, frame: &CameraFrame);
}

/// Surface that records every applied frame, for tests and headless runs
#[derive(Default)]
pub struct RecordingSurface {
    pub frames: Vec<CameraFrame>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&CameraFrame> {
        self.frames.last()
    }
}

impl DisplaySurface for RecordingSurface {
    fn apply(&mut self, frame: &CameraFrame) {
        self.frames.push(*frame);
    }
}
