//! Pan/zoom camera state shared between the input handlers and the frame loop.
//!
//! The camera keeps two zoom values: `target_scale` is what the wheel asks
//! for, `scale` is what is currently on screen. The frame loop advances
//! `scale` toward the target with a first-order low-pass filter so zooming
//! feels inertial rather than stepwise.

use crate::constants::{DEFAULT_SCALE, PAN_LIMIT, SCALE_MAX, SCALE_MIN, SCALE_SMOOTHING};

#[derive(Clone, Debug)]
pub struct CameraState {
    pub pan_x: f64,
    pub pan_y: f64,
    pub scale: f64,
    pub target_scale: f64,
    pub dragging: bool,
    pub last_pointer: (f64, f64),
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraState {
    pub fn new() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            scale: DEFAULT_SCALE,
            target_scale: DEFAULT_SCALE,
            dragging: false,
            last_pointer: (0.0, 0.0),
        }
    }

    /// Advance `scale` one frame toward `target_scale` and bound pan drift.
    ///
    /// Call once per rendered frame, before building uniforms.
    pub fn smooth_step(&mut self) {
        self.scale += (self.target_scale - self.scale) * SCALE_SMOOTHING;
        self.scale = self.scale.clamp(SCALE_MIN, SCALE_MAX);
        self.pan_x = self.pan_x.clamp(-PAN_LIMIT, PAN_LIMIT);
        self.pan_y = self.pan_y.clamp(-PAN_LIMIT, PAN_LIMIT);
    }

    /// Displayed point size in device pixels at the current zoom.
    #[inline]
    pub fn point_size_px(&self) -> f32 {
        crate::constants::POINT_SIZE_MIN.max(crate::constants::POINT_SIZE_BASE * self.scale) as f32
    }
}
