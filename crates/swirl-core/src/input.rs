//! Pointer/wheel event handling.
//!
//! These functions are the only mutation paths into [`CameraState`] besides
//! the per-frame [`CameraState::smooth_step`]. Frontends translate their raw
//! platform events (DOM `PointerEvent`/`WheelEvent`, winit `WindowEvent`)
//! into calls here so the camera behaves identically on web and native.

use crate::camera::CameraState;
use crate::constants::{SCALE_MAX, SCALE_MIN, ZOOM_SPEED};

/// Pointer pressed: enter the dragging state and remember where.
#[inline]
pub fn pointer_down(cam: &mut CameraState, x: f64, y: f64) {
    cam.dragging = true;
    cam.last_pointer = (x, y);
}

/// Pointer released: back to idle.
#[inline]
pub fn pointer_up(cam: &mut CameraState) {
    cam.dragging = false;
}

/// Pointer moved to `(x, y)` in canvas pixels.
///
/// While dragging, the screen-space delta since the last event is converted
/// into a pan delta. Dividing by half the canvas size puts the delta in
/// normalized device units; dividing by `scale` keeps the apparent panning
/// speed constant across zoom levels. Screen y grows downward, world y
/// upward, hence the sign flip. While idle this only records the position
/// (frontends use it to drive the cursor readout).
pub fn pointer_move(cam: &mut CameraState, x: f64, y: f64, canvas_w: f64, canvas_h: f64) {
    if cam.dragging {
        let dx = x - cam.last_pointer.0;
        let dy = y - cam.last_pointer.1;
        cam.pan_x += dx / (0.5 * canvas_w.max(1.0) * cam.scale);
        cam.pan_y -= dy / (0.5 * canvas_h.max(1.0) * cam.scale);
    }
    cam.last_pointer = (x, y);
}

/// Wheel scrolled by `delta_y`.
///
/// Only `target_scale` moves; the displayed `scale` catches up through the
/// frame-loop smoothing. Out-of-range values are clamped, never rejected.
#[inline]
pub fn wheel(cam: &mut CameraState, delta_y: f64) {
    cam.target_scale = (cam.target_scale * (-delta_y * ZOOM_SPEED).exp()).clamp(SCALE_MIN, SCALE_MAX);
}
