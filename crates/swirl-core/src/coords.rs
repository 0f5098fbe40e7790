//! Screen-to-world mapping.
//!
//! Inverts only the affine part of the camera transform (pan, scale, aspect
//! correction) — not the spiral warp. The reported coordinate is therefore
//! the pre-warp "grid" coordinate, which is the space the 10x10 visibility
//! grid is defined over.

use crate::camera::CameraState;
use crate::constants::{BASE_SCALE, WORLD_EXTENT};
use glam::DVec2;

/// World-space viewport rectangle in pre-warp coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportBounds {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
}

/// Map a canvas pixel position to normalized device coordinates.
///
/// Keeps the event convention (y grows downward); `screen_to_world` undoes
/// the flip against the renderer's y-up clip space. Feed its output straight
/// into the mapper.
#[inline]
pub fn canvas_px_to_ndc(sx: f64, sy: f64, width: f64, height: f64) -> (f64, f64) {
    let mx = (sx / width.max(1.0)) * 2.0 - 1.0;
    let my = (sy / height.max(1.0)) * 2.0 - 1.0;
    (mx, my)
}

/// Map a normalized device position (`mx`, `my` in [-1, 1], y down as in
/// `canvas_px_to_ndc`) to world units in the `[0, WORLD_EXTENT]` square.
///
/// This is the exact algebraic inverse of the affine stage of the vertex
/// transform: at `pan = (0, 0)`, `scale = 1` the screen center maps to the
/// world center `(500, 500)`.
pub fn screen_to_world(mx: f64, my: f64, cam: &CameraState, aspect: f64) -> DVec2 {
    let half = WORLD_EXTENT * 0.5;
    let s = cam.scale * BASE_SCALE;
    let world_x = ((mx * aspect) / s - cam.pan_x + 1.0) * half;
    // Vertical flip: device y points down, clip space and world y point up.
    let world_y = ((-my) / s - cam.pan_y + 1.0) * half;
    DVec2::new(world_x, world_y)
}

/// World-space bounds of the current viewport, from the four device corners.
pub fn viewport_bounds(cam: &CameraState, aspect: f64) -> ViewportBounds {
    let a = screen_to_world(-1.0, -1.0, cam, aspect);
    let b = screen_to_world(1.0, 1.0, cam, aspect);
    ViewportBounds {
        x1: a.x.min(b.x),
        x2: a.x.max(b.x),
        y1: a.y.min(b.y),
        y2: a.y.max(b.y),
    }
}
