//! CPU reference of the per-point math in `shaders/scene.wgsl`.
//!
//! The shader is the hot path; these functions exist so the warp, jitter and
//! color mapping stay testable host-side and so future picking work has the
//! same transform available on the CPU. Keep both in sync when tuning.

use crate::constants::{JITTER_AMPLITUDE, SPIRAL_TWIST};
use glam::Vec2;

/// Fixed sine hash of a point's own coordinates, in [0, 1).
///
/// The classic shader one-liner: `fract(sin(dot(p, k)) * 43758.5453)`.
/// Not random — the same point always gets the same value, which is what
/// makes the radius jitter reproducible across frames and runs.
#[inline]
pub fn hash01(p: Vec2) -> f32 {
    let h = (p.dot(Vec2::new(12.9898, 78.233))).sin() * 43758.5453;
    // GLSL-style fract (x - floor(x)), so negatives land in [0, 1) too.
    h - h.floor()
}

/// Apply the spiral warp to a raw point position.
///
/// Radius jitter first, then an angle twist proportional to the (jittered)
/// radius: larger radius rotates further, giving the logarithmic-spiral look.
pub fn warp_point(p: Vec2) -> Vec2 {
    let mut r = p.length();
    let mut theta = p.y.atan2(p.x);
    r += (hash01(p) - 0.5) * JITTER_AMPLITUDE;
    theta += r * SPIRAL_TWIST;
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Six-segment HSL to RGB with saturation 1 and lightness 0.5.
///
/// `h` in [0, 1] is the point's energy; at s=1, l=0.5 the piecewise formula
/// collapses to chroma 1 around the hue wheel.
pub fn energy_to_rgb(h: f32) -> [f32; 3] {
    let h = h.clamp(0.0, 1.0) * 6.0;
    let x = 1.0 - ((h % 2.0) - 1.0).abs();
    match h as u32 {
        0 => [1.0, x, 0.0],
        1 => [x, 1.0, 0.0],
        2 => [0.0, 1.0, x],
        3 => [0.0, x, 1.0],
        4 => [x, 0.0, 1.0],
        _ => [1.0, 0.0, x],
    }
}
