// Screen-to-world mapping: exact inverse of the affine camera stage.

use swirl_core::{coords, CameraState, BASE_SCALE};

fn camera(pan_x: f64, pan_y: f64, scale: f64) -> CameraState {
    let mut cam = CameraState::new();
    cam.pan_x = pan_x;
    cam.pan_y = pan_y;
    cam.scale = scale;
    cam.target_scale = scale;
    cam
}

/// Forward affine stage of the vertex transform, exactly as the shader
/// computes it (y-up clip space), projected to canvas pixels the way the
/// surface presents them (y down). Used to verify the mapper is the
/// algebraic inverse of what actually gets rendered.
fn world_to_canvas_px(
    world_x: f64,
    world_y: f64,
    cam: &CameraState,
    aspect: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    let s = cam.scale * BASE_SCALE;
    let clip_x = (world_x / 500.0 - 1.0 + cam.pan_x) * s / aspect;
    let clip_y = (world_y / 500.0 - 1.0 + cam.pan_y) * s;
    let sx = (clip_x + 1.0) * 0.5 * width;
    let sy = (1.0 - clip_y) * 0.5 * height;
    (sx, sy)
}

#[test]
fn screen_center_maps_to_world_center() {
    let cam = camera(0.0, 0.0, 1.0);
    let world = coords::screen_to_world(0.0, 0.0, &cam, 1.0);
    assert!((world.x - 500.0).abs() < 1e-9);
    assert!((world.y - 500.0).abs() < 1e-9);

    // Aspect only scales off-center positions; the center is unaffected.
    let wide = coords::screen_to_world(0.0, 0.0, &cam, 2.37);
    assert!((wide.x - 500.0).abs() < 1e-9);
    assert!((wide.y - 500.0).abs() < 1e-9);
}

#[test]
fn mapper_inverts_the_affine_stage_exactly() {
    let cam = camera(0.3, -0.2, 2.3);
    let aspect = 1.6;
    let (w, h) = (1280.0, 800.0);
    for (wx, wy) in [(730.0, 210.0), (0.0, 0.0), (1000.0, 1000.0), (500.0, 42.0)] {
        let (sx, sy) = world_to_canvas_px(wx, wy, &cam, aspect, w, h);
        let (mx, my) = coords::canvas_px_to_ndc(sx, sy, w, h);
        let back = coords::screen_to_world(mx, my, &cam, aspect);
        assert!((back.x - wx).abs() < 1e-9, "x: {} vs {}", back.x, wx);
        assert!((back.y - wy).abs() < 1e-9, "y: {} vs {}", back.y, wy);
    }
}

#[test]
fn cursor_readout_is_not_vertically_mirrored() {
    // World y = 750 renders above the world center, so its pixel sits in the
    // upper half of the canvas and the readout must report 750, not 250.
    let cam = camera(0.0, 0.0, 1.0);
    let (w, h) = (900.0, 900.0);
    let (sx, sy) = world_to_canvas_px(500.0, 750.0, &cam, 1.0, w, h);
    assert!(sy < h * 0.5, "pixel y {} is not in the upper half", sy);
    let (mx, my) = coords::canvas_px_to_ndc(sx, sy, w, h);
    let world = coords::screen_to_world(mx, my, &cam, 1.0);
    assert!((world.x - 500.0).abs() < 1e-9);
    assert!((world.y - 750.0).abs() < 1e-9, "world y: {}", world.y);
}

#[test]
fn panning_shifts_the_reported_world_position() {
    let centered = camera(0.0, 0.0, 1.0);
    let panned = camera(0.5, 0.0, 1.0);
    let a = coords::screen_to_world(0.0, 0.0, &centered, 1.0);
    let b = coords::screen_to_world(0.0, 0.0, &panned, 1.0);
    // Positive pan_x moves content right, so the same pixel shows a point
    // further left in the world.
    assert!((a.x - b.x - 250.0).abs() < 1e-9);
    assert_eq!(a.y, b.y);
}

#[test]
fn viewport_bounds_cover_the_world_at_unit_scale() {
    let cam = camera(0.0, 0.0, 1.0);
    let bounds = coords::viewport_bounds(&cam, 1.0);
    assert!((bounds.x1 - 0.0).abs() < 1e-9);
    assert!((bounds.x2 - 1000.0).abs() < 1e-9);
    assert!((bounds.y1 - 0.0).abs() < 1e-9);
    assert!((bounds.y2 - 1000.0).abs() < 1e-9);
}

#[test]
fn viewport_bounds_shrink_when_zooming_in() {
    let cam = camera(0.0, 0.0, 4.0);
    let bounds = coords::viewport_bounds(&cam, 1.0);
    assert!(bounds.x1 < bounds.x2);
    assert!((bounds.x2 - bounds.x1 - 250.0).abs() < 1e-9);
    assert!((bounds.y2 - bounds.y1 - 250.0).abs() < 1e-9);
    // Centered on the world center.
    assert!(((bounds.x1 + bounds.x2) * 0.5 - 500.0).abs() < 1e-9);
}
