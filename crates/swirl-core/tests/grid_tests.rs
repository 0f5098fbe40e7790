// Viewport-to-grid visibility query over the fixed 10x10 world grid.

use std::collections::HashSet;
use swirl_core::{grid, CameraState};

fn camera(pan_x: f64, pan_y: f64, scale: f64) -> CameraState {
    let mut cam = CameraState::new();
    cam.pan_x = pan_x;
    cam.pan_y = pan_y;
    cam.scale = scale;
    cam.target_scale = scale;
    cam
}

#[test]
fn full_world_viewport_reports_all_hundred_cells() {
    // At pan (0,0), scale 1, aspect 1 the viewport is exactly [0,1000]^2.
    let cells = grid::visible_cells(&camera(0.0, 0.0, 1.0), 1.0);
    assert_eq!(cells.len(), 100);

    let unique: HashSet<_> = cells.iter().map(|c| (c.gx, c.gy)).collect();
    assert_eq!(unique.len(), 100);
    assert!(unique.contains(&(0, 0)));
    assert!(unique.contains(&(9, 9)));
}

#[test]
fn zoomed_out_viewport_still_clamps_to_the_grid() {
    // Far below minimum-zoom bounds the box covers much more than the world;
    // indices clamp to [0, 9] instead of walking off the grid.
    let cells = grid::visible_cells(&camera(0.0, 0.0, 0.25), 1.0);
    assert_eq!(cells.len(), 100);
}

#[test]
fn collapsed_viewport_reports_a_single_cell() {
    // scale 50 gives a 20-unit-wide view; pan (-0.1, -0.1) centers it at
    // world (550, 550), inside cell (5, 5).
    let cells = grid::visible_cells(&camera(-0.1, -0.1, 50.0), 1.0);
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0], grid::GridCell { gx: 5, gy: 5 });
}

#[test]
fn rectangular_viewport_is_a_cartesian_product() {
    // A wide aspect sees more columns than rows at the same zoom.
    let cells = grid::visible_cells(&camera(0.0, 0.0, 4.0), 2.0);
    let xs: HashSet<_> = cells.iter().map(|c| c.gx).collect();
    let ys: HashSet<_> = cells.iter().map(|c| c.gy).collect();
    assert_eq!(cells.len(), xs.len() * ys.len());
    assert!(xs.len() > ys.len());
}

#[test]
fn cell_labels_use_the_box_prefix() {
    assert_eq!(grid::GridCell { gx: 0, gy: 0 }.label(), "box_0_0");
    assert_eq!(grid::GridCell { gx: 9, gy: 3 }.label(), "box_9_3");
}
