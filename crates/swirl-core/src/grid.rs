//! Coarse visibility query against the fixed 10x10 world grid.

use crate::camera::CameraState;
use crate::constants::{GRID_CELLS, GRID_CELL_SIZE};
use crate::coords::viewport_bounds;

/// One cell of the fixed grid; derived per query, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub gx: u32,
    pub gy: u32,
}

impl GridCell {
    /// Stable identifier used by the HUD listing.
    pub fn label(&self) -> String {
        format!("box_{}_{}", self.gx, self.gy)
    }
}

#[inline]
fn cell_index(world: f64) -> u32 {
    ((world / GRID_CELL_SIZE).floor() as i64).clamp(0, GRID_CELLS as i64 - 1) as u32
}

/// Cells overlapped by the viewport's axis-aligned bounds in pre-warp space.
///
/// This is deliberately an approximation: the rendered points are spiral
/// warped, so a bounding box in the undistorted grid space may over- or
/// under-report what is actually on screen. The grid and the cursor readout
/// share that space, which is what makes the listing consistent with the
/// coordinate readout.
pub fn visible_cells(cam: &CameraState, aspect: f64) -> Vec<GridCell> {
    let bounds = viewport_bounds(cam, aspect);
    let gx_min = cell_index(bounds.x1);
    let gx_max = cell_index(bounds.x2);
    let gy_min = cell_index(bounds.y1);
    let gy_max = cell_index(bounds.y2);

    let mut cells =
        Vec::with_capacity(((gx_max - gx_min + 1) * (gy_max - gy_min + 1)) as usize);
    for gx in gx_min..=gx_max {
        for gy in gy_min..=gy_max {
            cells.push(GridCell { gx, gy });
        }
    }
    cells
}
