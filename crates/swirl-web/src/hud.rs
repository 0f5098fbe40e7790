//! HUD readouts: zoom level, cursor world position, visible grid cells.
//!
//! Purely presentational consumers of camera state; every element is
//! optional in the page.

use crate::dom;
use swirl_core::{coords, grid, CameraState};
use web_sys as web;

pub const ZOOM_READOUT_ID: &str = "zoom-readout";
pub const CURSOR_READOUT_ID: &str = "cursor-readout";
pub const CELLS_READOUT_ID: &str = "cells-readout";

const CELL_LIST_MAX: usize = 8;

pub fn refresh(document: &web::Document, cam: &CameraState, canvas: &web::HtmlCanvasElement) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let aspect = width / height.max(1.0);

    dom::set_text(document, ZOOM_READOUT_ID, &format!("{:.2}x", cam.scale));

    let (mx, my) = coords::canvas_px_to_ndc(cam.last_pointer.0, cam.last_pointer.1, width, height);
    let world = coords::screen_to_world(mx, my, cam, aspect);
    dom::set_text(
        document,
        CURSOR_READOUT_ID,
        &format!("({:.0}, {:.0})", world.x, world.y),
    );

    let cells = grid::visible_cells(cam, aspect);
    let mut listing = cells
        .iter()
        .take(CELL_LIST_MAX)
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(" ");
    if cells.len() > CELL_LIST_MAX {
        listing.push_str(" ...");
    }
    dom::set_text(
        document,
        CELLS_READOUT_ID,
        &format!("{} cells: {}", cells.len(), listing),
    );
}
