//! Per-frame work: camera smoothing, HUD refresh, GPU draw.

use crate::dom::ResizeHook;
use crate::events::InputHooks;
use crate::hud;
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swirl_core::CameraState;
use web_sys as web;

pub struct FrameContext<'a> {
    pub camera: Rc<RefCell<CameraState>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: render::GpuState<'a>,
    pub hooks: InputHooks,
    pub resize: ResizeHook,
    /// Cleared to stop the loop; checked before every reschedule.
    pub running: Rc<Cell<bool>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        {
            let mut cam = self.camera.borrow_mut();
            cam.smooth_step();
            hud::refresh(&self.document, &cam, &self.canvas);
        }
        let cam = self.camera.borrow().clone();
        match self.gpu.render(&cam) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => {
                // Reconfigured on the next frame by resize_if_needed.
                log::warn!("surface lost, reconfiguring");
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory, stopping render loop");
                self.stop();
            }
            Err(e) => log::warn!("skipped frame: {:?}", e),
        }
    }

    /// Stop scheduling frames and unhook the input listeners atomically with
    /// the loop; GPU resources are released when the context drops.
    pub fn stop(&mut self) {
        self.running.set(false);
        self.hooks.detach();
        self.resize.detach();
    }
}
