#![cfg(target_arch = "wasm32")]
//! Web front-end: WebGPU point rendering on an HTML canvas with pan/zoom.

pub mod data;
pub mod dom;
pub mod events;
pub mod frame;
pub mod hud;
pub mod render;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swirl_core::CameraState;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("swirl-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::sync_canvas_backing_size(&canvas);
    let resize = dom::install_resize_listener(&canvas);

    let points = data::load_points().await;

    // Leak a canvas clone to satisfy the 'static lifetime of the surface;
    // one canvas per page, lives as long as the view does.
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let mut gpu = match render::GpuState::new(leaked_canvas).await {
        Ok(g) => g,
        Err(e) => {
            // No GPU: degrade to an inert view rather than crash the host.
            log::error!("WebGPU init error: {:?}", e);
            return Ok(());
        }
    };
    gpu.upload(&points)?;

    let camera = Rc::new(RefCell::new(CameraState::new()));
    let hooks = events::install(&canvas, camera.clone());
    let running = Rc::new(Cell::new(true));

    let mut ctx = frame::FrameContext {
        camera,
        canvas,
        document,
        gpu,
        hooks,
        resize,
        running: running.clone(),
    };

    // requestAnimationFrame loop; dropping `running` to false stops the
    // rescheduling chain and detaches the input listeners.
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !ctx.running.get() {
            return;
        }
        ctx.frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }

    Ok(())
}
