//! Pointer and wheel listeners feeding the shared camera.
//!
//! Listener closures and the frame loop run on the same browser thread, so
//! an `Rc<RefCell<CameraState>>` is all the synchronization needed. Every
//! registered closure is tracked so teardown can drop the listeners together
//! with the loop (no input may outlive the surface it mutates state for).

use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use swirl_core::{input, CameraState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handles to everything that must be unhooked on teardown.
pub struct InputHooks {
    canvas: web::HtmlCanvasElement,
    listeners: Vec<(&'static str, Closure<dyn FnMut(web::PointerEvent)>)>,
    wheel: Option<Closure<dyn FnMut(web::WheelEvent)>>,
}

impl InputHooks {
    /// Remove all listeners from the canvas. Idempotent.
    pub fn detach(&mut self) {
        for (name, closure) in self.listeners.drain(..) {
            let _ = self
                .canvas
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
        if let Some(closure) = self.wheel.take() {
            let _ = self
                .canvas
                .remove_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        }
    }
}

pub fn install(canvas: &web::HtmlCanvasElement, camera: Rc<RefCell<CameraState>>) -> InputHooks {
    let mut listeners = Vec::new();

    {
        let camera = camera.clone();
        let canvas_ev = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let (sx, sy) = dom::pointer_canvas_px(&ev, &canvas_ev);
            input::pointer_down(&mut camera.borrow_mut(), sx, sy);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        listeners.push(("pointerdown", closure));
    }

    {
        let camera = camera.clone();
        let canvas_ev = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let (sx, sy) = dom::pointer_canvas_px(&ev, &canvas_ev);
            let w = canvas_ev.width() as f64;
            let h = canvas_ev.height() as f64;
            input::pointer_move(&mut camera.borrow_mut(), sx, sy, w, h);
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        listeners.push(("pointermove", closure));
    }

    for name in ["pointerup", "pointercancel"] {
        let camera = camera.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            input::pointer_up(&mut camera.borrow_mut());
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        listeners.push((name, closure));
    }

    let wheel = {
        let camera = camera.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            input::wheel(&mut camera.borrow_mut(), ev.delta_y());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        Some(closure)
    };

    InputHooks {
        canvas: canvas.clone(),
        listeners,
        wheel,
    }
}
