use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Set the text content of a HUD element if it exists; missing elements are
/// treated as "readout not wanted on this page".
#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Keep the canvas backing store sized to CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Handle to the window resize listener, kept so teardown can remove it
/// together with the pointer and wheel hooks.
pub struct ResizeHook {
    closure: Option<Closure<dyn FnMut()>>,
}

impl ResizeHook {
    /// Remove the listener from the window. Idempotent.
    pub fn detach(&mut self) {
        if let (Some(window), Some(closure)) = (web::window(), self.closure.take()) {
            let _ = window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
    }
}

/// Re-sync the backing size whenever the window resizes.
pub fn install_resize_listener(canvas: &web::HtmlCanvasElement) -> ResizeHook {
    let mut hook = ResizeHook { closure: None };
    if let Some(window) = web::window() {
        let canvas_resize = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        hook.closure = Some(closure);
    }
    hook
}

/// Pointer event position in canvas backing-store pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f64 - rect.left();
    let y_css = ev.client_y() as f64 - rect.top();
    let sx = (x_css / rect.width().max(1.0)) * canvas.width() as f64;
    let sy = (y_css / rect.height().max(1.0)) * canvas.height() as f64;
    (sx, sy)
}
