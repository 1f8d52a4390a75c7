use super::InputWiring;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

// Swipes are measured in CSS pixels, matching the threshold's units.
#[inline]
fn pointer_css(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn wire_input_handlers(w: InputWiring, canvas: web::HtmlCanvasElement) {
    wire_pointerdown(&w, &canvas);
    wire_window_pointer(&w, "pointermove", |w, ev| {
        w.gallery
            .borrow_mut()
            .pointer_move(pointer_css(ev), &w.viewport);
    });
    wire_window_pointer(&w, "pointerup", |w, _ev| {
        w.gallery.borrow_mut().pointer_up(&w.viewport);
    });
    wire_window_pointer(&w, "pointercancel", |w, _ev| {
        w.gallery.borrow_mut().pointer_cancel();
    });
}

fn wire_pointerdown(w: &InputWiring, canvas: &web::HtmlCanvasElement) {
    let w = w.clone();
    let canvas_for_capture = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        w.gallery.borrow_mut().pointer_down(pointer_css(&ev));
        _ = canvas_for_capture.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_window_pointer(
    w: &InputWiring,
    event: &str,
    handler: impl Fn(&InputWiring, &web::PointerEvent) + 'static,
) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if ev.is_primary() {
            handler(&w, &ev);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
