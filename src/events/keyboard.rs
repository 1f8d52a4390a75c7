use super::InputWiring;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &InputWiring) {
    if ev.repeat() {
        return;
    }
    let key = ev.key();
    let handled = w.gallery.borrow_mut().key(&key, &w.viewport);
    if handled {
        log::debug!("[keys] {}", key);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(w: InputWiring) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &w);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
