use super::InputWiring;
use crate::constants::*;
use crate::dom;
use folio_core::Gesture;
use wasm_bindgen::JsCast;
use web_sys as web;

fn wire_gesture_button(w: &InputWiring, document: &web::Document, id: &str, gesture: Gesture) {
    let w = w.clone();
    dom::add_click_listener(document, id, move || {
        log::debug!("[click] {:?}", gesture);
        w.gallery.borrow_mut().gesture(gesture, &w.viewport);
    });
}

pub fn wire_buttons(w: &InputWiring, document: &web::Document) {
    wire_gesture_button(w, document, PREV_BUTTON_ID, Gesture::PrevButton);
    wire_gesture_button(w, document, NEXT_BUTTON_ID, Gesture::NextButton);
    wire_gesture_button(w, document, DETAIL_CLOSE_ID, Gesture::CloseButton);
    wire_gesture_button(w, document, DETAIL_NEXT_ID, Gesture::NextProjectButton);
}

/// Delegated click and hover handling for the project list.
pub fn wire_project_list(w: &InputWiring, document: &web::Document) {
    let Some(list) = document.get_element_by_id(LIST_ID) else {
        return;
    };

    let wc = w.clone();
    let click = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some((_, index)) = dom::indexed_ancestor(ev.target()) {
            log::debug!("[click] list item {}", index);
            wc.gallery
                .borrow_mut()
                .gesture(Gesture::ListSelect(index), &wc.viewport);
        }
    }) as Box<dyn FnMut(_)>);
    _ = list.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
    click.forget();

    let wo = w.clone();
    let over = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let index = dom::indexed_ancestor(ev.target()).map(|(_, i)| i);
        wo.gallery.borrow_mut().hover_list_item(index);
    }) as Box<dyn FnMut(_)>);
    _ = list.add_event_listener_with_callback("mouseover", over.as_ref().unchecked_ref());
    over.forget();

    let wl = w.clone();
    let leave = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        wl.gallery.borrow_mut().hover_list_item(None);
    }) as Box<dyn FnMut(_)>);
    _ = list.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
    leave.forget();
}
