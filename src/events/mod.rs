pub mod buttons;
pub mod keyboard;
pub mod pointer;

use crate::viewport::CanvasViewport;
use folio_core::Gallery;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handles every DOM listener closes over.
#[derive(Clone)]
pub struct InputWiring {
    pub gallery: Rc<RefCell<Gallery>>,
    pub viewport: CanvasViewport,
}

pub fn wire_all(w: &InputWiring, document: &web_sys::Document, canvas: &web_sys::HtmlCanvasElement) {
    keyboard::wire_global_keydown(w.clone());
    pointer::wire_input_handlers(w.clone(), canvas.clone());
    buttons::wire_buttons(w, document);
    buttons::wire_project_list(w, document);
}
