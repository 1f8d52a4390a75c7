use crate::overlay::DomOverlay;
use crate::render::{self, ArtworkTextures};
use crate::viewport::CanvasViewport;
use folio_core::{Gallery, RenderBridge, Snapshot};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Long stalls (background tab) advance animations by at most this much
const MAX_FRAME_DT: Duration = Duration::from_millis(100);

/// Stand-in renderer when WebGPU is unavailable; the DOM overlay still works.
struct NoGpu;

impl RenderBridge for NoGpu {
    fn present(&mut self, _snapshot: &Snapshot) {}
}

pub struct FrameContext<'a> {
    pub gallery: Rc<RefCell<Gallery>>,
    pub viewport: CanvasViewport,
    pub canvas: web::HtmlCanvasElement,
    pub overlay: DomOverlay,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(MAX_FRAME_DT);
        self.last_instant = now;

        let mut gallery = self.gallery.borrow_mut();
        match &mut self.gpu {
            Some(g) => {
                g.resize_if_needed(self.canvas.width(), self.canvas.height());
                if g.textures_settled() {
                    gallery.mark_loader_finished();
                }
                gallery.frame(dt, &self.viewport, g, &mut self.overlay);
            }
            None => {
                gallery.mark_loader_finished();
                gallery.frame(dt, &self.viewport, &mut NoGpu, &mut self.overlay);
            }
        }
        self.overlay.set_hovered(gallery.session().hovered_list_item);
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    gallery: &Gallery,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let textures = ArtworkTextures::load(gallery.catalog().display_images());
    match render::GpuState::new(
        leaked_canvas,
        gallery.layout().to_vec(),
        gallery.config().frame_plane_width,
        textures,
    )
    .await
    {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
