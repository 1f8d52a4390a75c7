use crate::camera;
use folio_core::ViewportSource;
use web_sys as web;

/// Measures the visible world width from the canvas' current backing size.
#[derive(Clone)]
pub struct CanvasViewport {
    canvas: web::HtmlCanvasElement,
    radius: f32,
}

impl CanvasViewport {
    pub fn new(canvas: web::HtmlCanvasElement, radius: f32) -> Self {
        Self { canvas, radius }
    }
}

impl ViewportSource for CanvasViewport {
    fn viewport_width(&self) -> Option<f32> {
        camera::visible_width_at_radius(self.canvas.width(), self.canvas.height(), self.radius)
    }
}
