#![allow(dead_code)]
use folio_core::*;
use std::time::Duration;

pub const DT: Duration = Duration::from_millis(16);

pub fn entry(id: &str) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        display_image: format!("/images/{id}.jpg"),
        gallery_images: Vec::new(),
        metadata: ArtworkMetadata {
            title: id.to_uppercase(),
            description: String::new(),
            category: Category::PhysicalArt,
            dimensions: Dimensions {
                height: 29.0,
                width: 21.0,
                depth: None,
            },
            materials: vec!["paper".to_string()],
            start_date: "2024-01-01".to_string(),
            end_date: None,
            print_available: false,
            original_available: true,
        },
    }
}

pub fn catalog(ids: &[&str]) -> Catalog {
    Catalog::new(ids.iter().map(|id| entry(id)).collect()).expect("valid catalog")
}

pub fn engine(n: usize) -> CarouselEngine {
    CarouselEngine::new(n, &MotionConfig::default())
}

pub fn zoom(n: usize) -> FrameZoomController {
    FrameZoomController::new(n, &MotionConfig::default())
}

pub fn viewport() -> impl Fn() -> Option<f32> {
    || Some(8.0)
}

/// Tick the engine until the in-flight transition commits.
pub fn settle_transition(e: &mut CarouselEngine, events: &mut Vec<GalleryEvent>) -> usize {
    let mut ticks = 0;
    while e.is_transitioning() {
        e.tick(DT, events);
        ticks += 1;
        assert!(ticks < 10_000, "transition never committed");
    }
    ticks
}

/// Tick the engine until the visible rotation stops moving.
pub fn settle_rotation(e: &mut CarouselEngine) {
    let mut sink = Vec::new();
    let mut ticks = 0;
    while e.is_rotating() || e.is_transitioning() {
        e.tick(DT, &mut sink);
        ticks += 1;
        assert!(ticks < 10_000, "rotation never settled");
    }
}

pub fn settle_zoom<V: ViewportSource + ?Sized>(
    z: &mut FrameZoomController,
    vp: &V,
    until: ZoomMode,
    events: &mut Vec<GalleryEvent>,
) {
    let mut ticks = 0;
    while z.mode() != until {
        z.tick(DT, vp, events);
        ticks += 1;
        assert!(ticks < 10_000, "zoom never reached {until:?}");
    }
}
