//! Composition root: one gallery session.
//!
//! Owns the catalog, the carousel engine, the zoom controller and the input
//! router, plus the few session flags that views share. Hosts feed it input
//! and call [`Gallery::frame`] once per displayed frame.

use crate::carousel::CarouselEngine;
use crate::catalog::Catalog;
use crate::config::MotionConfig;
use crate::error::Result;
use crate::input::{Gesture, InputRouter, Intent, Key};
use crate::scene::{carousel_layout, FramePlacement};
use crate::snapshot::{GalleryEvent, OverlayPresenter, RenderBridge, Snapshot};
use crate::zoom::{FrameZoomController, ViewportSource, ZoomMode};
use glam::Vec2;
use std::time::Duration;

/// Cross-view flags scoped to the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionFlags {
    pub loader_finished: bool,
    pub hovered_list_item: Option<usize>,
}

pub struct Gallery {
    catalog: Catalog,
    config: MotionConfig,
    layout: Vec<FramePlacement>,
    carousel: CarouselEngine,
    zoom: FrameZoomController,
    router: InputRouter,
    session: SessionFlags,
    events: Vec<GalleryEvent>,
}

impl Gallery {
    pub fn new(catalog: Catalog, config: MotionConfig) -> Self {
        let n = catalog.len();
        log::info!("[gallery] {} artworks", n);
        Self {
            layout: carousel_layout(n, config.carousel_radius),
            carousel: CarouselEngine::new(n, &config),
            zoom: FrameZoomController::new(n, &config),
            router: InputRouter::new(config.swipe_threshold_px),
            session: SessionFlags::default(),
            events: Vec::new(),
            catalog,
            config,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let (catalog, config) = Catalog::from_json(json)?;
        Ok(Self::new(catalog, config))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn layout(&self) -> &[FramePlacement] {
        &self.layout
    }

    pub fn carousel(&self) -> &CarouselEngine {
        &self.carousel
    }

    pub fn zoom(&self) -> &FrameZoomController {
        &self.zoom
    }

    pub fn session(&self) -> SessionFlags {
        self.session
    }

    pub fn mode(&self) -> ZoomMode {
        self.zoom.mode()
    }

    /// Apply one intent. Rejected operations are logged and leave state as is.
    pub fn dispatch<V: ViewportSource + ?Sized>(&mut self, intent: Intent, viewport: &V) {
        if !intent.allowed_in(self.zoom.mode()) {
            return;
        }
        if intent.is_navigation() || intent == Intent::Open {
            self.session.hovered_list_item = None;
        }
        let result = match intent {
            Intent::Next => self.carousel.next(false),
            Intent::Prev => self.carousel.prev(false),
            Intent::Select(index) => self.carousel.select(index),
            Intent::Open => self
                .zoom
                .open(self.carousel.current_index(), false, viewport),
            Intent::Close => self.zoom.close(&mut self.carousel),
            Intent::AdvanceToNext => self.zoom.advance_to_next(&mut self.carousel, viewport),
        };
        if let Err(e) = result {
            log::warn!("[gallery] {:?} rejected: {}", intent, e);
        }
    }

    pub fn gesture<V: ViewportSource + ?Sized>(&mut self, gesture: Gesture, viewport: &V) {
        if let Some(intent) = self.router.route(gesture, self.zoom.mode()) {
            self.dispatch(intent, viewport);
        }
    }

    /// Handle a DOM key value; returns true when the key is one we map.
    pub fn key<V: ViewportSource + ?Sized>(&mut self, key: &str, viewport: &V) -> bool {
        match Key::from_dom(key) {
            Some(k) => {
                self.gesture(Gesture::Key(k), viewport);
                true
            }
            None => false,
        }
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.router.pointer_down(pos, self.zoom.mode());
    }

    pub fn pointer_move<V: ViewportSource + ?Sized>(&mut self, pos: Vec2, viewport: &V) {
        if let Some(intent) = self.router.pointer_move(pos, self.zoom.mode()) {
            log::debug!("[input] swipe -> {:?}", intent);
            self.dispatch(intent, viewport);
        }
    }

    pub fn pointer_up<V: ViewportSource + ?Sized>(&mut self, viewport: &V) {
        if let Some(intent) = self.router.pointer_up(self.zoom.mode()) {
            self.dispatch(intent, viewport);
        }
    }

    pub fn pointer_cancel(&mut self) {
        self.router.pointer_cancel();
    }

    pub fn hover_list_item(&mut self, index: Option<usize>) {
        self.session.hovered_list_item = index.filter(|&i| i < self.catalog.len());
    }

    pub fn mark_loader_finished(&mut self) {
        if !self.session.loader_finished {
            self.session.loader_finished = true;
            self.events.push(GalleryEvent::LoaderFinished);
        }
    }

    /// Advance every animation by `dt` and capture the resulting state.
    pub fn tick<V: ViewportSource + ?Sized>(&mut self, dt: Duration, viewport: &V) -> Snapshot {
        self.carousel.tick(dt, &mut self.events);
        self.zoom.tick(dt, viewport, &mut self.events);
        self.snapshot()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_index: self.carousel.current_index(),
            pending_index: self.carousel.pending_index(),
            rotation_angle: self.carousel.rotation_angle(),
            cross_fade_progress: self.carousel.cross_fade_progress(),
            texture_pairing: self.carousel.texture_pairing(),
            zoomed_index: self.zoom.viewed_index(),
            zoom_scale_progress: self.zoom.scale_progress(),
            ui_mode: self.zoom.mode(),
            frames: self.zoom.frames().states(),
            hovered_list_item: self.session.hovered_list_item,
        }
    }

    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GalleryEvent> {
        self.events.drain(..)
    }

    /// Tick, notify the overlay of this tick's events, then hand the
    /// snapshot to the renderer.
    pub fn frame<V, R, O>(&mut self, dt: Duration, viewport: &V, renderer: &mut R, overlay: &mut O)
    where
        V: ViewportSource + ?Sized,
        R: RenderBridge + ?Sized,
        O: OverlayPresenter + ?Sized,
    {
        let snapshot = self.tick(dt, viewport);
        for ev in self.events.drain(..) {
            ev.deliver(&self.catalog, overlay);
        }
        renderer.present(&snapshot);
    }
}
