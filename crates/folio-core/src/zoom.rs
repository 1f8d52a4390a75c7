//! Frame zoom ("detail view") controller.
//!
//! Enlarges one carousel frame to span the viewport, reveals its detail
//! content part-way through, and shrinks every enlarged frame back on close.
//! Frame scales live in a fixed arena indexed by carousel position; the
//! renderer resolves a [`FrameHandle`] to whatever it draws.

use crate::angle::{shortest_direction, Direction};
use crate::carousel::CarouselEngine;
use crate::config::MotionConfig;
use crate::error::{GalleryError, Result};
use crate::snapshot::{FrameState, GalleryEvent};
use crate::tween::{Easing, Tween};
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZoomMode {
    #[default]
    Browsing,
    Opening,
    Viewing,
    Closing,
}

/// Source of the visible world-space width used to size the zoomed frame.
///
/// `None` (or a non-positive width) means the viewport is not measurable yet.
pub trait ViewportSource {
    fn viewport_width(&self) -> Option<f32>;
}

impl<F: Fn() -> Option<f32>> ViewportSource for F {
    fn viewport_width(&self) -> Option<f32> {
        self()
    }
}

/// Opaque token for one carousel frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u32);

impl FrameHandle {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct FrameSlot {
    // 0 = carousel scale, 1 = fully enlarged to `target_scale`
    progress: f32,
    target_scale: f32,
    tween: Option<Tween>,
}

/// Per-position scale state for every carousel frame.
#[derive(Clone, Debug)]
pub struct FrameArena {
    slots: Vec<FrameSlot>,
    default_scale: f32,
}

impl FrameArena {
    pub fn new(len: usize, default_scale: f32) -> Self {
        let slots = (0..len)
            .map(|_| FrameSlot {
                progress: 0.0,
                target_scale: default_scale,
                tween: None,
            })
            .collect();
        Self {
            slots,
            default_scale,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn default_scale(&self) -> f32 {
        self.default_scale
    }

    pub fn handle(&self, index: usize) -> Option<FrameHandle> {
        (index < self.slots.len()).then_some(FrameHandle(index as u32))
    }

    pub fn handles(&self) -> impl Iterator<Item = FrameHandle> {
        (0..self.slots.len() as u32).map(FrameHandle)
    }

    pub fn scale(&self, handle: FrameHandle) -> f32 {
        self.slots
            .get(handle.index())
            .map(|s| self.default_scale + (s.target_scale - self.default_scale) * s.progress)
            .unwrap_or(self.default_scale)
    }

    pub fn progress(&self, handle: FrameHandle) -> f32 {
        self.slots
            .get(handle.index())
            .map(|s| s.progress)
            .unwrap_or(0.0)
    }

    pub fn states(&self) -> SmallVec<[FrameState; 8]> {
        self.handles()
            .map(|handle| FrameState {
                handle,
                scale: self.scale(handle),
            })
            .collect()
    }

    fn is_animating(&self) -> bool {
        self.slots.iter().any(|s| s.tween.is_some())
    }

    fn all_default(&self) -> bool {
        self.slots.iter().all(|s| s.progress == 0.0)
    }

    fn advance(&mut self, dt: Duration) {
        for slot in &mut self.slots {
            if let Some(tween) = &mut slot.tween {
                let step = tween.advance(dt);
                slot.progress = step.value.clamp(0.0, 1.0);
                if step.finished {
                    slot.tween = None;
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DeferredOpen {
    index: usize,
    skip: bool,
}

pub struct FrameZoomController {
    mode: ZoomMode,
    viewed: Option<usize>,
    frames: FrameArena,
    // Index whose detail content is currently shown
    content: Option<usize>,
    deferred: Option<DeferredOpen>,

    duration: Duration,
    easing: Easing,
    reveal_threshold: f32,
    frame_plane_width: f32,

    outbox: SmallVec<[GalleryEvent; 4]>,
}

impl FrameZoomController {
    pub fn new(len: usize, config: &MotionConfig) -> Self {
        Self {
            mode: ZoomMode::Browsing,
            viewed: None,
            frames: FrameArena::new(len, config.default_frame_scale),
            content: None,
            deferred: None,
            duration: config.frame_scale_duration(),
            easing: config.frame_scale_easing,
            reveal_threshold: config.content_reveal_threshold,
            frame_plane_width: config.frame_plane_width,
            outbox: SmallVec::new(),
        }
    }

    pub fn mode(&self) -> ZoomMode {
        self.mode
    }

    pub fn viewed_index(&self) -> Option<usize> {
        self.viewed
    }

    pub fn frames(&self) -> &FrameArena {
        &self.frames
    }

    pub fn is_content_visible(&self) -> bool {
        self.content.is_some()
    }

    /// Zoom progress of the viewed frame, 0 when nothing is viewed.
    pub fn scale_progress(&self) -> f32 {
        self.viewed
            .and_then(|i| self.frames.handle(i))
            .map(|h| self.frames.progress(h).clamp(0.0, 1.0))
            .unwrap_or(0.0)
    }

    /// Scale at which a frame spans the same fraction of any viewport.
    pub fn target_scale(&self, viewport_width: Option<f32>) -> Option<f32> {
        let width = viewport_width.filter(|w| w.is_finite() && *w > 0.0)?;
        Some((width / self.frame_plane_width) * self.frames.default_scale / 2.0)
    }

    fn show_content(&mut self, index: usize) {
        if self.content != Some(index) {
            self.content = Some(index);
            self.outbox.push(GalleryEvent::DetailVisibility {
                visible: true,
                index,
            });
        }
    }

    fn hide_content(&mut self) {
        if let Some(index) = self.content.take() {
            self.outbox.push(GalleryEvent::DetailVisibility {
                visible: false,
                index,
            });
        }
    }

    /// Enlarge frame `index`. Only valid while browsing.
    pub fn open<V: ViewportSource + ?Sized>(
        &mut self,
        index: usize,
        skip: bool,
        viewport: &V,
    ) -> Result<()> {
        if index >= self.frames.len() {
            log::warn!("[zoom] open index {} out of range", index);
            return Err(GalleryError::InvalidIndex {
                index,
                len: self.frames.len(),
            });
        }
        if self.mode != ZoomMode::Browsing {
            log::debug!("[zoom] open {} ignored in {:?}", index, self.mode);
            return Ok(());
        }
        log::debug!("[zoom] open {} skip={}", index, skip);
        self.viewed = Some(index);
        self.mode = ZoomMode::Opening;
        self.scale_up(index, skip, viewport);
        Ok(())
    }

    fn scale_up<V: ViewportSource + ?Sized>(&mut self, index: usize, skip: bool, viewport: &V) {
        let Some(target) = self.target_scale(viewport.viewport_width()) else {
            log::debug!("[zoom] viewport not measurable; deferring open of {}", index);
            self.deferred = Some(DeferredOpen { index, skip });
            return;
        };
        self.deferred = None;
        let slot = &mut self.frames.slots[index];
        slot.target_scale = target;
        if skip {
            slot.progress = 1.0;
            slot.tween = None;
            self.mode = ZoomMode::Viewing;
            self.show_content(index);
        } else {
            slot.tween = Some(Tween::new(slot.progress, 1.0, self.duration, self.easing));
        }
    }

    /// Shrink every enlarged frame back to carousel scale.
    ///
    /// If the viewed artwork is not the carousel's current one, the carousel
    /// is first sent there so browsing resumes on the artwork just viewed.
    pub fn close(&mut self, carousel: &mut CarouselEngine) -> Result<()> {
        let Some(viewed) = self.viewed else {
            return Ok(());
        };
        if !matches!(self.mode, ZoomMode::Opening | ZoomMode::Viewing) {
            return Ok(());
        }
        log::debug!("[zoom] close {}", viewed);

        let current = carousel.current_index();
        if let Some(direction) = shortest_direction(current, viewed, carousel.len()) {
            if let Err(e) = carousel.navigate(viewed, direction, false) {
                log::warn!("[zoom] realign carousel failed: {}", e);
            }
        }

        self.deferred = None;
        self.hide_content();
        for slot in &mut self.frames.slots {
            if slot.progress > 0.0 || slot.tween.is_some() {
                slot.tween = Some(Tween::new(slot.progress, 0.0, self.duration, self.easing));
            }
        }
        self.mode = ZoomMode::Closing;
        if !self.frames.is_animating() {
            self.finish_close();
        }
        Ok(())
    }

    fn finish_close(&mut self) {
        self.mode = ZoomMode::Browsing;
        self.viewed = None;
        log::debug!("[zoom] closed");
    }

    /// Jump the detail view to the next artwork.
    ///
    /// The carousel advances with no visible spin and the next frame appears
    /// already enlarged, so the swap reads as a single step.
    pub fn advance_to_next<V: ViewportSource + ?Sized>(
        &mut self,
        carousel: &mut CarouselEngine,
        viewport: &V,
    ) -> Result<()> {
        let Some(viewed) = self.viewed else {
            return Ok(());
        };
        if !matches!(self.mode, ZoomMode::Opening | ZoomMode::Viewing) {
            return Ok(());
        }
        let next = (viewed + 1) % self.frames.len().max(1);
        log::debug!("[zoom] advance {} -> {}", viewed, next);

        match carousel.navigate(next, Direction::Forward, true) {
            Ok(()) | Err(GalleryError::DegenerateCatalog { .. }) => {}
            Err(e) => return Err(e),
        }
        self.viewed = Some(next);
        self.mode = ZoomMode::Opening;
        self.scale_up(next, true, viewport);
        Ok(())
    }

    /// Advance scale tweens by one render tick.
    pub fn tick<V: ViewportSource + ?Sized>(
        &mut self,
        dt: Duration,
        viewport: &V,
        out_events: &mut Vec<GalleryEvent>,
    ) {
        if let Some(d) = self.deferred {
            if self.mode == ZoomMode::Opening && self.viewed == Some(d.index) {
                self.scale_up(d.index, d.skip, viewport);
            } else {
                self.deferred = None;
            }
        }

        self.frames.advance(dt);

        match (self.mode, self.viewed) {
            (ZoomMode::Opening, Some(index)) if self.deferred.is_none() => {
                let (progress, animating) = {
                    let slot = &self.frames.slots[index];
                    (slot.progress, slot.tween.is_some())
                };
                let done = !animating && progress >= 1.0;
                if progress > self.reveal_threshold || done {
                    self.show_content(index);
                }
                if done {
                    self.mode = ZoomMode::Viewing;
                    log::debug!("[zoom] viewing {}", index);
                }
            }
            (ZoomMode::Closing, _) => {
                if !self.frames.is_animating() && self.frames.all_default() {
                    self.finish_close();
                }
            }
            _ => {}
        }

        out_events.extend(self.outbox.drain(..));
    }
}
