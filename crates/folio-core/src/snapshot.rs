//! Per-tick output of the gallery and the contracts of its consumers.

use crate::catalog::{Catalog, CatalogEntry, DetailContent};
use crate::textures::TexturePairing;
use crate::zoom::{FrameHandle, ZoomMode};
use smallvec::SmallVec;

/// Logical scale of one carousel frame, keyed by its arena handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    pub handle: FrameHandle,
    pub scale: f32,
}

/// Immutable view of everything the renderer and overlay need for a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub current_index: usize,
    pub pending_index: Option<usize>,
    pub rotation_angle: f32,
    pub cross_fade_progress: f32,
    pub texture_pairing: TexturePairing,
    pub zoomed_index: Option<usize>,
    pub zoom_scale_progress: f32,
    pub ui_mode: ZoomMode,
    pub frames: SmallVec<[FrameState; 8]>,
    pub hovered_list_item: Option<usize>,
}

impl Snapshot {
    /// Whether frame `index` should be drawn this tick.
    ///
    /// Outside of browsing only the zoomed frame is visible.
    pub fn is_frame_visible(&self, index: usize) -> bool {
        match self.ui_mode {
            ZoomMode::Browsing => true,
            _ => self.zoomed_index == Some(index),
        }
    }
}

/// Discrete notifications for the overlay, emitted on commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryEvent {
    CurrentChanged { index: usize },
    DetailVisibility { visible: bool, index: usize },
    LoaderFinished,
}

impl GalleryEvent {
    pub fn deliver<O: OverlayPresenter + ?Sized>(&self, catalog: &Catalog, overlay: &mut O) {
        match *self {
            GalleryEvent::CurrentChanged { index } => {
                if let Some(entry) = catalog.get(index) {
                    overlay.current_changed(index, entry);
                }
            }
            GalleryEvent::DetailVisibility { visible, index } => {
                if let Some(detail) = catalog.detail(index) {
                    overlay.detail_visibility_changed(visible, index, &detail);
                }
            }
            GalleryEvent::LoaderFinished => overlay.loader_finished(),
        }
    }
}

/// Consumer of the per-tick snapshot (the scene renderer).
pub trait RenderBridge {
    fn present(&mut self, snapshot: &Snapshot);
}

/// Consumer of overlay events (titles, detail panel, loader splash).
pub trait OverlayPresenter {
    fn current_changed(&mut self, index: usize, entry: &CatalogEntry);

    fn detail_visibility_changed(
        &mut self,
        visible: bool,
        index: usize,
        detail: &DetailContent<'_>,
    );

    fn loader_finished(&mut self) {}
}
