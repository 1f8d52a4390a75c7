pub mod angle;
pub mod app;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod scene;
pub mod snapshot;
pub mod textures;
pub mod tween;
pub mod zoom;

pub use angle::{normalize_angle, shortest_direction, Direction};
pub use app::{Gallery, SessionFlags};
pub use carousel::CarouselEngine;
pub use catalog::{ArtworkMetadata, Catalog, CatalogEntry, Category, DetailContent, Dimensions};
pub use config::MotionConfig;
pub use error::GalleryError;
pub use input::{Gesture, InputRouter, Intent, Key, SwipeTracker};
pub use scene::{Camera, FramePlacement};
pub use snapshot::{FrameState, GalleryEvent, OverlayPresenter, RenderBridge, Snapshot};
pub use textures::{TexturePairing, TextureSet};
pub use tween::{Easing, Tween};
pub use zoom::{FrameArena, FrameHandle, FrameZoomController, ViewportSource, ZoomMode};

// Bundled gallery document (catalog + optional motion overrides)
pub static GALLERY_JSON: &str = include_str!("../assets/gallery.json");
