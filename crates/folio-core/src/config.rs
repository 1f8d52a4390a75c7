use crate::constants::*;
use crate::tween::Easing;
use serde::Deserialize;
use std::time::Duration;

/// Motion tuning for the carousel, zoom and swipe handling.
///
/// Every field falls back to the matching constant, so a partial `motion`
/// object in the gallery JSON only overrides what it names.
#[derive(Debug, Clone, Deserialize)]
pub struct MotionConfig {
    #[serde(default = "default_carousel_duration_ms")]
    pub carousel_duration_ms: u64,
    #[serde(default)]
    pub carousel_easing: Easing,
    #[serde(default = "default_rotation_damping")]
    pub rotation_damping: f32,
    #[serde(default = "default_rotation_epsilon")]
    pub rotation_epsilon: f32,
    #[serde(default = "default_frame_scale_duration_ms")]
    pub frame_scale_duration_ms: u64,
    #[serde(default = "default_frame_scale_easing")]
    pub frame_scale_easing: Easing,
    #[serde(default = "default_content_reveal_threshold")]
    pub content_reveal_threshold: f32,
    #[serde(default = "default_frame_plane_width")]
    pub frame_plane_width: f32,
    #[serde(default = "default_frame_scale")]
    pub default_frame_scale: f32,
    #[serde(default = "default_carousel_radius")]
    pub carousel_radius: f32,
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            carousel_duration_ms: default_carousel_duration_ms(),
            carousel_easing: Easing::default(),
            rotation_damping: default_rotation_damping(),
            rotation_epsilon: default_rotation_epsilon(),
            frame_scale_duration_ms: default_frame_scale_duration_ms(),
            frame_scale_easing: default_frame_scale_easing(),
            content_reveal_threshold: default_content_reveal_threshold(),
            frame_plane_width: default_frame_plane_width(),
            default_frame_scale: default_frame_scale(),
            carousel_radius: default_carousel_radius(),
            swipe_threshold_px: default_swipe_threshold_px(),
        }
    }
}

impl MotionConfig {
    pub fn carousel_duration(&self) -> Duration {
        Duration::from_millis(self.carousel_duration_ms)
    }

    pub fn frame_scale_duration(&self) -> Duration {
        Duration::from_millis(self.frame_scale_duration_ms)
    }

    /// Clamp values that would break the state machines into usable ranges.
    pub fn sanitized(mut self) -> Self {
        self.rotation_damping = self.rotation_damping.clamp(f32::EPSILON, 1.0);
        self.rotation_epsilon = self.rotation_epsilon.max(0.0);
        self.content_reveal_threshold = self.content_reveal_threshold.clamp(0.0, 1.0);
        if !(self.frame_plane_width > 0.0) {
            self.frame_plane_width = FRAME_PLANE_WIDTH;
        }
        if !(self.default_frame_scale > 0.0) {
            self.default_frame_scale = DEFAULT_FRAME_SCALE;
        }
        self.swipe_threshold_px = self.swipe_threshold_px.max(1.0);
        self
    }
}

fn default_carousel_duration_ms() -> u64 {
    CAROUSEL_DURATION_MS
}

fn default_rotation_damping() -> f32 {
    ROTATION_DAMPING
}

fn default_rotation_epsilon() -> f32 {
    ROTATION_EPSILON
}

fn default_frame_scale_duration_ms() -> u64 {
    FRAME_SCALE_DURATION_MS
}

fn default_frame_scale_easing() -> Easing {
    Easing::QuadInOut
}

fn default_content_reveal_threshold() -> f32 {
    CONTENT_REVEAL_THRESHOLD
}

fn default_frame_plane_width() -> f32 {
    FRAME_PLANE_WIDTH
}

fn default_frame_scale() -> f32 {
    DEFAULT_FRAME_SCALE
}

fn default_carousel_radius() -> f32 {
    CAROUSEL_RADIUS
}

fn default_swipe_threshold_px() -> f32 {
    SWIPE_THRESHOLD_PX
}
