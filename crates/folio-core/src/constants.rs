use std::f32::consts::PI;

// Shared geometry and motion defaults used by the core and the web frontend.

// Carousel layout
pub const CAROUSEL_RADIUS: f32 = 5.0; // world-space radius of the frame circle
pub const CAROUSEL_INITIAL_ROTATION_OFFSET: f32 = PI; // index 0 faces the viewer at rest

// Rotation smoothing
pub const ROTATION_DAMPING: f32 = 0.08; // fraction of remaining angle covered per tick
pub const ROTATION_EPSILON: f32 = 0.001; // radians; closer than this snaps to the target

// Tween durations (milliseconds)
pub const CAROUSEL_DURATION_MS: u64 = 1200; // cross-fade and eased rotation target
pub const FRAME_SCALE_DURATION_MS: u64 = 900; // zoom in/out of a single frame

// Frame sizing
pub const FRAME_PLANE_WIDTH: f32 = 1.6; // world-space width of a frame at scale 1
pub const DEFAULT_FRAME_SCALE: f32 = 1.0; // carousel (non-zoomed) scale

// Detail content shows once the zoom has covered this much of its distance
pub const CONTENT_REVEAL_THRESHOLD: f32 = 0.7;

// Input
pub const SWIPE_THRESHOLD_PX: f32 = 50.0; // horizontal travel that resolves a swipe
pub const TAP_SLOP_PX: f32 = 8.0; // jitter a tap may have before it counts as a drag
