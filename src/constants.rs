/// Scene, render and DOM constants for the web frontend.
///
/// Motion tuning lives in the core crate's `MotionConfig`; these only cover
/// what the browser side draws and which elements it talks to.
// Camera
pub const CAMERA_FOVY_RAD: f32 = 0.785_398_2; // 45°
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Frames that are not hovered dim while a list item is hovered
pub const FRAME_DIM_OPACITY: f32 = 0.45;

// Full-screen backdrop behind the carousel
pub const BACKDROP_OPACITY: f32 = 0.35;

pub const CLEAR_COLOR: [f64; 3] = [0.05, 0.05, 0.06];

// Upper bound on frames drawn per pass
pub const MAX_FRAMES: usize = 64;

// DOM element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const LOADER_ID: &str = "loader";
pub const TITLE_ID: &str = "project-title";
pub const COUNTER_ID: &str = "project-counter";
pub const CATEGORY_ID: &str = "project-category";
pub const LIST_ID: &str = "project-list";
pub const PREV_BUTTON_ID: &str = "nav-prev";
pub const NEXT_BUTTON_ID: &str = "nav-next";
pub const DETAIL_ID: &str = "project-detail";
pub const DETAIL_TITLE_ID: &str = "detail-title";
pub const DETAIL_DESCRIPTION_ID: &str = "detail-description";
pub const DETAIL_META_ID: &str = "detail-meta";
pub const DETAIL_CLOSE_ID: &str = "detail-close";
pub const DETAIL_NEXT_ID: &str = "detail-next";
pub const DETAIL_NEXT_TITLE_ID: &str = "detail-next-title";
pub const DETAIL_IMAGES_ID: &str = "detail-images";

// CSS classes toggled by the overlay
pub const HIDDEN_CLASS: &str = "hidden";
pub const CURRENT_CLASS: &str = "is-current";
pub const HOVERED_CLASS: &str = "is-hovered";
pub const DETAIL_OPEN_CLASS: &str = "detail-open";
