use crate::constants::{CAMERA_FOVY_RAD, CAMERA_ZFAR, CAMERA_ZNEAR};
use folio_core::Camera;

/// Scene camera for a canvas backing store of `width` × `height` pixels.
pub fn scene_camera(width: u32, height: u32) -> Camera {
    let aspect = if height == 0 {
        0.0
    } else {
        width as f32 / height as f32
    };
    let mut cam = Camera::centered(aspect, CAMERA_FOVY_RAD);
    cam.znear = CAMERA_ZNEAR;
    cam.zfar = CAMERA_ZFAR;
    cam
}

/// World-space width visible at the carousel radius, where the front frame sits.
///
/// `None` until the canvas has a measurable size.
#[inline]
pub fn visible_width_at_radius(width: u32, height: u32, radius: f32) -> Option<f32> {
    if width == 0 || height == 0 {
        return None;
    }
    scene_camera(width, height).visible_width_at(radius)
}
