//! Scene-space types shared with the web frontend.
//!
//! Nothing here touches platform APIs: the frontend feeds these matrices to
//! its renderer and asks the camera how wide the view is at the frame circle.

use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera at the carousel centre looking at the front frame.
    pub fn centered(aspect: f32, fovy_radians: f32) -> Self {
        Self {
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            aspect,
            fovy_radians,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space width visible on a plane `distance` in front of the eye.
    pub fn visible_width_at(&self, distance: f32) -> Option<f32> {
        if !(self.aspect > 0.0) || !(distance > 0.0) {
            return None;
        }
        Some(2.0 * distance * (self.fovy_radians * 0.5).tan() * self.aspect)
    }
}

/// Resting place of one frame on the carousel circle (before group rotation).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePlacement {
    pub position: Vec3,
    pub yaw: f32,
}

/// Frames spaced evenly on a circle of `radius`, each turned to face inward.
pub fn carousel_layout(count: usize, radius: f32) -> Vec<FramePlacement> {
    (0..count)
        .map(|i| {
            let angle = -(i as f32 / count as f32) * TAU;
            FramePlacement {
                position: Vec3::new(angle.sin() * radius, 0.0, angle.cos() * radius),
                yaw: angle + PI,
            }
        })
        .collect()
}

/// Model matrix for a frame inside a carousel group rotated by `group_rotation`.
pub fn frame_model(placement: &FramePlacement, group_rotation: f32, scale: f32) -> Mat4 {
    Mat4::from_rotation_y(group_rotation)
        * Mat4::from_translation(placement.position)
        * Mat4::from_rotation_y(placement.yaw)
        * Mat4::from_scale(Vec3::splat(scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_faces_camera_at_rest() {
        let layout = carousel_layout(3, 5.0);
        let m = frame_model(&layout[0], PI, 1.0);
        let centre = m.transform_point3(Vec3::ZERO);
        assert!(centre.x.abs() < 1e-4);
        assert!((centre.z + 5.0).abs() < 1e-4, "front frame at z={}", centre.z);
    }

    #[test]
    fn visible_width_rejects_unmeasured_viewport() {
        let cam = Camera::centered(0.0, 0.8);
        assert_eq!(cam.visible_width_at(5.0), None);
    }
}
