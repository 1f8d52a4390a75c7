// Per-tick draw lists derived from a gallery snapshot.
// Kept free of GPU handles so the math runs in host tests.

use crate::constants::{BACKDROP_OPACITY, FRAME_DIM_OPACITY, MAX_FRAMES};
use folio_core::scene::frame_model;
use folio_core::{FramePlacement, Snapshot, TexturePairing};

/// Instance data for one frame quad.
///
/// `params` = (opacity, half width, half height, unused).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FrameInstance {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CameraUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BackdropUniforms {
    pub(crate) progress: f32,
    pub(crate) opacity: f32,
    pub(crate) _pad: [f32; 2],
}

/// Textures and blend factor for the backdrop cross-fade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BackdropBlend {
    pub(crate) from: usize,
    pub(crate) to: usize,
    pub(crate) uniforms: BackdropUniforms,
}

fn frame_opacity(snapshot: &Snapshot, index: usize) -> f32 {
    match snapshot.hovered_list_item {
        Some(h) if h != index => FRAME_DIM_OPACITY,
        _ => 1.0,
    }
}

/// Collect `(artwork index, instance)` for every frame that should be drawn.
///
/// Frames whose texture is not ready are skipped; hidden frames (everything
/// but the zoomed one outside of browsing) are never emitted.
pub(crate) fn build_instances(
    snapshot: &Snapshot,
    layout: &[FramePlacement],
    frame_width: f32,
    aspect_of: impl Fn(usize) -> Option<f32>,
    out: &mut Vec<(usize, FrameInstance)>,
) {
    out.clear();
    for state in snapshot.frames.iter().take(MAX_FRAMES) {
        let index = state.handle.index();
        if !snapshot.is_frame_visible(index) {
            continue;
        }
        let (Some(placement), Some(aspect)) = (layout.get(index), aspect_of(index)) else {
            continue;
        };
        let model = frame_model(placement, snapshot.rotation_angle, state.scale);
        out.push((
            index,
            FrameInstance {
                model: model.to_cols_array_2d(),
                params: [
                    frame_opacity(snapshot, index),
                    frame_width * 0.5,
                    frame_width * aspect * 0.5,
                    0.0,
                ],
            },
        ));
    }
}

/// Resolve the pairing against texture readiness.
///
/// A missing side falls back to the ready one; with neither ready the
/// backdrop is not drawn this tick.
pub(crate) fn backdrop_blend(
    pairing: TexturePairing,
    progress: f32,
    is_ready: impl Fn(usize) -> bool,
) -> Option<BackdropBlend> {
    let (from, to, progress) = match (is_ready(pairing.from), is_ready(pairing.to)) {
        (true, true) => (pairing.from, pairing.to, progress),
        (true, false) => (pairing.from, pairing.from, 0.0),
        (false, true) => (pairing.to, pairing.to, 1.0),
        (false, false) => return None,
    };
    Some(BackdropBlend {
        from,
        to,
        uniforms: BackdropUniforms {
            progress: progress.clamp(0.0, 1.0),
            opacity: BACKDROP_OPACITY,
            _pad: [0.0; 2],
        },
    })
}
