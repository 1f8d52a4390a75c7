// Host-side tests for the draw-list builder.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod frames {
    include!("../src/render/frames.rs");
}

use constants::{BACKDROP_OPACITY, FRAME_DIM_OPACITY};
use folio_core::scene::carousel_layout;
use folio_core::{Gallery, MotionConfig, Snapshot, TexturePairing, GALLERY_JSON};
use frames::*;
use std::time::Duration;

fn snapshot() -> (Gallery, Snapshot) {
    let g = Gallery::from_json(GALLERY_JSON).unwrap();
    let s = g.snapshot();
    (g, s)
}

#[test]
fn every_ready_frame_is_drawn_while_browsing() {
    let (g, snap) = snapshot();
    let mut out = Vec::new();
    build_instances(&snap, g.layout(), 1.6, |_| Some(1.25), &mut out);
    let indices: Vec<usize> = out.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    let (_, first) = out[0];
    assert_eq!(first.params[0], 1.0);
    assert!((first.params[1] - 0.8).abs() < 1e-6);
    assert!((first.params[2] - 1.0).abs() < 1e-6);
}

#[test]
fn unready_textures_are_skipped() {
    let (g, snap) = snapshot();
    let mut out = Vec::new();
    build_instances(
        &snap,
        g.layout(),
        1.6,
        |i| (i != 1).then_some(1.0),
        &mut out,
    );
    assert!(out.iter().all(|(i, _)| *i != 1));
    assert_eq!(out.len(), 2);
}

#[test]
fn only_zoomed_frame_is_drawn_in_detail_view() {
    let mut g = Gallery::from_json(GALLERY_JSON).unwrap();
    let vp = || Some(8.0_f32);
    g.key("Enter", &vp);
    let snap = g.tick(Duration::from_millis(16), &vp);
    let mut out = Vec::new();
    build_instances(&snap, g.layout(), 1.6, |_| Some(1.0), &mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].0, 0);
}

#[test]
fn hovered_list_item_dims_the_others() {
    let mut g = Gallery::from_json(GALLERY_JSON).unwrap();
    g.hover_list_item(Some(2));
    let snap = g.snapshot();
    let mut out = Vec::new();
    build_instances(&snap, g.layout(), 1.6, |_| Some(1.0), &mut out);
    for (i, inst) in &out {
        let expected = if *i == 2 { 1.0 } else { FRAME_DIM_OPACITY };
        assert_eq!(inst.params[0], expected);
    }
}

#[test]
fn layout_mismatch_never_panics() {
    let (_, snap) = snapshot();
    let short = carousel_layout(1, MotionConfig::default().carousel_radius);
    let mut out = Vec::new();
    build_instances(&snap, &short, 1.6, |_| Some(1.0), &mut out);
    assert_eq!(out.len(), 1);
}

#[test]
fn backdrop_blends_pairing_when_both_ready() {
    let pairing = TexturePairing { from: 0, to: 2 };
    let b = backdrop_blend(pairing, 0.4, |_| true).unwrap();
    assert_eq!((b.from, b.to), (0, 2));
    assert_eq!(b.uniforms.progress, 0.4);
    assert_eq!(b.uniforms.opacity, BACKDROP_OPACITY);
}

#[test]
fn backdrop_falls_back_to_the_ready_side() {
    let pairing = TexturePairing { from: 0, to: 2 };
    let b = backdrop_blend(pairing, 0.4, |i| i == 0).unwrap();
    assert_eq!((b.from, b.to, b.uniforms.progress), (0, 0, 0.0));
    let b = backdrop_blend(pairing, 0.4, |i| i == 2).unwrap();
    assert_eq!((b.from, b.to, b.uniforms.progress), (2, 2, 1.0));
    assert!(backdrop_blend(pairing, 0.4, |_| false).is_none());
}
