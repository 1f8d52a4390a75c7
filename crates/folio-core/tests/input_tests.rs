use folio_core::*;
use glam::Vec2;

const THRESHOLD: f32 = 50.0;

#[test]
fn dom_keys_map_to_known_keys() {
    assert_eq!(Key::from_dom("ArrowRight"), Some(Key::ArrowRight));
    assert_eq!(Key::from_dom("ArrowLeft"), Some(Key::ArrowLeft));
    assert_eq!(Key::from_dom("Enter"), Some(Key::Enter));
    assert_eq!(Key::from_dom("Escape"), Some(Key::Escape));
    assert_eq!(Key::from_dom("a"), None);
    assert_eq!(Key::from_dom(" "), None);
}

#[test]
fn browsing_routes_navigation_and_open() {
    let r = InputRouter::new(THRESHOLD);
    let m = ZoomMode::Browsing;
    assert_eq!(r.route(Gesture::Key(Key::ArrowRight), m), Some(Intent::Next));
    assert_eq!(r.route(Gesture::NextButton, m), Some(Intent::Next));
    assert_eq!(r.route(Gesture::Key(Key::ArrowLeft), m), Some(Intent::Prev));
    assert_eq!(r.route(Gesture::PrevButton, m), Some(Intent::Prev));
    assert_eq!(r.route(Gesture::ListSelect(2), m), Some(Intent::Select(2)));
    assert_eq!(r.route(Gesture::Key(Key::Enter), m), Some(Intent::Open));
    assert_eq!(r.route(Gesture::FrameClick, m), Some(Intent::Open));
    assert_eq!(r.route(Gesture::Key(Key::Escape), m), None);
    assert_eq!(r.route(Gesture::NextProjectButton, m), None);
}

#[test]
fn detail_view_suppresses_navigation() {
    let r = InputRouter::new(THRESHOLD);
    for m in [ZoomMode::Opening, ZoomMode::Viewing] {
        assert_eq!(r.route(Gesture::Key(Key::ArrowRight), m), None);
        assert_eq!(r.route(Gesture::Key(Key::ArrowLeft), m), None);
        assert_eq!(r.route(Gesture::ListSelect(0), m), None);
        assert_eq!(r.route(Gesture::Key(Key::Enter), m), None);
        assert_eq!(r.route(Gesture::Key(Key::Escape), m), Some(Intent::Close));
        assert_eq!(r.route(Gesture::CloseButton, m), Some(Intent::Close));
        assert_eq!(
            r.route(Gesture::NextProjectButton, m),
            Some(Intent::AdvanceToNext)
        );
    }
}

#[test]
fn closing_suppresses_everything() {
    let r = InputRouter::new(THRESHOLD);
    for g in [
        Gesture::Key(Key::ArrowRight),
        Gesture::Key(Key::Escape),
        Gesture::FrameClick,
        Gesture::NextProjectButton,
        Gesture::ListSelect(1),
    ] {
        assert_eq!(r.route(g, ZoomMode::Closing), None, "{g:?}");
    }
}

#[test]
fn swipe_left_goes_next_and_right_goes_prev() {
    let mut s = SwipeTracker::new(THRESHOLD);
    s.begin(Vec2::new(200.0, 100.0));
    assert_eq!(s.update(Vec2::new(170.0, 102.0)), None);
    assert_eq!(s.update(Vec2::new(140.0, 105.0)), Some(Intent::Next));

    let mut s = SwipeTracker::new(THRESHOLD);
    s.begin(Vec2::new(100.0, 100.0));
    assert_eq!(s.update(Vec2::new(160.0, 90.0)), Some(Intent::Prev));
}

#[test]
fn swipe_resolves_only_once() {
    let mut s = SwipeTracker::new(THRESHOLD);
    s.begin(Vec2::ZERO);
    assert_eq!(s.update(Vec2::new(-60.0, 0.0)), Some(Intent::Next));
    assert_eq!(s.update(Vec2::new(-200.0, 0.0)), None);
    assert!(!s.end(), "resolved swipe is not a tap");
}

#[test]
fn vertical_movement_abandons_the_swipe() {
    let mut s = SwipeTracker::new(THRESHOLD);
    s.begin(Vec2::ZERO);
    assert_eq!(s.update(Vec2::new(10.0, 40.0)), None);
    assert_eq!(s.update(Vec2::new(-120.0, 40.0)), None);
    assert!(!s.is_tracking());
}

#[test]
fn short_move_is_not_a_swipe() {
    let mut s = SwipeTracker::new(THRESHOLD);
    s.begin(Vec2::ZERO);
    assert_eq!(s.update(Vec2::new(50.0, 0.0)), None);
    assert!(s.is_tracking());
    assert!(s.end());
}

#[test]
fn update_without_begin_is_ignored() {
    let mut s = SwipeTracker::new(THRESHOLD);
    assert_eq!(s.update(Vec2::new(-500.0, 0.0)), None);
    assert!(!s.end());
}

#[test]
fn router_tap_opens_only_while_browsing() {
    let mut r = InputRouter::new(THRESHOLD);
    r.pointer_down(Vec2::new(10.0, 10.0), ZoomMode::Browsing);
    assert_eq!(r.pointer_up(ZoomMode::Browsing), Some(Intent::Open));

    r.pointer_down(Vec2::new(10.0, 10.0), ZoomMode::Viewing);
    assert_eq!(r.pointer_up(ZoomMode::Viewing), None);
}

#[test]
fn router_ignores_swipes_outside_browsing() {
    let mut r = InputRouter::new(THRESHOLD);
    r.pointer_down(Vec2::ZERO, ZoomMode::Browsing);
    assert_eq!(r.pointer_move(Vec2::new(-80.0, 0.0), ZoomMode::Opening), None);
    assert_eq!(r.pointer_up(ZoomMode::Opening), None);
}

#[test]
fn router_swipe_then_release_is_not_a_tap() {
    let mut r = InputRouter::new(THRESHOLD);
    r.pointer_down(Vec2::ZERO, ZoomMode::Browsing);
    assert_eq!(
        r.pointer_move(Vec2::new(80.0, 5.0), ZoomMode::Browsing),
        Some(Intent::Prev)
    );
    assert_eq!(r.pointer_up(ZoomMode::Browsing), None);
}

#[test]
fn cancelled_pointer_is_neither_swipe_nor_tap() {
    let mut r = InputRouter::new(THRESHOLD);
    r.pointer_down(Vec2::ZERO, ZoomMode::Browsing);
    r.pointer_cancel();
    assert_eq!(r.pointer_move(Vec2::new(-90.0, 0.0), ZoomMode::Browsing), None);
    assert_eq!(r.pointer_up(ZoomMode::Browsing), None);
}

#[test]
fn jitter_within_slop_still_counts_as_a_tap() {
    let mut r = InputRouter::new(THRESHOLD);
    r.pointer_down(Vec2::new(100.0, 100.0), ZoomMode::Browsing);
    assert_eq!(r.pointer_move(Vec2::new(100.0, 101.0), ZoomMode::Browsing), None);
    assert_eq!(r.pointer_move(Vec2::new(99.0, 104.0), ZoomMode::Browsing), None);
    assert_eq!(r.pointer_up(ZoomMode::Browsing), Some(Intent::Open));
}

#[test]
fn vertical_drag_past_slop_is_not_a_tap() {
    let mut s = SwipeTracker::new(THRESHOLD);
    s.begin(Vec2::ZERO);
    assert_eq!(s.update(Vec2::new(0.0, 3.0)), None);
    assert!(s.is_tracking());
    assert_eq!(s.update(Vec2::new(2.0, 20.0)), None);
    assert!(!s.is_tracking());
    assert!(!s.end());
}

#[test]
fn tap_slop_is_well_inside_the_swipe_threshold() {
    use folio_core::constants::{SWIPE_THRESHOLD_PX, TAP_SLOP_PX};
    assert!(TAP_SLOP_PX > 0.0);
    assert!(TAP_SLOP_PX * 2.0 < SWIPE_THRESHOLD_PX);
}
