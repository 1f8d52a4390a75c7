mod common;

use common::*;
use folio_core::constants::CAROUSEL_INITIAL_ROTATION_OFFSET;
use folio_core::*;

#[test]
fn starts_idle_on_first_artwork() {
    let e = engine(3);
    assert_eq!(e.current_index(), 0);
    assert_eq!(e.pending_index(), None);
    assert_eq!(e.cross_fade_progress(), 0.0);
    assert_eq!(e.texture_pairing(), TexturePairing::settled(0));
    assert_eq!(e.rotation_angle(), CAROUSEL_INITIAL_ROTATION_OFFSET);
    assert!(!e.is_rotating());
}

#[test]
fn forward_navigation_never_decreases_target() {
    let mut e = engine(5);
    let mut sink = Vec::new();
    let mut prev = e.target_rotation();
    for (step, target) in [1, 3, 0, 4, 4, 2, 1, 0, 3].into_iter().enumerate() {
        let _ = e.navigate(target, Direction::Forward, false);
        assert!(
            e.target_rotation() >= prev,
            "step {step}: {} < {prev}",
            e.target_rotation()
        );
        prev = e.target_rotation();
        for _ in 0..(step * 7) {
            e.tick(DT, &mut sink);
        }
    }
}

#[test]
fn backward_navigation_never_increases_target() {
    let mut e = engine(5);
    let mut sink = Vec::new();
    let mut prev = e.target_rotation();
    for (step, target) in [4, 2, 3, 0, 1, 1, 4].into_iter().enumerate() {
        let _ = e.navigate(target, Direction::Backward, false);
        assert!(e.target_rotation() <= prev, "step {step}");
        prev = e.target_rotation();
        for _ in 0..(step * 11) {
            e.tick(DT, &mut sink);
        }
    }
}

#[test]
fn full_lap_of_next_advances_one_turn() {
    let mut e = engine(4);
    let mut sink = Vec::new();
    let start = e.target_rotation();
    for _ in 0..4 {
        e.next(false).unwrap();
        settle_transition(&mut e, &mut sink);
    }
    assert_eq!(e.current_index(), 0);
    let turned = e.target_rotation() - start;
    assert!((turned - std::f32::consts::TAU).abs() < 1e-4, "turned {turned}");
}

#[test]
fn wrapping_from_last_to_first_keeps_spinning_forward() {
    let mut e = engine(3);
    let mut sink = Vec::new();
    e.navigate(2, Direction::Backward, true).unwrap();
    let before = e.target_rotation();
    e.next(false).unwrap();
    assert_eq!(e.pending_index(), Some(0));
    assert!(e.target_rotation() > before);
    settle_transition(&mut e, &mut sink);
    assert_eq!(e.current_index(), 0);
}

#[test]
fn retarget_replaces_pending_transition() {
    let mut e = engine(4);
    let mut sink = Vec::new();
    e.navigate(1, Direction::Forward, false).unwrap();
    for _ in 0..10 {
        e.tick(DT, &mut sink);
    }
    assert!(e.cross_fade_progress() > 0.0);

    e.navigate(2, Direction::Forward, false).unwrap();
    assert_eq!(e.pending_index(), Some(2));
    assert_eq!(e.cross_fade_progress(), 0.0);
    let pairing = e.texture_pairing();
    assert_eq!(pairing, TexturePairing { from: 0, to: 2 });
    assert_ne!(pairing.from, 1);
    assert_ne!(pairing.to, 1);

    settle_transition(&mut e, &mut sink);
    assert_eq!(e.current_index(), 2);
    assert_eq!(
        sink,
        vec![GalleryEvent::CurrentChanged { index: 2 }],
        "the superseded target must never commit"
    );
}

#[test]
fn retarget_rotation_continues_from_in_flight_angle() {
    let mut e = engine(4);
    let mut sink = Vec::new();
    e.navigate(1, Direction::Forward, false).unwrap();
    for _ in 0..20 {
        e.tick(DT, &mut sink);
    }
    let mid = e.rotation_angle();
    e.navigate(2, Direction::Forward, false).unwrap();
    e.tick(DT, &mut sink);
    // no jump back to the rest angle
    assert!(e.rotation_angle() >= mid);
}

#[test]
fn commit_settles_pairing_and_is_a_fixed_point() {
    let mut e = engine(3);
    let mut events = Vec::new();
    e.navigate(1, Direction::Forward, false).unwrap();
    settle_transition(&mut e, &mut events);
    assert_eq!(e.texture_pairing(), TexturePairing::settled(1));
    assert_eq!(e.cross_fade_progress(), 0.0);
    assert_eq!(events, vec![GalleryEvent::CurrentChanged { index: 1 }]);

    settle_rotation(&mut e);
    let angle = e.rotation_angle();
    assert_eq!(angle, e.target_rotation());

    events.clear();
    for _ in 0..50 {
        e.tick(DT, &mut events);
    }
    assert!(events.is_empty());
    assert_eq!(e.current_index(), 1);
    assert_eq!(e.pending_index(), None);
    assert_eq!(e.texture_pairing(), TexturePairing::settled(1));
    assert_eq!(e.cross_fade_progress(), 0.0);
    assert_eq!(e.rotation_angle(), angle);
}

#[test]
fn cross_fade_stays_within_unit_range() {
    let mut e = engine(3);
    let mut sink = Vec::new();
    e.navigate(2, Direction::Forward, false).unwrap();
    while e.is_transitioning() {
        let p = e.cross_fade_progress();
        assert!((0.0..=1.0).contains(&p));
        e.tick(DT, &mut sink);
    }
}

#[test]
fn skip_mode_applies_final_state_immediately() {
    let mut e = engine(4);
    let mut events = Vec::new();
    e.navigate(3, Direction::Forward, true).unwrap();
    assert_eq!(e.current_index(), 3);
    assert_eq!(e.pending_index(), None);
    assert_eq!(e.cross_fade_progress(), 0.0);
    assert_eq!(e.texture_pairing(), TexturePairing::settled(3));
    assert_eq!(e.rotation_angle(), e.target_rotation());
    assert!(!e.is_rotating());

    e.tick(DT, &mut events);
    assert_eq!(events, vec![GalleryEvent::CurrentChanged { index: 3 }]);
}

#[test]
fn skip_mode_supersedes_in_flight_transition() {
    let mut e = engine(4);
    let mut sink = Vec::new();
    e.navigate(1, Direction::Forward, false).unwrap();
    e.tick(DT, &mut sink);
    e.navigate(2, Direction::Forward, true).unwrap();
    assert_eq!(e.current_index(), 2);
    assert!(!e.is_transitioning());
    assert!(!e.is_rotating());
}

#[test]
fn navigating_to_current_index_while_idle_is_a_no_op() {
    let mut e = engine(3);
    let before = e.target_rotation();
    e.navigate(0, Direction::Forward, false).unwrap();
    assert!(!e.is_transitioning());
    assert_eq!(e.target_rotation(), before);
}

#[test]
fn invalid_index_is_rejected_without_mutation() {
    let mut e = engine(3);
    let before = e.target_rotation();
    let err = e.navigate(7, Direction::Forward, false).unwrap_err();
    assert!(matches!(err, GalleryError::InvalidIndex { index: 7, len: 3 }));
    assert_eq!(e.current_index(), 0);
    assert_eq!(e.pending_index(), None);
    assert_eq!(e.target_rotation(), before);
    assert!(e.select(3).is_err());
}

#[test]
fn single_artwork_cannot_navigate() {
    let mut e = engine(1);
    assert!(matches!(
        e.next(false),
        Err(GalleryError::DegenerateCatalog { len: 1 })
    ));
    assert!(e.prev(true).is_err());
    assert!(e.select(0).is_err());
    assert_eq!(e.current_index(), 0);
    assert!(!e.is_transitioning());
}

#[test]
fn select_picks_shorter_arc_on_four_items() {
    let mut e = engine(4);
    let start = e.target_rotation();
    e.select(3).unwrap();
    assert!(e.target_rotation() < start, "0 -> 3 should spin backward");

    let mut e = engine(4);
    e.select(1).unwrap();
    assert!(e.target_rotation() > start, "0 -> 1 should spin forward");
}

#[test]
fn select_current_index_is_ignored() {
    let mut e = engine(4);
    e.select(0).unwrap();
    assert!(!e.is_transitioning());
}

#[test]
fn scenario_a_next_commits_after_fade() {
    let mut e = engine(3);
    let mut events = Vec::new();
    e.navigate(1, Direction::Forward, false).unwrap();
    assert_eq!(e.texture_pairing(), TexturePairing { from: 0, to: 1 });
    let ticks = settle_transition(&mut e, &mut events);
    assert!(ticks > 1, "fade should take several ticks");
    assert_eq!(e.current_index(), 1);
    assert_eq!(e.texture_pairing(), TexturePairing::settled(1));
}

#[test]
fn scenario_b_select_wraps_backward() {
    let mut e = engine(3);
    let mut events = Vec::new();
    let start = e.target_rotation();
    e.select(2).unwrap();
    assert!(e.target_rotation() < start, "direction -1 expected");
    assert_eq!(e.pending_index(), Some(2));
    settle_transition(&mut e, &mut events);
    assert_eq!(e.current_index(), 2);
}

#[test]
fn rotation_converges_to_target() {
    let mut e = engine(3);
    e.next(false).unwrap();
    settle_rotation(&mut e);
    let expected =
        CAROUSEL_INITIAL_ROTATION_OFFSET + std::f32::consts::TAU / 3.0;
    assert!((e.rotation_angle() - expected).abs() < 1e-5);
}

#[test]
fn reversing_mid_spin_turns_back_immediately() {
    let mut e = engine(8);
    let mut sink = Vec::new();
    e.navigate(4, Direction::Forward, false).unwrap();
    for _ in 0..36 {
        e.tick(DT, &mut sink);
    }
    let before = e.rotation_angle();
    e.navigate(3, Direction::Backward, false).unwrap();

    let desired = folio_core::angle::slot_angle(3, 8, CAROUSEL_INITIAL_ROTATION_OFFSET);
    assert!(e.target_rotation() < before, "target must lie behind the visible angle");
    assert!(normalize_angle(e.target_rotation() - desired).abs() < 1e-4);

    let mut last = before;
    for tick in 0..10 {
        e.tick(DT, &mut sink);
        assert!(
            e.rotation_angle() <= last,
            "tick {tick}: spun forward {last} -> {}",
            e.rotation_angle()
        );
        last = e.rotation_angle();
    }
    assert!(last < before);

    settle_rotation(&mut e);
    assert_eq!(e.current_index(), 3);
    assert!(normalize_angle(e.rotation_angle() - desired).abs() < 1e-3);
}

#[test]
fn continuing_a_spin_keeps_the_target_monotonic() {
    let mut e = engine(5);
    let mut sink = Vec::new();
    e.navigate(3, Direction::Forward, false).unwrap();
    for _ in 0..7 {
        e.tick(DT, &mut sink);
    }
    let first = e.target_rotation();
    e.navigate(1, Direction::Forward, false).unwrap();
    assert!(e.target_rotation() >= first);
    for _ in 0..5 {
        let prev = e.rotation_angle();
        e.tick(DT, &mut sink);
        assert!(e.rotation_angle() >= prev);
    }
}
