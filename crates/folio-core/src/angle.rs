//! Angle helpers for the carousel rotation.
//!
//! Rotation targets accumulate freely past `±π`; these helpers only work on
//! the difference between two angles so the stored target never snaps back.

use std::f32::consts::{PI, TAU};

const SAME_ANGLE_EPSILON: f32 = 1e-4;

/// Rotational sense requested by a navigation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

/// Map any angle into `(-π, π]`.
///
/// Values already inside the range are returned untouched, which keeps the
/// function exactly idempotent in floating point.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    if angle > -PI && angle <= PI {
        return angle;
    }
    let mut r = (angle + PI).rem_euclid(TAU) - PI;
    if r <= -PI {
        r += TAU;
    }
    if r > PI {
        r -= TAU;
    }
    if r <= -PI {
        PI
    } else {
        r
    }
}

/// Signed delta from `from` to `to`, forced to turn in `direction`.
///
/// The short arc is taken unless it would spin against `direction`, in which
/// case the long way round is used instead.
#[inline]
pub fn forced_delta(from: f32, to: f32, direction: Direction) -> f32 {
    let mut delta = normalize_angle(to - from);
    // Accumulated float drift must not turn "already there" into a full lap.
    if delta.abs() < SAME_ANGLE_EPSILON {
        return 0.0;
    }
    match direction {
        Direction::Forward if delta < 0.0 => delta += TAU,
        Direction::Backward if delta > 0.0 => delta -= TAU,
        _ => {}
    }
    delta
}

/// Angle at which the carousel group shows `index` to the viewer.
#[inline]
pub fn slot_angle(index: usize, count: usize, offset: f32) -> f32 {
    if count == 0 {
        return offset;
    }
    index as f32 * (TAU / count as f32) + offset
}

/// Direction of the shorter way round from `from` to `to` on a ring of `count`.
///
/// Returns `None` when the indices coincide. An exact half-turn on an even
/// ring goes forward.
#[inline]
pub fn shortest_direction(from: usize, to: usize, count: usize) -> Option<Direction> {
    if count == 0 {
        return None;
    }
    let steps = (to as i64 - from as i64).rem_euclid(count as i64) as usize;
    match steps {
        0 => None,
        s if s * 2 <= count => Some(Direction::Forward),
        _ => Some(Direction::Backward),
    }
}
