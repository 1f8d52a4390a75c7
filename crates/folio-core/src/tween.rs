//! Fixed-duration tweens driven by the render loop's clock.

use serde::Deserialize;
use std::time::Duration;

/// Easing curves in the `power1`/`power2` family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    #[default]
    CubicInOut,
}

impl Easing {
    /// Map linear progress `t` in \[0, 1\] onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Result of advancing a tween by one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenStep {
    pub value: f32,
    pub finished: bool,
}

/// Interpolates `from` → `to` over `duration`.
///
/// There is no completion callback: `advance` reports `finished` once and the
/// owner runs its completion logic then. A tween is superseded by simply
/// replacing it.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
            easing,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Linear (un-eased) completion fraction.
    pub fn fraction(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let k = self.easing.apply(self.fraction());
        self.from + (self.to - self.from) * k
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn advance(&mut self, dt: Duration) -> TweenStep {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        TweenStep {
            value: self.value(),
            finished: self.is_finished(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
    ];

    #[test]
    fn easings_pin_their_endpoints() {
        for e in ALL {
            assert!(e.apply(0.0).abs() < 1e-6, "{e:?} at 0");
            assert!((e.apply(1.0) - 1.0).abs() < 1e-6, "{e:?} at 1");
        }
    }

    #[test]
    fn easings_are_monotonic() {
        for e in ALL {
            let mut prev = e.apply(0.0);
            for i in 1..=100 {
                let v = e.apply(i as f32 / 100.0);
                assert!(v >= prev - 1e-6, "{e:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn tween_reports_finished_exactly_at_duration() {
        let mut t = Tween::new(0.0, 10.0, Duration::from_millis(100), Easing::Linear);
        let s = t.advance(Duration::from_millis(50));
        assert!(!s.finished);
        assert!((s.value - 5.0).abs() < 1e-4);
        let s = t.advance(Duration::from_millis(80));
        assert!(s.finished);
        assert_eq!(s.value, 10.0);
    }

    #[test]
    fn zero_duration_finishes_on_first_advance() {
        let mut t = Tween::new(3.0, 7.0, Duration::ZERO, Easing::CubicOut);
        let s = t.advance(Duration::ZERO);
        assert!(s.finished);
        assert_eq!(s.value, 7.0);
    }
}
