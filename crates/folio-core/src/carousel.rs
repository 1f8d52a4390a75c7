//! Carousel transition engine.
//!
//! Owns which artwork is current, the rotation that brings it to the front and
//! the cross-fade between the outgoing and incoming textures. Rotation and
//! cross-fade run on separate clocks: the fade is a fixed-duration tween, the
//! visible rotation damps toward an eased target every tick.

use crate::angle::{forced_delta, shortest_direction, slot_angle, Direction};
use crate::config::MotionConfig;
use crate::constants::CAROUSEL_INITIAL_ROTATION_OFFSET;
use crate::error::{GalleryError, Result};
use crate::snapshot::GalleryEvent;
use crate::textures::TexturePairing;
use crate::tween::{Easing, Tween};
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Debug)]
struct Transition {
    to: usize,
    fade: Tween,
}

pub struct CarouselEngine {
    len: usize,
    duration: Duration,
    easing: Easing,
    damping: f32,
    epsilon: f32,

    current_index: usize,
    transition: Option<Transition>,
    cross_fade: f32,
    pairing: TexturePairing,

    // Destination after every navigation so far; accumulates past ±π.
    target_rotation: f32,
    // Tweened toward `target_rotation`; the damped rotation chases this.
    eased_target: f32,
    rotation_tween: Option<Tween>,
    rotation: f32,

    outbox: SmallVec<[GalleryEvent; 4]>,
}

impl CarouselEngine {
    pub fn new(len: usize, config: &MotionConfig) -> Self {
        Self {
            len,
            duration: config.carousel_duration(),
            easing: config.carousel_easing,
            damping: config.rotation_damping,
            epsilon: config.rotation_epsilon,
            current_index: 0,
            transition: None,
            cross_fade: 0.0,
            pairing: TexturePairing::settled(0),
            target_rotation: CAROUSEL_INITIAL_ROTATION_OFFSET,
            eased_target: CAROUSEL_INITIAL_ROTATION_OFFSET,
            rotation_tween: None,
            rotation: CAROUSEL_INITIAL_ROTATION_OFFSET,
            outbox: SmallVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn pending_index(&self) -> Option<usize> {
        self.transition.as_ref().map(|t| t.to)
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// True while the visible rotation has not yet settled on its destination.
    pub fn is_rotating(&self) -> bool {
        self.rotation_tween.is_some() || self.rotation != self.target_rotation
    }

    pub fn rotation_angle(&self) -> f32 {
        self.rotation
    }

    pub fn target_rotation(&self) -> f32 {
        self.target_rotation
    }

    pub fn cross_fade_progress(&self) -> f32 {
        self.cross_fade
    }

    pub fn texture_pairing(&self) -> TexturePairing {
        self.pairing
    }

    fn check_navigable(&self, index: usize) -> Result<()> {
        if self.len <= 1 {
            log::warn!("[carousel] navigation ignored: {} artwork(s)", self.len);
            return Err(GalleryError::DegenerateCatalog { len: self.len });
        }
        if index >= self.len {
            log::warn!("[carousel] index {} out of range (len {})", index, self.len);
            return Err(GalleryError::InvalidIndex {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Start (or retarget) a transition to `target`, spinning in `direction`.
    ///
    /// A call during an in-flight transition replaces it: the fade restarts
    /// from 0 for the new pairing. When `direction` opposes the current spin
    /// the rotation is recomputed from the angle on screen, so the carousel
    /// turns back the way it was asked. With `skip` the final state is
    /// applied immediately.
    pub fn navigate(&mut self, target: usize, direction: Direction, skip: bool) -> Result<()> {
        self.check_navigable(target)?;
        if target == self.current_index && self.transition.is_none() {
            return Ok(());
        }

        let from = self.current_index;
        if let Some(prev) = self.pending_index() {
            log::debug!("[carousel] retarget {} -> {} (was {})", from, target, prev);
        } else {
            log::debug!(
                "[carousel] navigate {} -> {} dir={:+} skip={}",
                from,
                target,
                direction.sign(),
                skip
            );
        }

        // Reversing a spin restarts from the visible angle. Continuing one
        // builds on the destination, so a one-way sequence never decreases it.
        let heading = self.target_rotation - self.rotation;
        let reversing = heading * direction.sign() < 0.0;
        let (base, tween_from) = if reversing {
            (self.rotation, self.rotation)
        } else {
            (self.target_rotation, self.eased_target)
        };
        let desired = slot_angle(target, self.len, CAROUSEL_INITIAL_ROTATION_OFFSET);
        self.target_rotation = base + forced_delta(base, desired, direction);

        self.pairing = TexturePairing { from, to: target };
        self.cross_fade = 0.0;

        if skip {
            self.rotation_tween = None;
            self.eased_target = self.target_rotation;
            self.rotation = self.target_rotation;
            self.commit(target);
            return Ok(());
        }

        self.eased_target = tween_from;
        self.rotation_tween = Some(Tween::new(
            tween_from,
            self.target_rotation,
            self.duration,
            self.easing,
        ));
        self.transition = Some(Transition {
            to: target,
            fade: Tween::new(0.0, 1.0, self.duration, self.easing),
        });
        Ok(())
    }

    pub fn next(&mut self, skip: bool) -> Result<()> {
        let target = (self.current_index + 1) % self.len.max(1);
        self.navigate(target, Direction::Forward, skip)
    }

    pub fn prev(&mut self, skip: bool) -> Result<()> {
        let len = self.len.max(1);
        let target = (self.current_index + len - 1) % len;
        self.navigate(target, Direction::Backward, skip)
    }

    /// Navigate to `index` the shorter way round from the current artwork.
    pub fn select(&mut self, index: usize) -> Result<()> {
        self.check_navigable(index)?;
        match shortest_direction(self.current_index, index, self.len) {
            Some(direction) => self.navigate(index, direction, false),
            None => Ok(()),
        }
    }

    fn commit(&mut self, index: usize) {
        self.current_index = index;
        self.transition = None;
        self.cross_fade = 0.0;
        self.pairing = TexturePairing::settled(index);
        self.outbox.push(GalleryEvent::CurrentChanged { index });
        log::debug!("[carousel] commit {}", index);
    }

    /// Advance rotation and cross-fade by one render tick.
    pub fn tick(&mut self, dt: Duration, out_events: &mut Vec<GalleryEvent>) {
        if let Some(tween) = &mut self.rotation_tween {
            let step = tween.advance(dt);
            self.eased_target = step.value;
            if step.finished {
                self.rotation_tween = None;
            }
        }
        let delta = self.eased_target - self.rotation;
        if delta.abs() <= self.epsilon {
            self.rotation = self.eased_target;
        } else {
            self.rotation += delta * self.damping;
        }

        let mut committed = None;
        if let Some(t) = &mut self.transition {
            let step = t.fade.advance(dt);
            self.cross_fade = step.value.clamp(0.0, 1.0);
            if step.finished {
                committed = Some(t.to);
            }
        }
        if let Some(index) = committed {
            self.commit(index);
        }

        out_events.extend(self.outbox.drain(..));
    }
}
