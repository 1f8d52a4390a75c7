//! Maps raw gestures onto navigation and zoom intents.
//!
//! The router holds no animation state; the only thing it remembers is where
//! an active pointer went down, until the swipe resolves or is abandoned.

use crate::constants::TAP_SLOP_PX;
use crate::zoom::ZoomMode;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Enter,
    Escape,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Option<Key> {
        match key {
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "Enter" => Some(Key::Enter),
            "Escape" | "Esc" => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Discrete user actions before mode gating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Key(Key),
    PrevButton,
    NextButton,
    ListSelect(usize),
    FrameClick,
    CloseButton,
    NextProjectButton,
}

/// Logical commands for the carousel and zoom controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Next,
    Prev,
    Select(usize),
    Open,
    Close,
    AdvanceToNext,
}

impl Intent {
    pub fn is_navigation(self) -> bool {
        matches!(self, Intent::Next | Intent::Prev | Intent::Select(_))
    }

    /// Whether this intent may act in `mode`.
    pub fn allowed_in(self, mode: ZoomMode) -> bool {
        match self {
            Intent::Next | Intent::Prev | Intent::Select(_) | Intent::Open => {
                mode == ZoomMode::Browsing
            }
            Intent::Close | Intent::AdvanceToNext => {
                matches!(mode, ZoomMode::Opening | ZoomMode::Viewing)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum SwipeState {
    #[default]
    Idle,
    Tracking {
        start: Vec2,
    },
    // Resolved into an intent or abandoned as a vertical scroll
    Spent,
}

/// Horizontal swipe detection for a single pointer.
#[derive(Clone, Copy, Debug)]
pub struct SwipeTracker {
    state: SwipeState,
    threshold: f32,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            state: SwipeState::Idle,
            threshold,
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, SwipeState::Tracking { .. })
    }

    pub fn begin(&mut self, pos: Vec2) {
        self.state = SwipeState::Tracking { start: pos };
    }

    /// Feed a pointer move; returns an intent once the swipe resolves.
    ///
    /// Nothing is decided while the pointer stays within `TAP_SLOP_PX` of
    /// where it went down. Past that, a mostly vertical movement abandons the
    /// gesture so page scrolling is never read as navigation.
    pub fn update(&mut self, pos: Vec2) -> Option<Intent> {
        let SwipeState::Tracking { start } = self.state else {
            return None;
        };
        let d = pos - start;
        if d.length() <= TAP_SLOP_PX {
            return None;
        }
        if d.y.abs() > d.x.abs() {
            self.state = SwipeState::Spent;
            return None;
        }
        if d.x.abs() > self.threshold {
            self.state = SwipeState::Spent;
            return Some(if d.x > 0.0 { Intent::Prev } else { Intent::Next });
        }
        None
    }

    /// End the gesture. Returns true when it was a tap (never resolved).
    pub fn end(&mut self) -> bool {
        let tap = self.is_tracking();
        self.state = SwipeState::Idle;
        tap
    }

    pub fn cancel(&mut self) {
        self.state = SwipeState::Idle;
    }
}

/// Gesture → intent mapping, gated by the zoom mode.
#[derive(Clone, Copy, Debug)]
pub struct InputRouter {
    swipe: SwipeTracker,
}

impl InputRouter {
    pub fn new(swipe_threshold: f32) -> Self {
        Self {
            swipe: SwipeTracker::new(swipe_threshold),
        }
    }

    pub fn route(&self, gesture: Gesture, mode: ZoomMode) -> Option<Intent> {
        let intent = match gesture {
            Gesture::Key(Key::ArrowRight) | Gesture::NextButton => Intent::Next,
            Gesture::Key(Key::ArrowLeft) | Gesture::PrevButton => Intent::Prev,
            Gesture::Key(Key::Enter) | Gesture::FrameClick => Intent::Open,
            Gesture::Key(Key::Escape) | Gesture::CloseButton => Intent::Close,
            Gesture::ListSelect(i) => Intent::Select(i),
            Gesture::NextProjectButton => Intent::AdvanceToNext,
        };
        if intent.allowed_in(mode) {
            Some(intent)
        } else {
            log::debug!("[input] {:?} suppressed in {:?}", intent, mode);
            None
        }
    }

    pub fn pointer_down(&mut self, pos: Vec2, mode: ZoomMode) {
        if mode == ZoomMode::Browsing {
            self.swipe.begin(pos);
        } else {
            self.swipe.cancel();
        }
    }

    pub fn pointer_move(&mut self, pos: Vec2, mode: ZoomMode) -> Option<Intent> {
        if mode != ZoomMode::Browsing {
            self.swipe.cancel();
            return None;
        }
        self.swipe.update(pos)
    }

    pub fn pointer_cancel(&mut self) {
        self.swipe.cancel();
    }

    /// Release the pointer; a tap on the scene opens the current frame.
    pub fn pointer_up(&mut self, mode: ZoomMode) -> Option<Intent> {
        if self.swipe.end() {
            self.route(Gesture::FrameClick, mode)
        } else {
            None
        }
    }
}
