//! Drag-driven sheet controller.
//!
//! Turns a single-pointer drag stream into live visual offset while the
//! pointer moves, and into at most one [`DisplayState`] change when it is
//! released.
//!
//! # Invariants
//!
//! 1. The display state never changes mid-drag; only [`SheetGestureController::on_drag_end`]
//!    and [`SheetGestureController::set_state`] change it.
//! 2. The vertical offset is non-zero only while a session is open and is
//!    always within `±max_offset_px`.
//! 3. Move/end without an open session are no-ops, so duplicate release
//!    events from overlapping mouse and touch delivery are harmless.
//!
//! The release rule has no notion of time: a "flick" is recognised purely by
//! travel distance beyond the (smaller) flick threshold.

use itinera_domain::{DisplayState, PanelGeometry};

/// Distance thresholds in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureThresholds {
    /// Travel strictly above this is a flick.
    pub flick_px: i32,
    /// Travel strictly above this is an intentional slow drag.
    pub drag_px: i32,
    /// Bound for the live offset while dragging.
    pub max_offset_px: i32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            flick_px: 50,
            drag_px: 100,
            max_offset_px: 200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub origin_y: i32,
    pub last_y: i32,
}

impl DragSession {
    fn new(pointer_y: i32) -> Self {
        Self {
            origin_y: pointer_y,
            last_y: pointer_y,
        }
    }

    /// Signed travel; positive when the pointer moved down.
    pub fn delta(&self) -> i32 {
        self.last_y - self.origin_y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
}

impl SwipeDirection {
    fn of(delta: i32) -> Self {
        if delta > 0 { Self::Down } else { Self::Up }
    }
}

/// How a released drag is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseIntent {
    Flick(SwipeDirection),
    Drag(SwipeDirection),
    /// Too short to mean anything; the sheet snaps back.
    Insufficient,
}

impl ReleaseIntent {
    pub fn direction(self) -> Option<SwipeDirection> {
        match self {
            Self::Flick(direction) | Self::Drag(direction) => Some(direction),
            Self::Insufficient => None,
        }
    }
}

/// Classifies a release. Both comparisons are strict, so travel of exactly
/// `flick_px` or exactly `drag_px` is insufficient.
pub fn classify_release(
    delta: i32,
    magnitude: i32,
    thresholds: &GestureThresholds,
) -> ReleaseIntent {
    if magnitude > thresholds.flick_px {
        return ReleaseIntent::Flick(SwipeDirection::of(delta));
    }
    if delta > thresholds.drag_px {
        ReleaseIntent::Drag(SwipeDirection::Down)
    } else if delta < -thresholds.drag_px {
        ReleaseIntent::Drag(SwipeDirection::Up)
    } else {
        ReleaseIntent::Insufficient
    }
}

/// Next resting state for a drag released with the given travel.
pub fn resolve_transition(
    current: DisplayState,
    delta: i32,
    magnitude: i32,
    thresholds: &GestureThresholds,
) -> DisplayState {
    match classify_release(delta, magnitude, thresholds).direction() {
        Some(SwipeDirection::Down) => current.collapsed(),
        Some(SwipeDirection::Up) => current.expanded(),
        None => current,
    }
}

#[derive(Debug, Clone)]
pub struct SheetGestureController {
    state: DisplayState,
    session: Option<DragSession>,
    vertical_offset: i32,
    thresholds: GestureThresholds,
}

impl SheetGestureController {
    pub fn new(initial: DisplayState, thresholds: GestureThresholds) -> Self {
        Self {
            state: initial,
            session: None,
            vertical_offset: 0,
            thresholds,
        }
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn vertical_offset(&self) -> i32 {
        self.vertical_offset
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn thresholds(&self) -> &GestureThresholds {
        &self.thresholds
    }

    pub fn geometry(&self) -> PanelGeometry {
        PanelGeometry {
            height_fraction: self.state.height_fraction(),
            vertical_offset: self.vertical_offset,
        }
    }

    /// Forces the state. Returns the new state if it differs from the old one.
    ///
    /// Mid-drag the last write wins: the session stays open and the next move
    /// re-applies its offset.
    pub fn set_state(&mut self, target: DisplayState) -> Option<DisplayState> {
        let previous = self.state;
        self.state = target;
        self.vertical_offset = 0;
        (previous != target).then_some(target)
    }

    /// Opens a session, replacing any stale one.
    pub fn on_drag_start(&mut self, pointer_y: i32) {
        self.session = Some(DragSession::new(pointer_y));
        self.vertical_offset = 0;
    }

    pub fn on_drag_move(&mut self, pointer_y: i32) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.last_y = pointer_y;
        let limit = self.thresholds.max_offset_px;
        self.vertical_offset = (pointer_y - session.origin_y).clamp(-limit, limit);
    }

    /// Closes the session and applies the release rule. Returns the new state
    /// if the drag changed it.
    pub fn on_drag_end(&mut self) -> Option<DisplayState> {
        let session = self.session.take()?;
        self.vertical_offset = 0;

        let delta = session.delta();
        let next = resolve_transition(self.state, delta, delta.abs(), &self.thresholds);
        let previous = std::mem::replace(&mut self.state, next);
        (previous != next).then_some(next)
    }

    /// Drops the session without evaluating the release rule.
    /// Returns whether a session was open.
    pub fn cancel_drag(&mut self) -> bool {
        self.vertical_offset = 0;
        self.session.take().is_some()
    }
}

impl Default for SheetGestureController {
    fn default() -> Self {
        Self::new(DisplayState::default(), GestureThresholds::default())
    }
}
