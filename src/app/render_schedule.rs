//! Pure functions for calculating animation deadlines.
//!
//! These functions are I/O-free and deterministic. The UI loop uses the
//! returned deadline to schedule wake-ups.

use std::time::{Duration, Instant};

use crate::state::AppState;

/// ~60 FPS while the sheet eases between frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Returns `Some(Instant)` while a sheet transition is running, `None` when
/// nothing animates and the loop can wait for input indefinitely.
pub fn next_animation_deadline(state: &AppState, now: Instant) -> Option<Instant> {
    state
        .sheet
        .is_animating(now)
        .then(|| now + FRAME_INTERVAL)
}
