//! Fixed-duration eased transition between two sheet frames.
//!
//! Pure and time-injected: callers pass `now`, nothing here reads the clock.

use std::time::{Duration, Instant};

use itinera_domain::PanelGeometry;

/// What the sheet looks like at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetFrame {
    pub height_fraction: f32,
    pub offset_px: i32,
}

impl SheetFrame {
    fn lerp(self, to: Self, t: f32) -> Self {
        let offset = self.offset_px as f32 + (to.offset_px - self.offset_px) as f32 * t;
        Self {
            height_fraction: self.height_fraction + (to.height_fraction - self.height_fraction) * t,
            offset_px: offset.round() as i32,
        }
    }
}

impl From<PanelGeometry> for SheetFrame {
    fn from(geometry: PanelGeometry) -> Self {
        Self {
            height_fraction: geometry.height_fraction,
            offset_px: geometry.vertical_offset,
        }
    }
}

/// Ease-out cubic: fast start, gentle landing.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetTransition {
    from: SheetFrame,
    to: SheetFrame,
    started_at: Instant,
    duration: Duration,
}

impl SheetTransition {
    pub fn new(from: SheetFrame, to: SheetFrame, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn sample(&self, now: Instant) -> SheetFrame {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, ease_out_cubic(progress))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}
