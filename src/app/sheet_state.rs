use std::time::{Duration, Instant};

use itinera_domain::DisplayState;

use crate::config::SheetConfig;
use crate::gesture::SheetGestureController;
use crate::sheet_transition::{SheetFrame, SheetTransition};

/// The gesture controller plus the eased transition that presents its
/// geometry. One instance per mounted panel.
#[derive(Debug, Clone)]
pub struct SheetState {
    pub controller: SheetGestureController,
    transition: Option<SheetTransition>,
    transition_duration: Duration,
    row_px: u16,
}

impl SheetState {
    pub fn new(config: &SheetConfig) -> Self {
        Self {
            controller: SheetGestureController::new(config.default_state, config.thresholds()),
            transition: None,
            transition_duration: config.transition_duration(),
            row_px: config.row_px.max(1),
        }
    }

    pub fn display_state(&self) -> DisplayState {
        self.controller.state()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    pub fn row_px(&self) -> u16 {
        self.row_px
    }

    /// Pointer Y in device pixels for a terminal row.
    pub fn row_to_px(&self, row: u16) -> i32 {
        i32::from(row).saturating_mul(i32::from(self.row_px))
    }

    /// Frame to draw at `now`. While dragging the sheet follows the pointer
    /// with no easing.
    pub fn displayed_frame(&self, now: Instant) -> SheetFrame {
        let target = SheetFrame::from(self.controller.geometry());
        if self.controller.is_dragging() {
            return target;
        }
        self.transition
            .map_or(target, |transition| transition.sample(now))
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.controller.is_dragging()
            && self
                .transition
                .is_some_and(|transition| !transition.is_finished(now))
    }

    /// Drops a finished transition. Returns true if one was dropped.
    pub fn settle(&mut self, now: Instant) -> bool {
        if self.transition.is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
            return true;
        }
        false
    }

    pub fn start_drag(&mut self, pointer_y: i32) {
        self.transition = None;
        self.controller.on_drag_start(pointer_y);
    }

    pub fn move_drag(&mut self, pointer_y: i32) {
        self.controller.on_drag_move(pointer_y);
    }

    /// Releases the drag and eases from the released frame to the new rest.
    pub fn end_drag(&mut self, now: Instant) -> Option<DisplayState> {
        if !self.controller.is_dragging() {
            return None;
        }
        let released = self.displayed_frame(now);
        let changed = self.controller.on_drag_end();
        self.begin_transition(released, now);
        changed
    }

    /// Escape: drop the drag and ease back to where it started.
    pub fn cancel_drag(&mut self, now: Instant) -> bool {
        if !self.controller.is_dragging() {
            return false;
        }
        let released = self.displayed_frame(now);
        self.controller.cancel_drag();
        self.begin_transition(released, now);
        true
    }

    /// Viewport left the sheet layout: drop the drag with nothing to animate.
    pub fn discard_drag(&mut self) -> bool {
        self.transition = None;
        self.controller.cancel_drag()
    }

    pub fn set_state(&mut self, target: DisplayState, now: Instant) -> Option<DisplayState> {
        let from = self.displayed_frame(now);
        let changed = self.controller.set_state(target);
        if !self.controller.is_dragging() {
            self.begin_transition(from, now);
        }
        changed
    }

    fn begin_transition(&mut self, from: SheetFrame, now: Instant) {
        let to = SheetFrame::from(self.controller.geometry());
        self.transition = (from != to && !self.transition_duration.is_zero())
            .then(|| SheetTransition::new(from, to, now, self.transition_duration));
    }
}

impl Default for SheetState {
    fn default() -> Self {
        Self::new(&SheetConfig::default())
    }
}
