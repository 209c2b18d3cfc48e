use std::time::Instant;

use color_eyre::eyre::Result;
use itinera_domain::DisplayState;

use crate::layout::HitArea;
use crate::state::AppState;

/// Interactive regions drawn in the last frame, fed back into hit-testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutput {
    pub handle_area: Option<HitArea>,
    pub indicator_areas: Vec<(DisplayState, HitArea)>,
    /// Full-screen region that swallows every click while a drag is active.
    pub drag_shield: Option<HitArea>,
}

pub trait Renderer {
    fn draw(&mut self, state: &AppState, now: Instant) -> Result<RenderOutput>;
}
