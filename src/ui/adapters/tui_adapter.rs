use std::time::Instant;

use color_eyre::eyre::Result;

use itinera_app::ports::{RenderOutput, Renderer};
use itinera_app::state::AppState;

use crate::components::layout::AdaptivePanelView;
use crate::tui::TuiRunner;

pub struct TuiAdapter<'a> {
    tui: &'a mut TuiRunner,
}

impl<'a> TuiAdapter<'a> {
    pub fn new(tui: &'a mut TuiRunner) -> Self {
        Self { tui }
    }
}

impl Renderer for TuiAdapter<'_> {
    fn draw(&mut self, state: &AppState, now: Instant) -> Result<RenderOutput> {
        let mut output = RenderOutput::default();
        self.tui.terminal().draw(|frame| {
            output = AdaptivePanelView::render(frame, state, now);
        })?;
        Ok(output)
    }
}
