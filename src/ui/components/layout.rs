use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use itinera_app::layout::{FOOTER_ROWS, HEADER_ROWS, PanelLayout};
use itinera_app::ports::RenderOutput;
use itinera_app::state::AppState;

use super::bottom_sheet::BottomSheet;
use super::footer::Footer;
use super::header::Header;
use super::overlay::hit_area;
use super::side_by_side::SideBySide;

/// Top-level view. Picks side-by-side or sheet-over-backdrop from the
/// viewport class and reports the interactive regions it drew.
pub struct AdaptivePanelView;

impl AdaptivePanelView {
    pub fn render(frame: &mut Frame, state: &AppState, now: Instant) -> RenderOutput {
        let area = frame.area();

        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(HEADER_ROWS),
            Constraint::Min(0),
            Constraint::Length(FOOTER_ROWS),
        ])
        .areas(area);

        Header::render(frame, header_area, state);

        let mut output = match state.panel_layout() {
            PanelLayout::SideBySide => {
                SideBySide::render(frame, body_area, state);
                RenderOutput::default()
            }
            PanelLayout::SheetOverBackdrop => BottomSheet::render(frame, body_area, state, now),
        };

        Footer::render(frame, footer_area, state);

        if state.panel_layout() == PanelLayout::SheetOverBackdrop && state.sheet.is_dragging() {
            output.drag_shield = Some(hit_area(area));
        }

        output
    }
}
