use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use itinera_app::keybindings::{DRAG_KEYS, GLOBAL_KEYS, SHEET_KEYS, idx};
use itinera_app::layout::PanelLayout;
use itinera_app::state::AppState;

use super::molecules::hint_line;

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let hints = Self::context_hints(state);
        frame.render_widget(Paragraph::new(Self::build_line(&hints)), area);
    }

    /// Hint ordering: Actions → Navigation → Close/Cancel → Quit
    pub fn context_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
        match state.panel_layout() {
            PanelLayout::SideBySide => vec![GLOBAL_KEYS[idx::global::QUIT].as_hint()],
            PanelLayout::SheetOverBackdrop if state.sheet.is_dragging() => vec![
                DRAG_KEYS[idx::drag::RELEASE].as_hint(),
                DRAG_KEYS[idx::drag::ESC_CANCEL].as_hint(),
                GLOBAL_KEYS[idx::global::QUIT].as_hint(),
            ],
            PanelLayout::SheetOverBackdrop => vec![
                SHEET_KEYS[idx::sheet::DRAG].as_hint(),
                SHEET_KEYS[idx::sheet::EXPAND].as_hint(),
                SHEET_KEYS[idx::sheet::COLLAPSE].as_hint(),
                SHEET_KEYS[idx::sheet::PICK_STATE].as_hint(),
                GLOBAL_KEYS[idx::global::QUIT].as_hint(),
            ],
        }
    }

    fn build_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
        hint_line(hints)
    }
}
