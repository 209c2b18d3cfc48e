use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use itinera_app::layout::HitArea;
use itinera_domain::DisplayState;

use super::atoms::state_chip;

const LEFT_PAD: u16 = 1;
const GAP: u16 = 1;

/// One chip per display state. Clicking a chip requests that state.
pub struct SheetIndicators;

impl SheetIndicators {
    /// Draws the chips in `area` (one row) and returns where each landed.
    /// Chips that do not fit are skipped.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        current: DisplayState,
    ) -> Vec<(DisplayState, HitArea)> {
        let placed = Self::layout(area);

        let mut spans = vec![Span::raw(" ".repeat(usize::from(LEFT_PAD)))];
        for (i, (state, _)) in placed.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(usize::from(GAP))));
            }
            spans.push(state_chip(state.label(), *state == current));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);

        placed
    }

    pub fn layout(area: Rect) -> Vec<(DisplayState, HitArea)> {
        if area.height == 0 {
            return Vec::new();
        }

        let right = area.x.saturating_add(area.width);
        let mut x = area.x.saturating_add(LEFT_PAD);
        let mut placed = Vec::with_capacity(DisplayState::ALL.len());
        for state in DisplayState::ALL {
            let width = u16::try_from(state.label().width()).unwrap_or(u16::MAX) + 2;
            if x.saturating_add(width) > right {
                break;
            }
            placed.push((state, HitArea::new(x, area.y, width, 1)));
            x = x.saturating_add(width + GAP);
        }
        placed
    }
}
