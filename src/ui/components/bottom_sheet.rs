use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use itinera_app::layout::sheet_area;
use itinera_app::ports::RenderOutput;
use itinera_app::state::AppState;

use super::itinerary_list::ItineraryList;
use super::map_view::MapView;
use super::overlay::{clear_area, hit_area, rect_of};
use super::sheet_indicators::SheetIndicators;
use super::text_utils::center_offset;
use crate::theme::Theme;

const GRIP: &str = "━━━━━━━━";

/// Map as full backdrop with the itinerary in a bottom-anchored sheet.
///
/// Sheet rows, top to bottom: drag handle, state indicators, itinerary.
pub struct BottomSheet;

impl BottomSheet {
    pub fn render(frame: &mut Frame, body: Rect, state: &AppState, now: Instant) -> RenderOutput {
        MapView::render(frame, body, &state.itinerary, None);

        let sheet = rect_of(sheet_area(
            hit_area(body),
            state.sheet.displayed_frame(now),
            state.sheet.row_px(),
        ));
        if sheet.height == 0 || sheet.width == 0 {
            return RenderOutput::default();
        }

        clear_area(frame, sheet);
        frame.render_widget(
            Block::default().style(Style::default().bg(Theme::SHEET_BG)),
            sheet,
        );

        let handle_row = Rect::new(sheet.x, sheet.y, sheet.width, 1);
        Self::render_handle(frame, handle_row, state.sheet.is_dragging());

        let mut output = RenderOutput {
            handle_area: Some(hit_area(handle_row)),
            ..RenderOutput::default()
        };

        if sheet.height >= 2 {
            let indicator_row = Rect::new(sheet.x, sheet.y + 1, sheet.width, 1);
            output.indicator_areas =
                SheetIndicators::render(frame, indicator_row, state.sheet.display_state());
        }

        if sheet.height > 2 {
            let content = Rect::new(sheet.x, sheet.y + 2, sheet.width, sheet.height - 2);
            let block = Block::default().padding(Padding::horizontal(1));
            ItineraryList::render(frame, content, &state.itinerary, Some(block));
        }

        output
    }

    fn render_handle(frame: &mut Frame, area: Rect, dragging: bool) {
        let style = if dragging {
            Style::default()
                .fg(Theme::HANDLE_ACTIVE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::HANDLE)
        };
        let pad = usize::from(center_offset(GRIP, area.width));
        let line = Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(GRIP, style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
