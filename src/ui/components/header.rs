use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use itinera_app::layout::PanelLayout;
use itinera_app::state::AppState;

use crate::theme::Theme;

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Paragraph::new(Self::line(state)), area);
    }

    pub fn line(state: &AppState) -> Line<'static> {
        let destination = state.itinerary.destination.as_deref().unwrap_or("-");

        let mut spans = vec![
            Span::styled(
                state.itinerary.title.clone(),
                Style::default().fg(Theme::TEXT_ACCENT),
            ),
            Span::raw(" | "),
            Span::raw(destination.to_string()),
            Span::raw(" | "),
            Span::raw(format!("{} stops", state.itinerary.stop_count())),
            Span::raw(" | "),
            Span::styled(
                state.viewport.class.label(),
                Style::default().fg(Theme::TEXT_DAY),
            ),
        ];

        if state.panel_layout() == PanelLayout::SheetOverBackdrop {
            let (text, color) = if state.sheet.is_dragging() {
                ("dragging", Theme::HANDLE_ACTIVE)
            } else {
                (state.sheet.display_state().label(), Color::Green)
            };
            spans.push(Span::raw(" | sheet:"));
            spans.push(Span::styled(text, Style::default().fg(color)));
        }

        Line::from(spans)
    }
}
