use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use itinera_app::state::AppState;

use super::atoms::panel_block;
use super::itinerary_list::ItineraryList;
use super::map_view::MapView;

/// Minimum width kept for the itinerary before the map column shrinks.
const MIN_LIST_WIDTH: u16 = 30;

/// Itinerary on the left, map in a fixed-width column on the right.
pub struct SideBySide;

impl SideBySide {
    pub fn render(frame: &mut Frame, body: Rect, state: &AppState) {
        let [list_area, map_area] = Self::split(body, state.layout.side_column_width);

        ItineraryList::render(
            frame,
            list_area,
            &state.itinerary,
            Some(panel_block("Itinerary", true)),
        );
        MapView::render(frame, map_area, &state.itinerary, Some(panel_block("Map", false)));
    }

    pub fn split(body: Rect, side_column_width: u16) -> [Rect; 2] {
        let side = side_column_width.min(body.width.saturating_sub(MIN_LIST_WIDTH));
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(side)]).areas(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_column_sits_on_the_right() {
        let [list, map] = SideBySide::split(Rect::new(0, 1, 160, 40), 44);

        assert_eq!(map.width, 44);
        assert_eq!(map.x, 116);
        assert_eq!(list.width, 116);
    }

    #[test]
    fn list_keeps_minimum_width() {
        let [list, map] = SideBySide::split(Rect::new(0, 1, 60, 40), 44);

        assert_eq!(list.width, MIN_LIST_WIDTH);
        assert_eq!(map.width, 30);
    }

    #[test]
    fn body_narrower_than_list_minimum_drops_map() {
        let [list, map] = SideBySide::split(Rect::new(0, 1, 24, 10), 44);

        assert_eq!(list.width, 24);
        assert_eq!(map.width, 0);
    }
}
