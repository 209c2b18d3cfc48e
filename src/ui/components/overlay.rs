use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Clear;

use itinera_app::layout::HitArea;

/// Clears the given area by rendering a Clear widget.
/// Call before drawing anything that sits over the backdrop.
pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

pub fn hit_area(rect: Rect) -> HitArea {
    HitArea::new(rect.x, rect.y, rect.width, rect.height)
}

pub fn rect_of(area: HitArea) -> Rect {
    Rect::new(area.x, area.y, area.width, area.height)
}
