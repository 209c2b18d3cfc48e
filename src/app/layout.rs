use itinera_domain::ViewportClass;

use crate::sheet_transition::SheetFrame;

pub const HEADER_ROWS: u16 = 1;
pub const FOOTER_ROWS: u16 = 1;

/// Handle row + indicator row + one row of content.
pub const MIN_SHEET_ROWS: u16 = 3;

/// Rendering strategy, chosen only by viewport class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelLayout {
    /// Itinerary and map next to each other; the sheet controller is unused.
    SideBySide,
    /// Map as backdrop, itinerary in a draggable bottom sheet.
    SheetOverBackdrop,
}

impl PanelLayout {
    pub fn for_viewport(class: ViewportClass) -> Self {
        match class {
            ViewportClass::Wide => Self::SideBySide,
            ViewportClass::Narrow => Self::SheetOverBackdrop,
        }
    }
}

/// Screen region in terminal cells, used for hit-testing mouse events
/// against what was drawn last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitArea {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl HitArea {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x && column < self.right() && row >= self.y && row < self.bottom()
    }
}

/// Handle row + indicator row: what stays on screen however far the sheet
/// is pushed down.
pub const PINNED_SHEET_ROWS: u16 = 2;

/// Converts a pixel offset to whole rows, rounding to nearest.
pub fn px_to_rows(px: i32, row_px: u16) -> i32 {
    let row_px = f32::from(row_px.max(1));
    (px as f32 / row_px).round() as i32
}

/// Where the sheet lands inside `body` for a given frame.
///
/// The resting height is anchored to the bottom of the body, then shifted by
/// the frame offset. The result is clipped to the body and keeps the handle
/// and indicator rows visible.
pub fn sheet_area(body: HitArea, frame: SheetFrame, row_px: u16) -> HitArea {
    if body.height == 0 || body.width == 0 {
        return HitArea::new(body.x, body.y, body.width, 0);
    }

    let resting = (f32::from(body.height) * frame.height_fraction).round() as u16;
    let height = resting.clamp(MIN_SHEET_ROWS.min(body.height), body.height);

    let body_top = i32::from(body.y);
    let body_bottom = i32::from(body.bottom());
    let resting_top = body_bottom - i32::from(height);
    let lowest_top = body_bottom - i32::from(PINNED_SHEET_ROWS.min(height));
    let top = (resting_top + px_to_rows(frame.offset_px, row_px)).clamp(body_top, lowest_top);
    let visible = (body_bottom - top).min(i32::from(height));

    HitArea::new(body.x, top as u16, body.width, visible as u16)
}
