use itinera_domain::{DisplayState, Itinerary, ViewportClass};

use crate::config::{AppConfig, LayoutConfig};
use crate::layout::{HitArea, PanelLayout};
use crate::ports::RenderOutput;
use crate::sheet_state::SheetState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    pub width: u16,
    pub height: u16,
    pub class: ViewportClass,
    narrow_breakpoint: u16,
}

impl ViewportState {
    pub fn new(width: u16, height: u16, narrow_breakpoint: u16) -> Self {
        Self {
            width,
            height,
            class: ViewportClass::classify(width, narrow_breakpoint),
            narrow_breakpoint,
        }
    }

    /// Applies a new size. Returns the new class when the breakpoint was
    /// crossed.
    pub fn resize(&mut self, width: u16, height: u16) -> Option<ViewportClass> {
        self.width = width;
        self.height = height;
        let class = ViewportClass::classify(width, self.narrow_breakpoint);
        let previous = std::mem::replace(&mut self.class, class);
        (previous != class).then_some(class)
    }
}

/// Hit regions from the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub handle_area: Option<HitArea>,
    pub indicator_areas: Vec<(DisplayState, HitArea)>,
    pub drag_shield: Option<HitArea>,
}

impl UiState {
    pub fn record(&mut self, output: RenderOutput) {
        self.handle_area = output.handle_area;
        self.indicator_areas = output.indicator_areas;
        self.drag_shield = output.drag_shield;
    }

    pub fn indicator_at(&self, column: u16, row: u16) -> Option<DisplayState> {
        self.indicator_areas
            .iter()
            .find(|(_, area)| area.contains(column, row))
            .map(|(state, _)| *state)
    }
}

pub struct AppState {
    pub itinerary: Itinerary,
    pub sheet: SheetState,
    pub viewport: ViewportState,
    pub layout: LayoutConfig,
    pub ui: UiState,
    pub should_quit: bool,
    pub render_dirty: bool,
}

impl AppState {
    pub fn new(itinerary: Itinerary, config: &AppConfig) -> Self {
        Self {
            itinerary,
            sheet: SheetState::new(&config.sheet),
            viewport: ViewportState::new(0, 0, config.layout.narrow_breakpoint),
            layout: config.layout.clone(),
            ui: UiState::default(),
            should_quit: false,
            render_dirty: true,
        }
    }

    pub fn panel_layout(&self) -> PanelLayout {
        PanelLayout::for_viewport(self.viewport.class)
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }
}

#[cfg(any(test, feature = "test-support"))]
impl AppState {
    /// State sized like a terminal of `width` x `height` with default config.
    pub fn sized(itinerary: Itinerary, width: u16, height: u16) -> Self {
        let mut state = Self::new(itinerary, &AppConfig::default());
        state.viewport.resize(width, height);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_zero_size_and_is_dirty() {
        let state = AppState::new(Itinerary::default(), &AppConfig::default());

        assert_eq!(state.viewport.width, 0);
        assert!(state.render_dirty);
        assert_eq!(state.sheet.display_state(), DisplayState::Half);
    }

    #[test]
    fn resize_reports_class_flip_only_once() {
        let mut viewport = ViewportState::new(120, 40, 100);

        assert_eq!(viewport.resize(80, 40), Some(ViewportClass::Narrow));
        assert_eq!(viewport.resize(70, 30), None);
        assert_eq!(viewport.resize(100, 30), Some(ViewportClass::Wide));
    }

    #[test]
    fn indicator_at_finds_recorded_area() {
        let mut ui = UiState::default();
        ui.record(RenderOutput {
            handle_area: None,
            indicator_areas: vec![
                (DisplayState::Collapsed, HitArea::new(0, 10, 11, 1)),
                (DisplayState::Half, HitArea::new(12, 10, 6, 1)),
            ],
            drag_shield: None,
        });

        assert_eq!(ui.indicator_at(13, 10), Some(DisplayState::Half));
        assert_eq!(ui.indicator_at(11, 10), None);
    }
}
