//! Runtime settings. Loaded from TOML by the infra layer; every key is
//! optional and falls back to the defaults below.

use std::time::Duration;

use serde::Deserialize;

use crate::gesture::GestureThresholds;
use itinera_domain::DisplayState;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sheet: SheetConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub default_state: DisplayState,
    pub flick_threshold_px: i32,
    pub drag_threshold_px: i32,
    pub max_offset_px: i32,
    pub transition_ms: u64,
    /// Device pixels per terminal row, used to turn mouse rows into pointer Y.
    pub row_px: u16,
}

impl Default for SheetConfig {
    fn default() -> Self {
        let thresholds = GestureThresholds::default();
        Self {
            default_state: DisplayState::Half,
            flick_threshold_px: thresholds.flick_px,
            drag_threshold_px: thresholds.drag_px,
            max_offset_px: thresholds.max_offset_px,
            transition_ms: 300,
            row_px: 16,
        }
    }
}

impl SheetConfig {
    pub fn thresholds(&self) -> GestureThresholds {
        GestureThresholds {
            flick_px: self.flick_threshold_px,
            drag_px: self.drag_threshold_px,
            max_offset_px: self.max_offset_px,
        }
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Terminals narrower than this many columns get the sheet layout.
    pub narrow_breakpoint: u16,
    /// Width of the map column in the side-by-side layout.
    pub side_column_width: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint: 100,
            side_column_width: 44,
        }
    }
}
