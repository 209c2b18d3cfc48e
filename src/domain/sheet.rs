use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discrete height the itinerary sheet can rest at.
///
/// Ordered from smallest to largest so "upward" and "downward" moves are
/// simple steps along the ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DisplayState {
    Collapsed,
    #[default]
    Half,
    Full,
}

impl DisplayState {
    pub const ALL: [Self; 3] = [Self::Collapsed, Self::Half, Self::Full];

    /// Fraction of the available body height the sheet occupies at rest.
    pub fn height_fraction(self) -> f32 {
        match self {
            Self::Collapsed => 0.20,
            Self::Half => 0.50,
            Self::Full => 0.90,
        }
    }

    /// One step taller; saturates at `Full`.
    pub fn expanded(self) -> Self {
        match self {
            Self::Collapsed => Self::Half,
            Self::Half | Self::Full => Self::Full,
        }
    }

    /// One step shorter; saturates at `Collapsed`.
    pub fn collapsed(self) -> Self {
        match self {
            Self::Full => Self::Half,
            Self::Half | Self::Collapsed => Self::Collapsed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Collapsed => "Collapsed",
            Self::Half => "Half",
            Self::Full => "Full",
        }
    }

    /// Digit key that selects this state directly.
    pub fn shortcut(self) -> char {
        match self {
            Self::Collapsed => '1',
            Self::Half => '2',
            Self::Full => '3',
        }
    }

    pub fn from_shortcut(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.shortcut() == key)
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collapsed => write!(f, "collapsed"),
            Self::Half => write!(f, "half"),
            Self::Full => write!(f, "full"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sheet state '{0}' (expected collapsed, half or full)")]
pub struct InvalidDisplayState(pub String);

impl FromStr for DisplayState {
    type Err = InvalidDisplayState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "collapsed" => Ok(Self::Collapsed),
            "half" => Ok(Self::Half),
            "full" => Ok(Self::Full),
            _ => Err(InvalidDisplayState(s.to_string())),
        }
    }
}

/// Geometry derived from the display state and any in-flight drag.
///
/// Height and offset are independent: the offset is a transform applied on
/// top of the resting height, never a change to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub height_fraction: f32,
    /// Pixels the sheet is shifted (positive = down). Zero when idle.
    pub vertical_offset: i32,
}
