use itinera_domain::DisplayState;

/// Everything the reducer reacts to. Pointer Y values are device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // Drag handle
    DragStart { y: i32 },
    DragMove { y: i32 },
    DragEnd,
    CancelDrag,

    // Explicit state changes (indicators and keys)
    SetSheetState(DisplayState),
    ExpandSheet,
    CollapseSheet,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
