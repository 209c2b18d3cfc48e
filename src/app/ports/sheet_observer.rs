use itinera_domain::DisplayState;

/// Optional listener for display-state changes, for callers that want to
/// persist or react to where the sheet rests.
#[cfg_attr(test, mockall::automock)]
pub trait SheetStateObserver: Send + Sync {
    fn sheet_state_changed(&self, state: DisplayState);
}
