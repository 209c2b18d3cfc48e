use tracing::info;

use itinera_app::ports::SheetStateObserver;
use itinera_domain::DisplayState;

/// Records every settled sheet state in the log.
#[derive(Debug, Default)]
pub struct TracingSheetObserver;

impl SheetStateObserver for TracingSheetObserver {
    fn sheet_state_changed(&self, state: DisplayState) {
        info!(
            target: "sheet",
            state = %state,
            height_fraction = state.height_fraction(),
            "sheet settled"
        );
    }
}
