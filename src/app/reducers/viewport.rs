//! Viewport sub-reducer: terminal size and narrow/wide class.

use std::time::Instant;

use tracing::debug;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;
use itinera_domain::ViewportClass;

pub fn reduce_viewport(
    state: &mut AppState,
    action: &Action,
    _now: Instant,
) -> Option<Vec<Effect>> {
    let Action::Resize(width, height) = *action else {
        return None;
    };

    if let Some(class) = state.viewport.resize(width, height) {
        debug!(target: "viewport", width, height, class = class.label(), "viewport class changed");
        // Drag state belongs to the sheet layout; leaving it ends the drag
        // with no transition.
        if class == ViewportClass::Wide && state.sheet.discard_drag() {
            debug!(target: "sheet", "drag discarded by viewport change");
        }
        state.ui = Default::default();
    }
    Some(vec![])
}
