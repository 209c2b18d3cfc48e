//! Side effects returned by the reducer, executed by EffectRunner.

use itinera_domain::DisplayState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Render,

    /// The sheet settled on a different display state.
    NotifySheetState(DisplayState),
}
