//! Sheet sub-reducer: drag handle and explicit state changes.

use std::time::Instant;

use tracing::debug;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;
use itinera_domain::DisplayState;

/// Handles drag and sheet-state actions.
/// Returns Some(effects) if action was handled, None otherwise.
///
/// In the side-by-side layout the sheet is not on screen, so every sheet
/// action is swallowed without touching the controller.
pub fn reduce_sheet(state: &mut AppState, action: &Action, now: Instant) -> Option<Vec<Effect>> {
    let is_sheet_action = matches!(
        action,
        Action::DragStart { .. }
            | Action::DragMove { .. }
            | Action::DragEnd
            | Action::CancelDrag
            | Action::SetSheetState(_)
            | Action::ExpandSheet
            | Action::CollapseSheet
    );
    if !is_sheet_action {
        return None;
    }
    if !state.viewport.class.is_narrow() {
        return Some(vec![]);
    }

    let sheet = &mut state.sheet;
    let changed = match *action {
        Action::DragStart { y } => {
            sheet.start_drag(y);
            debug!(target: "sheet", y, state = %sheet.display_state(), "drag start");
            None
        }
        Action::DragMove { y } => {
            sheet.move_drag(y);
            None
        }
        Action::DragEnd => {
            let session = sheet.controller.session().copied();
            let changed = sheet.end_drag(now);
            if let Some(session) = session {
                debug!(
                    target: "sheet",
                    delta = session.delta(),
                    state = %sheet.display_state(),
                    "drag end"
                );
            }
            changed
        }
        Action::CancelDrag => {
            if sheet.cancel_drag(now) {
                debug!(target: "sheet", "drag cancelled");
            }
            None
        }
        Action::SetSheetState(target) => sheet.set_state(target, now),
        Action::ExpandSheet => {
            let target = sheet.display_state().expanded();
            sheet.set_state(target, now)
        }
        Action::CollapseSheet => {
            let target = sheet.display_state().collapsed();
            sheet.set_state(target, now)
        }
        _ => None,
    };

    Some(notify(changed))
}

fn notify(changed: Option<DisplayState>) -> Vec<Effect> {
    changed
        .map(|state| vec![Effect::NotifySheetState(state)])
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itinera_domain::Itinerary;
    use rstest::rstest;

    fn narrow_state(initial: DisplayState) -> AppState {
        let mut state = AppState::sized(Itinerary::default(), 60, 40);
        state.sheet.set_state(initial, Instant::now());
        state
    }

    fn dispatch(state: &mut AppState, actions: &[Action]) -> Vec<Effect> {
        let now = Instant::now();
        actions
            .iter()
            .flat_map(|action| reduce_sheet(state, action, now).unwrap_or_default())
            .collect()
    }

    #[test]
    fn unrelated_action_is_not_handled() {
        let mut state = narrow_state(DisplayState::Half);

        assert!(reduce_sheet(&mut state, &Action::Tick, Instant::now()).is_none());
    }

    #[test]
    fn flick_up_notifies_new_state() {
        let mut state = narrow_state(DisplayState::Half);

        let effects = dispatch(
            &mut state,
            &[
                Action::DragStart { y: 300 },
                Action::DragMove { y: 180 },
                Action::DragEnd,
            ],
        );

        assert_eq!(effects, vec![Effect::NotifySheetState(DisplayState::Full)]);
        assert_eq!(state.sheet.display_state(), DisplayState::Full);
    }

    #[test]
    fn snap_back_emits_nothing() {
        let mut state = narrow_state(DisplayState::Collapsed);

        let effects = dispatch(
            &mut state,
            &[
                Action::DragStart { y: 100 },
                Action::DragMove { y: 70 },
                Action::DragEnd,
            ],
        );

        assert!(effects.is_empty());
        assert_eq!(state.sheet.display_state(), DisplayState::Collapsed);
    }

    #[test]
    fn duplicate_drag_end_is_ignored() {
        let mut state = narrow_state(DisplayState::Full);

        let effects = dispatch(
            &mut state,
            &[
                Action::DragStart { y: 0 },
                Action::DragMove { y: 90 },
                Action::DragEnd,
                Action::DragEnd,
            ],
        );

        assert_eq!(effects, vec![Effect::NotifySheetState(DisplayState::Half)]);
        assert_eq!(state.sheet.display_state(), DisplayState::Half);
    }

    #[test]
    fn cancel_drag_keeps_state() {
        let mut state = narrow_state(DisplayState::Half);

        let effects = dispatch(
            &mut state,
            &[
                Action::DragStart { y: 300 },
                Action::DragMove { y: 100 },
                Action::CancelDrag,
                Action::DragEnd,
            ],
        );

        assert!(effects.is_empty());
        assert_eq!(state.sheet.display_state(), DisplayState::Half);
        assert!(!state.sheet.is_dragging());
    }

    #[rstest]
    #[case(DisplayState::Collapsed, Action::ExpandSheet, Some(DisplayState::Half))]
    #[case(DisplayState::Full, Action::ExpandSheet, None)]
    #[case(DisplayState::Full, Action::CollapseSheet, Some(DisplayState::Half))]
    #[case(DisplayState::Collapsed, Action::CollapseSheet, None)]
    #[case(
        DisplayState::Collapsed,
        Action::SetSheetState(DisplayState::Full),
        Some(DisplayState::Full)
    )]
    #[case(DisplayState::Half, Action::SetSheetState(DisplayState::Half), None)]
    fn explicit_changes(
        #[case] initial: DisplayState,
        #[case] action: Action,
        #[case] expected: Option<DisplayState>,
    ) {
        let mut state = narrow_state(initial);

        let effects = dispatch(&mut state, &[action]);

        assert_eq!(effects, notify(expected));
        assert_eq!(state.sheet.display_state(), expected.unwrap_or(initial));
    }

    #[test]
    fn wide_layout_ignores_sheet_actions() {
        let mut state = AppState::sized(Itinerary::default(), 160, 40);

        let effects = dispatch(
            &mut state,
            &[
                Action::DragStart { y: 300 },
                Action::DragMove { y: 100 },
                Action::SetSheetState(DisplayState::Full),
            ],
        );

        assert!(effects.is_empty());
        assert!(!state.sheet.is_dragging());
        assert_eq!(state.sheet.display_state(), DisplayState::Half);
    }
}
