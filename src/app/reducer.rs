//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Call `Instant::now()` (time is passed as `now` parameter)
//! - Perform I/O operations
//! - Spawn async tasks
//!
//! This keeps the reducer testable without mocking time or I/O.

use std::time::Instant;

use crate::action::Action;
use crate::effect::Effect;
use crate::reducers::{reduce_sheet, reduce_viewport};
use crate::state::AppState;

pub fn reduce(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    let should_mark_dirty = !matches!(action, Action::None | Action::Render | Action::Tick);

    let effects = reduce_inner(state, action, now);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

fn reduce_inner(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    if let Some(effects) = reduce_viewport(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_sheet(state, &action, now) {
        return effects;
    }

    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Tick => {
            if state.sheet.is_animating(now) || state.sheet.settle(now) {
                state.mark_dirty();
            }
            vec![]
        }
        Action::Render => {
            state.sheet.settle(now);
            state.clear_dirty();
            vec![Effect::Render]
        }
        // Handled by sub-reducers
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use itinera_domain::{DisplayState, Itinerary};

    fn create_test_state() -> AppState {
        AppState::sized(Itinerary::default(), 80, 24)
    }

    mod pure_actions {
        use super::*;

        #[test]
        fn quit_sets_should_quit_and_returns_no_effects() {
            let mut state = create_test_state();

            let effects = reduce(&mut state, Action::Quit, Instant::now());

            assert!(state.should_quit);
            assert!(effects.is_empty());
        }

        #[test]
        fn render_returns_render_effect_and_clears_dirty() {
            let mut state = create_test_state();
            state.mark_dirty();

            let effects = reduce(&mut state, Action::Render, Instant::now());

            assert_eq!(effects, vec![Effect::Render]);
            assert!(!state.render_dirty);
        }

        #[test]
        fn none_does_not_mark_dirty() {
            let mut state = create_test_state();
            state.clear_dirty();

            let effects = reduce(&mut state, Action::None, Instant::now());

            assert!(effects.is_empty());
            assert!(!state.render_dirty);
        }

        #[test]
        fn tick_marks_dirty_only_while_animating() {
            let now = Instant::now();
            let mut state = create_test_state();
            state.clear_dirty();

            reduce(&mut state, Action::Tick, now);
            assert!(!state.render_dirty);

            state.sheet.set_state(DisplayState::Full, now);
            reduce(&mut state, Action::Tick, now + Duration::from_millis(100));
            assert!(state.render_dirty);
        }

        #[test]
        fn tick_after_transition_settles_it() {
            let now = Instant::now();
            let mut state = create_test_state();
            state.sheet.set_state(DisplayState::Full, now);
            state.clear_dirty();

            reduce(&mut state, Action::Tick, now + Duration::from_secs(1));

            assert!(state.render_dirty);
            assert!(!state.sheet.is_animating(now + Duration::from_secs(1)));
        }
    }

    mod gesture_flow {
        use super::*;

        fn run(state: &mut AppState, actions: Vec<Action>) -> Vec<Effect> {
            let now = Instant::now();
            actions
                .into_iter()
                .flat_map(|action| reduce(state, action, now))
                .collect()
        }

        #[test]
        fn slow_drag_at_boundary_keeps_half() {
            let mut state = create_test_state();

            let effects = run(
                &mut state,
                vec![
                    Action::DragStart { y: 300 },
                    Action::DragMove { y: 200 },
                    Action::DragEnd,
                ],
            );

            assert!(effects.is_empty());
            assert_eq!(state.sheet.display_state(), DisplayState::Half);
            assert_eq!(state.sheet.controller.vertical_offset(), 0);
        }

        #[test]
        fn set_state_from_collapsed_to_full() {
            let mut state = create_test_state();
            run(&mut state, vec![Action::SetSheetState(DisplayState::Collapsed)]);

            let effects = run(&mut state, vec![Action::SetSheetState(DisplayState::Full)]);

            assert_eq!(effects, vec![Effect::NotifySheetState(DisplayState::Full)]);
            assert_eq!(state.sheet.controller.vertical_offset(), 0);
            assert!(!state.sheet.is_dragging());
        }

        #[test]
        fn viewport_flip_mid_drag_then_stale_events_are_noops() {
            let mut state = create_test_state();

            let effects = run(
                &mut state,
                vec![
                    Action::DragStart { y: 300 },
                    Action::DragMove { y: 120 },
                    Action::Resize(140, 24),
                    Action::DragMove { y: 0 },
                    Action::DragEnd,
                    Action::Resize(80, 24),
                    Action::DragMove { y: 0 },
                    Action::DragEnd,
                ],
            );

            assert!(effects.is_empty());
            assert_eq!(state.sheet.display_state(), DisplayState::Half);
            assert!(!state.sheet.is_dragging());
            assert_eq!(state.sheet.controller.vertical_offset(), 0);
        }

        #[test]
        fn state_changes_mark_dirty() {
            let mut state = create_test_state();
            state.clear_dirty();

            run(&mut state, vec![Action::DragStart { y: 10 }]);

            assert!(state.render_dirty);
        }
    }
}
