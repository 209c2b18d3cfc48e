use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use itinera_app::action::Action;
use itinera_app::state::AppState;
use itinera_domain::DisplayState;

use super::Event;

pub fn handle_event(event: Event, state: &AppState) -> Action {
    match event {
        Event::Init => Action::Render,
        Event::Tick => Action::Tick,
        Event::Resize(w, h) => Action::Resize(w, h),
        Event::Key(key) => handle_key_event(key, state),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state),
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if state.sheet.is_dragging() {
        return match key.code {
            KeyCode::Esc => Action::CancelDrag,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Up | KeyCode::Char('k') => Action::ExpandSheet,
        KeyCode::Down | KeyCode::Char('j') => Action::CollapseSheet,
        KeyCode::Char(c) => {
            DisplayState::from_shortcut(c).map_or(Action::None, Action::SetSheetState)
        }
        _ => Action::None,
    }
}

fn handle_mouse_event(mouse: MouseEvent, state: &AppState) -> Action {
    let (column, row) = (mouse.column, mouse.row);
    let pointer_y = state.sheet.row_to_px(row);
    let on_handle = state
        .ui
        .handle_area
        .is_some_and(|area| area.contains(column, row));

    // Drag shield: while a drag is live it owns every mouse event, so
    // nothing underneath receives clicks.
    let shielded = state.sheet.is_dragging()
        || state
            .ui
            .drag_shield
            .is_some_and(|area| area.contains(column, row));
    if shielded {
        return match mouse.kind {
            MouseEventKind::Drag(MouseButton::Left) => Action::DragMove { y: pointer_y },
            MouseEventKind::Up(MouseButton::Left) => Action::DragEnd,
            // A press with the session still open means the release was lost;
            // a press on the handle starts over, anything else is swallowed.
            MouseEventKind::Down(MouseButton::Left) if on_handle => {
                Action::DragStart { y: pointer_y }
            }
            _ => Action::None,
        };
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if on_handle => Action::DragStart { y: pointer_y },
        MouseEventKind::Down(MouseButton::Left) => state
            .ui
            .indicator_at(column, row)
            .map_or(Action::None, Action::SetSheetState),
        _ => Action::None,
    }
}
