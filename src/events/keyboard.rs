//! Keyboard event handling by screen state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    if app.showing_sheet {
        handle_sheet_mode(key)
    } else {
        handle_screen_mode(key)
    }
}

fn handle_screen_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Action::ToggleSheet,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}

fn handle_sheet_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => Action::CursorDown,
        KeyCode::Enter | KeyCode::Char(' ') => Action::ActivateCursor,
        KeyCode::Esc => Action::DismissSheet,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}
