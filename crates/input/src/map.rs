//! Key mapping from terminal events to a quit request.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Check if key should quit the renderer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
