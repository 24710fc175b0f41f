//! Key mapping from terminal events to camera actions.

use crate::types::CameraAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a camera action.
///
/// Letters match case-insensitively. Release and repeat events map to
/// nothing so a held key does not double-step on terminals that report them.
pub fn map_key(key: KeyEvent) -> Option<CameraAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(CameraAction::Quit);
    }
    match key.code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            // Movement
            'w' => Some(CameraAction::MoveForward),
            's' => Some(CameraAction::MoveBackward),
            'a' => Some(CameraAction::StrafeLeft),
            'd' => Some(CameraAction::StrafeRight),

            // Turning
            'q' => Some(CameraAction::TurnLeft),
            'e' => Some(CameraAction::TurnRight),

            // Height
            ' ' => Some(CameraAction::Ascend),
            'c' => Some(CameraAction::Descend),

            'p' => Some(CameraAction::TogglePause),
            _ => None,
        },
        _ => None,
    }
}

/// Check if key should quit: `x`, `Esc`, or Ctrl-C.
///
/// Raw mode delivers Ctrl-C as a key event instead of a signal, so the
/// interrupt takes the same graceful path as the quit key.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
