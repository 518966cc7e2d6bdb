//! Key mapping from terminal events to stick deflections.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Direction a key pushes the emulated joystick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deflection {
    /// Axis A to zero.
    Left,
    /// Axis A to full scale.
    Right,
    /// Axis B to zero.
    Down,
    /// Axis B to full scale.
    Up,
}

/// Map keyboard input to a stick deflection.
pub fn deflection_for_key(key: KeyEvent) -> Option<Deflection> {
    match key.code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Deflection::Left),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Deflection::Right),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Deflection::Down),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char(' ') => Some(Deflection::Up),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
