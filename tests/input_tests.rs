//! Joystick thresholds and keyboard emulation

use crossterm::event::{KeyCode, KeyEvent};
use lcd_tetris::core::{ActivePiece, GameState};
use lcd_tetris::input::{commands_for, AxisSample, InputAdapter, KeyboardJoystick};
use lcd_tetris::types::{GameAction, PieceKind, Rotation};

#[test]
fn test_threshold_grid() {
    let cases: &[(u16, u16, &[GameAction])] = &[
        (512, 512, &[]),
        (0, 512, &[GameAction::MoveLeft]),
        (1023, 512, &[GameAction::MoveRight]),
        (512, 0, &[GameAction::MoveDown]),
        (512, 1023, &[GameAction::Rotate]),
        (0, 0, &[GameAction::MoveLeft, GameAction::MoveDown]),
        (1023, 1023, &[GameAction::MoveRight, GameAction::Rotate]),
        (250, 750, &[]),
    ];
    for &(a, b, expected) in cases {
        assert_eq!(commands_for(AxisSample::new(a, b)).as_slice(), expected, "a={a} b={b}");
    }
}

#[test]
fn test_keys_drive_piece_through_adapter() {
    let mut state = GameState::new(1);
    assert!(state.set_active(ActivePiece::at(PieceKind::T, Rotation::North, (1, 10))));

    let mut input = InputAdapter::new(KeyboardJoystick::new());
    input.source_mut().handle_key(KeyEvent::from(KeyCode::Right));
    input.source_mut().handle_key(KeyEvent::from(KeyCode::Up));

    for action in input.sample() {
        state.apply_action(action).unwrap();
    }
    let piece = state.active().unwrap();
    assert_eq!(piece.center(), (2, 10));
    assert_eq!(piece.rotation, Rotation::East);

    // Nothing latched for the next tick.
    assert!(input.sample().is_empty());
}
