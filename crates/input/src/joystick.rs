//! Keyboard-emulated two-axis joystick.
//!
//! Terminals rarely report key releases, so a press latches its deflection
//! until the next reading. Each reading returns the latched axes and
//! re-centres the stick.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::axes::{AxisSample, AxisSource, AXIS_CENTER, AXIS_MAX};
use crate::map::{deflection_for_key, Deflection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardJoystick {
    a: Option<u16>,
    b: Option<u16>,
}

impl KeyboardJoystick {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch a deflection. A later press on the same axis wins.
    pub fn deflect(&mut self, deflection: Deflection) {
        match deflection {
            Deflection::Left => self.a = Some(0),
            Deflection::Right => self.a = Some(AXIS_MAX),
            Deflection::Down => self.b = Some(0),
            Deflection::Up => self.b = Some(AXIS_MAX),
        }
    }

    /// Feed a key event; returns `true` if the key moved the stick.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        match deflection_for_key(key) {
            Some(deflection) => {
                self.deflect(deflection);
                true
            }
            None => false,
        }
    }

    /// Reading the stick would produce right now, without re-centring.
    pub fn peek(&self) -> AxisSample {
        AxisSample::new(self.a.unwrap_or(AXIS_CENTER), self.b.unwrap_or(AXIS_CENTER))
    }
}

impl AxisSource for KeyboardJoystick {
    fn read_axes(&mut self) -> AxisSample {
        let sample = self.peek();
        *self = Self::default();
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axes::commands_for;
    use crate::types::GameAction;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn centred_without_input() {
        let mut stick = KeyboardJoystick::new();
        assert_eq!(stick.read_axes(), AxisSample::CENTERED);
    }

    #[test]
    fn press_latches_until_next_reading() {
        let mut stick = KeyboardJoystick::new();
        assert!(stick.handle_key(KeyEvent::from(KeyCode::Left)));
        assert!(stick.handle_key(KeyEvent::from(KeyCode::Up)));

        let sample = stick.read_axes();
        assert_eq!(sample, AxisSample::new(0, 1023));
        assert_eq!(
            commands_for(sample).as_slice(),
            &[GameAction::MoveLeft, GameAction::Rotate]
        );
        assert_eq!(stick.read_axes(), AxisSample::CENTERED);
    }

    #[test]
    fn last_press_on_an_axis_wins() {
        let mut stick = KeyboardJoystick::new();
        stick.deflect(Deflection::Down);
        stick.deflect(Deflection::Up);
        assert_eq!(commands_for(stick.read_axes()).as_slice(), &[GameAction::Rotate]);
    }

    #[test]
    fn releases_and_unmapped_keys_are_ignored() {
        let mut stick = KeyboardJoystick::new();
        let release =
            KeyEvent::new_with_kind(KeyCode::Left, KeyModifiers::NONE, KeyEventKind::Release);
        assert!(!stick.handle_key(release));
        assert!(!stick.handle_key(KeyEvent::from(KeyCode::Char('x'))));
        assert_eq!(stick.peek(), AxisSample::CENTERED);
    }
}
