//! Input module (engine-facing).
//!
//! Turns a two-axis analog reading into discrete [`crate::types::GameAction`]
//! commands. The physical joystick is emulated from the keyboard: `crossterm`
//! key events deflect the sticks, and the readings go through the same
//! threshold mapping a real 10-bit ADC sample would.

pub mod axes;
pub mod joystick;
pub mod map;

pub use lcd_tetris_types as types;

pub use axes::{commands_for, AxisSample, AxisSource, Commands};
pub use joystick::KeyboardJoystick;
pub use map::{deflection_for_key, should_quit, Deflection};

/// Samples an [`AxisSource`] once per tick and maps the reading to commands.
#[derive(Debug, Clone, Default)]
pub struct InputAdapter<S> {
    source: S,
}

impl<S: AxisSource> InputAdapter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Read both axes and return the fired commands in application order.
    pub fn sample(&mut self) -> Commands {
        commands_for(self.source.read_axes())
    }
}
