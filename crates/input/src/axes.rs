//! Raw axis readings and the threshold contract.
//!
//! | axis | reading | command |
//! |------|---------|---------|
//! | A | `< 250` | `MoveLeft` |
//! | A | `> 750` | `MoveRight` |
//! | B | `< 250` | `MoveDown` |
//! | B | `> 750` | `Rotate` |
//!
//! Readings in the dead zone `[250, 750]` fire nothing.

use arrayvec::ArrayVec;

use crate::types::{GameAction, MAX_COMMANDS_PER_TICK};

/// Full-scale reading of a 10-bit converter.
pub const AXIS_MAX: u16 = 1023;
/// Reading of a stick at rest.
pub const AXIS_CENTER: u16 = 512;
/// Readings strictly below this fire the low command of an axis.
pub const LOW_THRESHOLD: u16 = 250;
/// Readings strictly above this fire the high command of an axis.
pub const HIGH_THRESHOLD: u16 = 750;

/// Commands fired by one sample, in application order
pub type Commands = ArrayVec<GameAction, MAX_COMMANDS_PER_TICK>;

/// One reading of both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSample {
    /// Width axis: low is left, high is right.
    pub a: u16,
    /// Fall axis: low is down, high is rotate.
    pub b: u16,
}

impl AxisSample {
    pub const CENTERED: AxisSample = AxisSample {
        a: AXIS_CENTER,
        b: AXIS_CENTER,
    };

    /// Build a sample, clamping both readings to [`AXIS_MAX`].
    pub fn new(a: u16, b: u16) -> Self {
        Self {
            a: a.min(AXIS_MAX),
            b: b.min(AXIS_MAX),
        }
    }
}

impl Default for AxisSample {
    fn default() -> Self {
        Self::CENTERED
    }
}

/// Anything that can be read like the two-axis joystick.
pub trait AxisSource {
    fn read_axes(&mut self) -> AxisSample;
}

/// Map a sample to commands: horizontal first, then down, then rotate.
pub fn commands_for(sample: AxisSample) -> Commands {
    let mut out = Commands::new();
    let a = sample.a.min(AXIS_MAX);
    let b = sample.b.min(AXIS_MAX);

    if a < LOW_THRESHOLD {
        out.push(GameAction::MoveLeft);
    } else if a > HIGH_THRESHOLD {
        out.push(GameAction::MoveRight);
    }
    if b < LOW_THRESHOLD {
        out.push(GameAction::MoveDown);
    } else if b > HIGH_THRESHOLD {
        out.push(GameAction::Rotate);
    }
    out
}
