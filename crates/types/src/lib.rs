//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the core engine, the input mapping, and the LCD renderer alike.
//!
//! # Grid Dimensions
//!
//! The play area is sized for a 2-line character LCD: the short *width* axis
//! (4 cells) is split across the two display lines, and the long *fall* axis
//! (19 cells) runs left-to-right along each line.
//!
//! - **Width**: 4 cells (indexed 0-3)
//! - **Length**: 19 cells along the fall axis (indexed 0-18, gravity moves towards 0)
//! - **Spawn center**: (2, 16)
//! - **Game over row**: 15
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 500 | Gravity period, elapses after each rendered descent |
//!
//! # Examples
//!
//! ```
//! use lcd_tetris_types::{GameAction, Rotation, GRID_LENGTH, GRID_WIDTH};
//!
//! // ROTATE steps the orientation index down by one.
//! assert_eq!(Rotation::North.rotate(), Rotation::East);
//! assert_eq!(Rotation::North.rotate().index(), 3);
//!
//! assert_eq!(GameAction::MoveDown.delta(), Some((0, -1)));
//! assert_eq!((GRID_WIDTH, GRID_LENGTH), (4, 19));
//! ```

/// Grid dimensions
pub const GRID_WIDTH: u8 = 4;
pub const GRID_LENGTH: u8 = 19;

/// Spawn center (width coordinate, fall-axis coordinate)
pub const SPAWN_X: i8 = (GRID_WIDTH / 2) as i8;
pub const SPAWN_Y: i8 = GRID_LENGTH as i8 - 3;

/// Fall-axis index inspected after every landing; any filled cell ends the session.
pub const GAME_OVER_ROW: u8 = 15;

/// Gravity period in milliseconds.
pub const TICK_MS: u32 = 500;

/// Each action fires at most once per input sample.
pub const MAX_COMMANDS_PER_TICK: usize = 4;

/// Number of shape variants.
pub const PIECE_KINDS: usize = 7;

/// A coordinate or offset on the grid: (width axis, fall axis).
pub type Position = (i8, i8);

/// Tetromino shape variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All variants in table order.
    pub const ALL: [PieceKind; PIECE_KINDS] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Orientation of a piece.
///
/// Index 0 is the spawn orientation; each higher index is the previous one
/// turned a quarter counter-clockwise. `ROTATE` walks the indices downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    West,
    South,
    East,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::West,
        Rotation::South,
        Rotation::East,
    ];

    /// Orientation index (0-3)
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::West => 1,
            Rotation::South => 2,
            Rotation::East => 3,
        }
    }

    /// Orientation for an index, wrapping modulo 4.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// The orientation a `ROTATE` command moves to (index - 1 mod 4).
    pub fn rotate(&self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Inverse of [`Rotation::rotate`].
    pub fn unrotate(&self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Discrete commands applied to the active piece, one transaction each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
}

impl GameAction {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
        }
    }

    /// Center displacement for movement commands; `None` for rotation.
    pub fn delta(&self) -> Option<Position> {
        match self {
            GameAction::MoveLeft => Some((-1, 0)),
            GameAction::MoveRight => Some((1, 0)),
            GameAction::MoveDown => Some((0, -1)),
            GameAction::Rotate => None,
        }
    }
}

/// Occupancy of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled)
    }
}
