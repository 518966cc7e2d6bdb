//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the piece-geometry and grid-state engine of LCD Tetris.
//! It has **no dependencies** on terminals, displays or input devices, making it:
//!
//! - **Deterministic**: the same seed produces the same sequence of pieces
//! - **Transactional**: a rejected move or rotation leaves the grid untouched
//! - **Allocation-free**: the grid is a fixed array and per-tick lists are `ArrayVec`s
//!
//! # Module Structure
//!
//! - [`pieces`]: offset table for the 7 shapes in 4 orientations
//! - [`grid`]: 4x19 occupancy matrix
//! - [`active`]: the falling piece and its derived cells
//! - [`validate`]: bounds and collision classification
//! - [`transaction`]: lift / validate / commit-or-rollback moves and rotations
//! - [`line_clear`]: complete row removal and compaction
//! - [`game_over`]: boundary row check
//! - [`rng`] and [`spawner`]: seeded uniform piece selection
//! - [`game_state`]: one session tying the above together
//! - [`scheduler`]: the tick loop, generic over a [`Frontend`]
//!
//! # Example
//!
//! ```
//! use lcd_tetris_core::{GameState, Gravity};
//! use lcd_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! // Player commands either apply completely or not at all.
//! let _ = game.apply_action(GameAction::MoveLeft);
//! let _ = game.apply_action(GameAction::Rotate);
//!
//! // Gravity pulls the piece one row towards row 0.
//! assert_eq!(game.step_gravity(), Gravity::Fell);
//! assert_eq!(game.grid().filled_count(), 4);
//! ```
//!
//! # Timing
//!
//! The scheduler performs one forced descent per tick. The tick period
//! (500 ms by default) elapses after each rendered descent; a landing is
//! followed immediately by the next spawn.

pub mod active;
pub mod error;
pub mod game_over;
pub mod game_state;
pub mod grid;
pub mod line_clear;
pub mod pieces;
pub mod rng;
pub mod scheduler;
pub mod spawner;
pub mod transaction;
pub mod validate;

pub use lcd_tetris_types as types;

// Re-export commonly used types for convenience
pub use active::ActivePiece;
pub use error::{MoveError, PlacementError};
pub use game_over::is_game_over;
pub use game_state::{GameState, Gravity, Landing};
pub use grid::Grid;
pub use line_clear::{clear_complete_rows, ClearedRows};
pub use pieces::{cells_at, get_offsets, SPAWN_POSITION};
pub use rng::SimpleRng;
pub use scheduler::{Commands, Frontend, Scheduler, SessionEnd, SessionSummary};
pub use spawner::Spawner;
pub use validate::validate;
