//! Game state module - one play session on the grid
//!
//! Ties together the grid, the active piece, the spawner, the line clear
//! compactor and the game over detector. The grid always contains the active
//! piece's own cells; every change to it goes through a transaction.

use tracing::{debug, info, warn};

use crate::active::ActivePiece;
use crate::error::MoveError;
use crate::game_over::is_game_over;
use crate::grid::Grid;
use crate::line_clear::{clear_complete_rows, ClearedRows};
use crate::spawner::Spawner;
use crate::transaction;
use crate::types::GameAction;

/// What happened on a gravity step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gravity {
    /// The piece moved down one row.
    Fell,
    /// The piece could not move down and is now part of the grid.
    Landed(Landing),
    /// No piece was falling.
    Idle,
}

/// A piece that came to rest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Landing {
    pub piece: ActivePiece,
    /// Why the forced descent was rejected
    pub cause: MoveError,
    /// Rows removed by the compaction that followed
    pub cleared: ClearedRows,
    /// Whether the boundary row was occupied afterwards
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Option<ActivePiece>,
    spawner: Spawner,
    /// Monotonic session id (increments on restart).
    episode_id: u32,
    pieces_spawned: u32,
    rows_cleared: u32,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            spawner: Spawner::new(seed),
            episode_id: 0,
            pieces_spawned: 0,
            rows_cleared: 0,
            game_over: false,
            started: false,
        }
    }

    /// Start the session and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    /// Empty the grid and start a fresh session.
    ///
    /// The spawner keeps its sequence, so the new session gets new pieces.
    pub fn restart(&mut self) {
        self.grid.clear();
        self.active = None;
        self.pieces_spawned = 0;
        self.rows_cleared = 0;
        self.game_over = false;
        self.started = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!(episode = self.episode_id, "session restarted");
        self.start();
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Spawn the next piece at the spawn center.
    ///
    /// Returns false, and ends the session, if the session is already over or
    /// if the new piece would overlap landed blocks.
    pub fn spawn_piece(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        debug_assert!(self.active.is_none(), "spawn while a piece is falling");

        let piece = self.spawner.next_piece();
        if !transaction::place(&mut self.grid, &piece) {
            warn!(
                kind = piece.kind.as_str(),
                rotation = piece.rotation.index(),
                "spawn zone blocked"
            );
            self.game_over = true;
            return false;
        }

        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        debug!(
            kind = piece.kind.as_str(),
            rotation = piece.rotation.index(),
            piece = self.pieces_spawned,
            "piece spawned"
        );
        self.active = Some(piece);
        true
    }

    /// Apply a player command to the falling piece as one transaction
    pub fn apply_action(&mut self, action: GameAction) -> Result<(), MoveError> {
        let Some(piece) = self.active.as_mut() else {
            return Err(MoveError::NoActivePiece);
        };
        transaction::apply(&mut self.grid, piece, action)
    }

    /// Force the falling piece down one row.
    ///
    /// If the move is rejected the piece lands: its cells stay on the grid,
    /// complete rows are cleared and the boundary row is checked. The next
    /// piece is not spawned here.
    pub fn step_gravity(&mut self) -> Gravity {
        let Some(mut piece) = self.active else {
            return Gravity::Idle;
        };

        match transaction::apply(&mut self.grid, &mut piece, GameAction::MoveDown) {
            Ok(()) => {
                self.active = Some(piece);
                Gravity::Fell
            }
            Err(cause) => {
                self.active = None;
                let cleared = clear_complete_rows(&mut self.grid);
                self.rows_cleared += cleared.len() as u32;
                if !cleared.is_empty() {
                    info!(rows = ?cleared.as_slice(), total = self.rows_cleared, "rows cleared");
                }

                self.game_over = is_game_over(&self.grid);
                debug!(
                    kind = piece.kind.as_str(),
                    x = piece.x,
                    y = piece.y,
                    %cause,
                    "piece landed"
                );
                if self.game_over {
                    info!(
                        pieces = self.pieces_spawned,
                        rows = self.rows_cleared,
                        "game over"
                    );
                }

                Gravity::Landed(Landing {
                    piece,
                    cause,
                    cleared,
                    game_over: self.game_over,
                })
            }
        }
    }

    /// Replace the falling piece, writing it onto an otherwise unchanged grid.
    ///
    /// Intended for tests and tools that need a specific piece in play.
    /// Returns false if the piece does not fit; the old piece stays in place.
    pub fn set_active(&mut self, piece: ActivePiece) -> bool {
        if let Some(old) = self.active {
            if !transaction::replace(&mut self.grid, &old, &piece) {
                return false;
            }
        } else if !transaction::place(&mut self.grid, &piece) {
            return false;
        }
        self.started = true;
        self.active = Some(piece);
        true
    }

    /// Mutable grid access for building test positions.
    ///
    /// Callers must keep the active piece's cells filled.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, PieceKind, Rotation, GRID_WIDTH};

    #[test]
    fn start_spawns_one_piece() {
        let mut state = GameState::new(12345);
        assert!(!state.started());
        assert!(state.active().is_none());

        state.start();
        assert!(state.started());
        let piece = state.active().unwrap();
        assert_eq!(state.grid().filled_count(), 4);
        for (x, y) in piece.cells() {
            assert!(state.grid().is_filled(x, y));
        }

        // Starting twice does not spawn again.
        state.start();
        assert_eq!(state.pieces_spawned(), 1);
    }

    #[test]
    fn gravity_eventually_lands_on_floor() {
        let mut state = GameState::new(1);
        assert!(state.set_active(ActivePiece::new(PieceKind::O, Rotation::North)));

        let mut falls = 0;
        let landing = loop {
            match state.step_gravity() {
                Gravity::Fell => falls += 1,
                Gravity::Landed(landing) => break landing,
                Gravity::Idle => panic!("piece vanished"),
            }
        };

        // Lowest cell starts at 15 and stops at 0.
        assert_eq!(falls, 15);
        assert_eq!(landing.cause, MoveError::ReachedBottomEdge);
        assert!(!landing.game_over);
        assert!(state.active().is_none());
        assert_eq!(state.grid().filled_count(), 4);
        assert_eq!(state.step_gravity(), Gravity::Idle);
    }

    #[test]
    fn landing_clears_completed_row() {
        let mut state = GameState::new(1);
        // Row 0 holes at x = 2 and 3, filled by a flat O piece.
        state.grid_mut().set(0, 0, Cell::Filled);
        state.grid_mut().set(1, 0, Cell::Filled);
        state.grid_mut().set(0, 1, Cell::Filled);
        state.grid_mut().set(1, 1, Cell::Filled);
        assert!(state.set_active(ActivePiece::at(PieceKind::O, Rotation::North, (2, 1))));

        match state.step_gravity() {
            Gravity::Landed(landing) => assert_eq!(landing.cleared.as_slice(), &[0, 1]),
            other => panic!("expected landing, got {other:?}"),
        }
        assert_eq!(state.rows_cleared(), 2);
        assert_eq!(state.grid().filled_count(), 0);
    }

    #[test]
    fn blocked_spawn_ends_session() {
        let mut state = GameState::new(3);
        for y in 14..19 {
            for x in 0..GRID_WIDTH as i8 {
                state.grid_mut().set(x, y, Cell::Filled);
            }
        }
        assert!(!state.spawn_piece());
        assert!(state.game_over());
        assert!(state.active().is_none());
        assert_eq!(state.pieces_spawned(), 0);
    }

    #[test]
    fn restart_resets_grid_and_counters() {
        let mut state = GameState::new(8);
        state.start();
        state.grid_mut().set(0, 0, Cell::Filled);
        state.restart();

        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.pieces_spawned(), 1);
        assert_eq!(state.grid().filled_count(), 4);
        assert!(!state.game_over());
    }

    #[test]
    fn equal_seeds_replay_the_same_session() {
        for seed in [0, 1, 634_785_765, u32::MAX] {
            let mut a = GameState::new(seed);
            let mut b = GameState::new(seed);
            a.start();
            b.start();
            for _ in 0..40 {
                assert_eq!(a.active(), b.active(), "seed {seed}");
                if a.game_over() {
                    break;
                }
                assert_eq!(a.step_gravity(), b.step_gravity());
                if a.active().is_none() {
                    assert_eq!(a.spawn_piece(), b.spawn_piece());
                }
            }
            assert_eq!(a.grid(), b.grid());
        }
    }

    #[test]
    fn commands_without_piece_are_rejected() {
        let mut state = GameState::new(1);
        assert_eq!(
            state.apply_action(GameAction::MoveLeft),
            Err(MoveError::NoActivePiece)
        );
    }
}
