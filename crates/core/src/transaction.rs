//! Piece transactions - atomic move and rotate against the grid.
//!
//! Every move or rotation runs the same steps:
//!
//! 1. lift the piece's four cells off the grid
//! 2. derive the candidate piece
//! 3. validate the candidate against the grid without the lifted cells
//! 4. commit: write the candidate's cells and update the piece, or
//! 5. roll back: write the original cells again and leave the piece alone
//!
//! The lifted window is a guard that holds the only `&mut Grid`, and rollback
//! happens in its `Drop`, so a half-applied grid is never visible outside
//! this module.

use tracing::trace;

use crate::active::ActivePiece;
use crate::error::MoveError;
use crate::grid::Grid;
use crate::types::{Cell, GameAction, Position};
use crate::validate::validate;

/// A piece whose cells are temporarily cleared from the grid.
struct Lifted<'g> {
    grid: &'g mut Grid,
    original: [Position; 4],
    committed: bool,
}

impl<'g> Lifted<'g> {
    fn lift(grid: &'g mut Grid, piece: &ActivePiece) -> Self {
        let original = piece.cells();
        grid.paint(&original, Cell::Empty);
        Self {
            grid,
            original,
            committed: false,
        }
    }

    fn grid(&self) -> &Grid {
        &*self.grid
    }

    fn commit(mut self, cells: &[Position; 4]) {
        self.grid.paint(cells, Cell::Filled);
        self.committed = true;
    }
}

impl Drop for Lifted<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.grid.paint(&self.original, Cell::Filled);
        }
    }
}

/// Apply one command to the active piece.
///
/// On success the grid and `piece` both reflect the new position. On failure
/// neither has changed and the error says why.
pub fn apply(
    grid: &mut Grid,
    piece: &mut ActivePiece,
    action: GameAction,
) -> Result<(), MoveError> {
    if piece.at_bottom_edge() {
        return Err(MoveError::ReachedBottomEdge);
    }

    let lifted = Lifted::lift(grid, piece);
    let candidate = piece.candidate(action);
    let cells = candidate.cells();

    match validate(lifted.grid(), &cells) {
        Ok(()) => {
            lifted.commit(&cells);
            *piece = candidate;
            Ok(())
        }
        Err(err) => {
            trace!(
                action = action.as_str(),
                ?err,
                kind = piece.kind.as_str(),
                "transaction rolled back"
            );
            Err(err.into())
        }
    }
}

/// Write a freshly spawned piece onto the grid.
///
/// Returns false, writing nothing, if any of its cells is out of bounds or
/// already filled.
pub fn place(grid: &mut Grid, piece: &ActivePiece) -> bool {
    let cells = piece.cells();
    if validate(grid, &cells).is_err() {
        return false;
    }
    grid.paint(&cells, Cell::Filled);
    true
}

/// Swap one piece on the grid for another in a single transaction.
///
/// Returns false, leaving the grid unchanged, if `new` does not fit once
/// `old` is lifted.
pub fn replace(grid: &mut Grid, old: &ActivePiece, new: &ActivePiece) -> bool {
    let lifted = Lifted::lift(grid, old);
    let cells = new.cells();
    if validate(lifted.grid(), &cells).is_err() {
        return false;
    }
    lifted.commit(&cells);
    true
}
