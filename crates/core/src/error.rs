//! Rejection classifications for placements and piece transactions.
//!
//! None of these are fatal: a rejected transaction has already been rolled
//! back by the time the caller sees the error.

use thiserror::Error;

/// Why a candidate set of cells cannot be placed on the grid.
///
/// Variants are listed in the order the validator checks them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementError {
    #[error("cell left of the grid (negative width coordinate)")]
    OutOfBoundsNegativeWidth,
    #[error("cell right of the grid (width coordinate too large)")]
    OutOfBoundsMaxWidth,
    #[error("cell below the grid (negative fall-axis coordinate)")]
    OutOfBoundsNegativeDepth,
    #[error("cell beyond the top of the grid (fall-axis coordinate too large)")]
    OutOfBoundsMaxDepth,
    #[error("cell collides with a landed block")]
    Collision,
}

/// Result classification of a rejected move or rotation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveError {
    /// The piece already touches fall-axis row 0; nothing was attempted.
    #[error("piece has reached the bottom edge")]
    ReachedBottomEdge,
    #[error("blocked: {0}")]
    BlockedOutOfBounds(PlacementError),
    #[error("blocked by a landed block")]
    BlockedByCollision,
    /// There is no falling piece to move.
    #[error("no active piece")]
    NoActivePiece,
}

impl MoveError {
    /// The validator classification behind this rejection, if validation ran.
    pub fn placement(&self) -> Option<PlacementError> {
        match self {
            MoveError::ReachedBottomEdge | MoveError::NoActivePiece => None,
            MoveError::BlockedOutOfBounds(err) => Some(*err),
            MoveError::BlockedByCollision => Some(PlacementError::Collision),
        }
    }
}

impl From<PlacementError> for MoveError {
    fn from(err: PlacementError) -> Self {
        match err {
            PlacementError::Collision => MoveError::BlockedByCollision,
            other => MoveError::BlockedOutOfBounds(other),
        }
    }
}
