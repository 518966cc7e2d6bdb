//! Movement validator - pure bounds and collision checks.
//!
//! The validator only reads the grid. A piece's own cells must already be
//! lifted off the grid (see [`crate::transaction`]) or it collides with itself.

use crate::error::PlacementError;
use crate::grid::Grid;
use crate::types::{Position, GRID_LENGTH, GRID_WIDTH};

/// Check whether `cells` can be placed on `grid`.
///
/// Failures are classified in a fixed priority order: negative width,
/// width overflow, negative depth, depth overflow, then collision. The
/// first rule any cell breaks wins, regardless of which cell breaks it.
pub fn validate(grid: &Grid, cells: &[Position]) -> Result<(), PlacementError> {
    if cells.iter().any(|&(x, _)| x < 0) {
        return Err(PlacementError::OutOfBoundsNegativeWidth);
    }
    if cells.iter().any(|&(x, _)| x >= GRID_WIDTH as i8) {
        return Err(PlacementError::OutOfBoundsMaxWidth);
    }
    if cells.iter().any(|&(_, y)| y < 0) {
        return Err(PlacementError::OutOfBoundsNegativeDepth);
    }
    if cells.iter().any(|&(_, y)| y >= GRID_LENGTH as i8) {
        return Err(PlacementError::OutOfBoundsMaxDepth);
    }
    if cells.iter().any(|&(x, y)| grid.is_filled(x, y)) {
        return Err(PlacementError::Collision);
    }
    Ok(())
}
