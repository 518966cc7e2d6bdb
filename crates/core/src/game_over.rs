//! Game over detection.

use crate::grid::Grid;
use crate::types::GAME_OVER_ROW;

/// Check the boundary row after a landing and compaction.
///
/// Any filled cell on [`GAME_OVER_ROW`] means the stack has grown into the
/// spawn zone and the session ends.
pub fn is_game_over(grid: &Grid) -> bool {
    grid.is_row_occupied(GAME_OVER_ROW as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn only_the_boundary_row_counts() {
        let mut grid = Grid::new();
        grid.set(0, 14, Cell::Filled);
        grid.set(3, 16, Cell::Filled);
        assert!(!is_game_over(&grid));

        grid.set(3, 15, Cell::Filled);
        assert!(is_game_over(&grid));
    }
}
