//! Grid module - the occupancy matrix of the play area
//!
//! The grid is 4 cells wide and 19 cells long. Each cell is either empty or
//! filled; the falling piece and landed blocks are not distinguished here.
//! Uses a flat array (one fall-axis row of `GRID_WIDTH` cells after another)
//! so rows can be moved with `copy_within`.
//!
//! Coordinates: (x, y) where x ranges 0..3 across the width and y ranges
//! 0..18 along the fall axis. Gravity moves pieces towards y = 0.

use crate::types::{Cell, Position, GRID_LENGTH, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_LENGTH as usize);

/// The play area - 4 x 19 cells using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major along the fall axis (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::in_bounds(x, y) {
            Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Check if (x, y) lies inside the play area
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < GRID_WIDTH as i8 && y >= 0 && y < GRID_LENGTH as i8
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn length(&self) -> u8 {
        GRID_LENGTH
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the grid and filled
    pub fn is_filled(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Filled))
    }

    /// Write the same cell value at each position.
    ///
    /// Positions must be in bounds; callers validate first.
    pub(crate) fn paint(&mut self, positions: &[Position], cell: Cell) {
        for &(x, y) in positions {
            let written = self.set(x, y, cell);
            debug_assert!(written, "paint outside grid at ({x}, {y})");
        }
    }

    /// Cells of one fall-axis row, `None` past the top of the grid
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= GRID_LENGTH as usize {
            return None;
        }
        let start = y * GRID_WIDTH as usize;
        Some(&self.cells[start..start + GRID_WIDTH as usize])
    }

    /// Check if every cell of a fall-axis row is filled
    pub fn is_row_complete(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(Cell::is_filled))
    }

    /// Check if any cell of a fall-axis row is filled
    pub fn is_row_occupied(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().any(Cell::is_filled))
    }

    /// Copy row `src` over row `dst`
    pub(crate) fn copy_row(&mut self, src: usize, dst: usize) {
        let width = GRID_WIDTH as usize;
        self.cells
            .copy_within(src * width..(src + 1) * width, dst * width);
    }

    /// Reset one row to empty
    pub(crate) fn clear_row(&mut self, y: usize) {
        let width = GRID_WIDTH as usize;
        self.cells[y * width..(y + 1) * width].fill(Cell::Empty);
    }

    /// Iterate over the positions of all filled cells
    pub fn filled_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_filled())
            .map(|(idx, _)| {
                let width = GRID_WIDTH as usize;
                ((idx % width) as i8, (idx / width) as i8)
            })
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(3, 0), Some(3));
        assert_eq!(Grid::index(0, 1), Some(4));
        assert_eq!(Grid::index(3, 18), Some(75));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(4, 0), None);
        assert_eq!(Grid::index(0, 19), None);
        assert_eq!(Grid::index(0, -1), None);
    }

    #[test]
    fn test_copy_and_clear_row() {
        let mut grid = Grid::new();
        grid.set(1, 2, Cell::Filled);
        grid.set(3, 2, Cell::Filled);

        grid.copy_row(2, 7);
        assert_eq!(grid.row(7), grid.row(2));
        assert!(grid.row(7).is_some());
        assert!(grid.is_filled(1, 7));

        grid.clear_row(2);
        assert!(!grid.is_row_occupied(2));
        assert!(grid.is_row_occupied(7));
    }

    #[test]
    fn test_filled_positions_reports_coordinates() {
        let mut grid = Grid::new();
        grid.set(2, 16, Cell::Filled);
        grid.set(0, 0, Cell::Filled);

        let filled: Vec<_> = grid.filled_positions().collect();
        assert_eq!(filled, vec![(0, 0), (2, 16)]);
        assert_eq!(grid.filled_count(), 2);
    }
}
