//! Line clear compactor.
//!
//! Scans the fall axis from row 0 upwards. Complete rows are dropped and
//! every incomplete row is copied down by the number of complete rows seen
//! so far. The rows vacated at the top are then reset to empty.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::GRID_LENGTH;

/// A landed piece spans at most four rows, so at most four clear at once.
pub const MAX_CLEARED_ROWS: usize = 4;

/// Rows removed by one compaction pass, lowest first
pub type ClearedRows = ArrayVec<u8, MAX_CLEARED_ROWS>;

/// Remove every complete row and close the gaps.
///
/// Returns the fall-axis indices (before compaction) of the removed rows.
pub fn clear_complete_rows(grid: &mut Grid) -> ClearedRows {
    let mut cleared = ClearedRows::new();
    let length = GRID_LENGTH as usize;
    let mut shift = 0;

    for y in 0..length {
        if grid.is_row_complete(y) {
            shift += 1;
            // More than four can only come from a hand-built grid; keep
            // compacting and report the first four.
            let _ = cleared.try_push(y as u8);
        } else if shift > 0 {
            grid.copy_row(y, y - shift);
        }
    }

    for y in length - shift..length {
        grid.clear_row(y);
    }

    cleared
}
