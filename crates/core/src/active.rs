//! The falling piece.

use crate::pieces::{cells_at, SPAWN_POSITION};
use crate::types::{GameAction, PieceKind, Position, Rotation};

/// Active falling piece
///
/// Only the shape, orientation and center are stored; the three auxiliary
/// cells are always derived from the offset table so they cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at the spawn center
    pub fn new(kind: PieceKind, rotation: Rotation) -> Self {
        Self::at(kind, rotation, SPAWN_POSITION)
    }

    pub fn at(kind: PieceKind, rotation: Rotation, (x, y): Position) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    pub fn center(&self) -> Position {
        (self.x, self.y)
    }

    /// All four cells, center first
    pub fn cells(&self) -> [Position; 4] {
        cells_at(self.kind, self.rotation, self.center())
    }

    /// The three auxiliary cells
    pub fn aux_cells(&self) -> [Position; 3] {
        let [_, b1, b2, b3] = self.cells();
        [b1, b2, b3]
    }

    /// Whether any cell sits on fall-axis row 0
    pub fn at_bottom_edge(&self) -> bool {
        self.cells().iter().any(|&(_, y)| y == 0)
    }

    /// The piece a command would produce, without checking the grid
    pub fn candidate(&self, action: GameAction) -> Self {
        match action.delta() {
            Some((dx, dy)) => Self {
                x: self.x + dx,
                y: self.y + dy,
                ..*self
            },
            None => Self {
                rotation: self.rotation.rotate(),
                ..*self
            },
        }
    }
}
