//! Piece spawner - picks the next shape and orientation.

use crate::active::ActivePiece;
use crate::rng::SimpleRng;
use crate::types::{PieceKind, Rotation, PIECE_KINDS};

/// Chooses pieces uniformly at random.
///
/// The shape is uniform over all seven variants. The orientation is uniform
/// over all four, except the straight piece which always enters upright.
/// Every piece enters at the spawn center; the spawner does not look at the
/// grid.
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: SimpleRng,
}

impl Spawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    pub fn next_piece(&mut self) -> ActivePiece {
        let kind = PieceKind::ALL[self.rng.next_range(PIECE_KINDS as u32) as usize];
        let rotation = match kind {
            PieceKind::I => Rotation::North,
            _ => Rotation::from_index(self.rng.next_range(4) as usize),
        };
        ActivePiece::new(kind, rotation)
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(1)
    }
}
