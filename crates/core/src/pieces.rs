//! Pieces module - tetromino offset tables
//!
//! Every piece is a center cell plus three auxiliary cells. For each shape and
//! orientation the table stores the auxiliary offsets relative to the center.
//! Orientation `k + 1` is orientation `k` turned a quarter counter-clockwise
//! about the center (fall axis pointing away from row 0).

use crate::types::{PieceKind, Position, Rotation, SPAWN_X, SPAWN_Y};

/// Offset of an auxiliary cell relative to the piece center
pub type Offset = Position;

/// The three auxiliary offsets of a piece in one orientation
pub type AuxOffsets = [Offset; 3];

/// All four orientations of one shape, indexed by [`Rotation::index`]
type OffsetBlock = [AuxOffsets; 4];

// Diagrams show orientation North with the fall axis pointing up
// (gravity pulls towards the bottom of the diagram).

/// ```text
/// [1]
/// [C]
/// [2]
/// [3]
/// ```
const I_OFFSETS: OffsetBlock = [
    [(0, 1), (0, -1), (0, -2)],
    [(-1, 0), (1, 0), (2, 0)],
    [(0, -1), (0, 1), (0, 2)],
    [(1, 0), (-1, 0), (-2, 0)],
];

/// ```text
/// [C][1]
/// [2][3]
/// ```
const O_OFFSETS: OffsetBlock = [
    [(1, 0), (0, -1), (1, -1)],
    [(0, 1), (1, 0), (1, 1)],
    [(-1, 0), (0, 1), (-1, 1)],
    [(0, -1), (-1, 0), (-1, -1)],
];

/// ```text
/// [1][C][2]
///    [3]
/// ```
const T_OFFSETS: OffsetBlock = [
    [(-1, 0), (1, 0), (0, -1)],
    [(0, -1), (0, 1), (1, 0)],
    [(1, 0), (-1, 0), (0, 1)],
    [(0, 1), (0, -1), (-1, 0)],
];

/// ```text
///    [2][1]
/// [3][C]
/// ```
const S_OFFSETS: OffsetBlock = [
    [(1, 1), (0, 1), (-1, 0)],
    [(-1, 1), (-1, 0), (0, -1)],
    [(-1, -1), (0, -1), (1, 0)],
    [(1, -1), (1, 0), (0, 1)],
];

/// ```text
/// [1][2]
///    [C][3]
/// ```
const Z_OFFSETS: OffsetBlock = [
    [(-1, 1), (0, 1), (1, 0)],
    [(-1, -1), (-1, 0), (0, 1)],
    [(1, -1), (0, -1), (-1, 0)],
    [(1, 1), (1, 0), (0, -1)],
];

/// ```text
/// [1][2]
/// [C]
/// [3]
/// ```
const J_OFFSETS: OffsetBlock = [
    [(0, 1), (1, 1), (0, -1)],
    [(-1, 0), (-1, 1), (1, 0)],
    [(0, -1), (-1, -1), (0, 1)],
    [(1, 0), (1, -1), (-1, 0)],
];

/// ```text
/// [2][1]
///    [C]
///    [3]
/// ```
const L_OFFSETS: OffsetBlock = [
    [(0, 1), (-1, 1), (0, -1)],
    [(-1, 0), (-1, -1), (1, 0)],
    [(0, -1), (1, -1), (0, 1)],
    [(1, 0), (1, 1), (-1, 0)],
];

fn block(kind: PieceKind) -> &'static OffsetBlock {
    match kind {
        PieceKind::I => &I_OFFSETS,
        PieceKind::O => &O_OFFSETS,
        PieceKind::T => &T_OFFSETS,
        PieceKind::S => &S_OFFSETS,
        PieceKind::Z => &Z_OFFSETS,
        PieceKind::J => &J_OFFSETS,
        PieceKind::L => &L_OFFSETS,
    }
}

/// Get the auxiliary offsets for a piece kind and orientation
pub fn get_offsets(kind: PieceKind, rotation: Rotation) -> AuxOffsets {
    block(kind)[rotation.index()]
}

/// Absolute cell positions for a piece, center first
pub fn cells_at(kind: PieceKind, rotation: Rotation, center: Position) -> [Position; 4] {
    let (cx, cy) = center;
    let [b1, b2, b3] = get_offsets(kind, rotation);
    [
        (cx, cy),
        (cx + b1.0, cy + b1.1),
        (cx + b2.0, cy + b2.1),
        (cx + b3.0, cy + b3.1),
    ]
}

/// Spawn position for new pieces (x, y)
pub const SPAWN_POSITION: Position = (SPAWN_X, SPAWN_Y);

/// Quarter turn counter-clockwise about the center
pub fn turn_ccw((dx, dy): Offset) -> Offset {
    (-dy, dx)
}
