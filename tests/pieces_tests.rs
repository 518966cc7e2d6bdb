//! Offset table and active piece geometry tests

use lcd_tetris::core::{cells_at, get_offsets, ActivePiece, SPAWN_POSITION};
use lcd_tetris::types::{GameAction, PieceKind, Rotation};

#[test]
fn test_spawn_position() {
    assert_eq!(SPAWN_POSITION, (2, 16));
    let piece = ActivePiece::new(PieceKind::T, Rotation::North);
    assert_eq!(piece.center(), (2, 16));
}

#[test]
fn test_o_piece_auxiliaries_at_spawn() {
    let piece = ActivePiece::new(PieceKind::O, Rotation::North);
    assert_eq!(piece.aux_cells(), [(3, 16), (2, 15), (3, 15)]);
    assert_eq!(piece.cells(), [(2, 16), (3, 16), (2, 15), (3, 15)]);
}

#[test]
fn test_every_piece_has_four_distinct_cells() {
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let cells = cells_at(kind, rotation, (5, 5));
            for i in 0..4 {
                for j in i + 1..4 {
                    assert_ne!(cells[i], cells[j], "{kind:?} {rotation:?}");
                }
            }
        }
    }
}

#[test]
fn test_four_rotations_restore_cells() {
    for kind in PieceKind::ALL {
        for start in Rotation::ALL {
            let mut piece = ActivePiece::at(kind, start, (5, 5));
            let original = piece.cells();
            for _ in 0..4 {
                piece = piece.candidate(GameAction::Rotate);
            }
            assert_eq!(piece.rotation, start);
            assert_eq!(piece.cells(), original);
        }
    }
}

#[test]
fn test_rotate_keeps_center() {
    let piece = ActivePiece::at(PieceKind::L, Rotation::North, (1, 9));
    let rotated = piece.candidate(GameAction::Rotate);
    assert_eq!(rotated.center(), (1, 9));
    assert_eq!(rotated.rotation, Rotation::East);
    assert_eq!(rotated.aux_cells().to_vec(), {
        let [a, b, c] = get_offsets(PieceKind::L, Rotation::East);
        vec![(1 + a.0, 9 + a.1), (1 + b.0, 9 + b.1), (1 + c.0, 9 + c.1)]
    });
}

#[test]
fn test_z_turns_the_same_way_as_s() {
    // Orientation k+1 is orientation k turned a quarter counter-clockwise.
    for kind in [PieceKind::S, PieceKind::Z] {
        let o0 = get_offsets(kind, Rotation::North);
        let o1 = get_offsets(kind, Rotation::West);
        assert_eq!(o0.map(|(dx, dy)| (-dy, dx)), o1, "{kind:?}");
    }
}

#[test]
fn test_move_candidates() {
    let piece = ActivePiece::at(PieceKind::I, Rotation::North, (1, 10));
    assert_eq!(piece.candidate(GameAction::MoveLeft).center(), (0, 10));
    assert_eq!(piece.candidate(GameAction::MoveRight).center(), (2, 10));
    assert_eq!(piece.candidate(GameAction::MoveDown).center(), (1, 9));
}
