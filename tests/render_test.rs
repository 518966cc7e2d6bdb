//! Glyph encoding and LCD view through the facade

use lcd_tetris::core::{ActivePiece, GameState, Grid};
use lcd_tetris::term::{encode, encode_full_into, Glyph, LcdView, Viewport};
use lcd_tetris::types::{Cell, PieceKind, Rotation};

fn codes(line: &[Glyph]) -> Vec<u8> {
    line.iter().map(Glyph::code).collect()
}

#[test]
fn test_empty_grid_is_blank() {
    let lines = encode(&Grid::new());
    for line in lines {
        assert!(line.iter().all(|g| *g == Glyph::Blank));
    }
}

#[test]
fn test_spawned_o_piece_codes() {
    let mut state = GameState::new(1);
    assert!(state.set_active(ActivePiece::new(PieceKind::O, Rotation::North)));

    let [line0, line1] = encode(state.grid());
    assert!(line0.iter().all(|g| *g == Glyph::Blank));
    let mut expected = vec![0u8; 19];
    expected[15] = 3;
    expected[16] = 3;
    assert_eq!(codes(&line1), expected);
}

#[test]
fn test_halves_follow_column_parity() {
    let mut grid = Grid::new();
    grid.set(0, 2, Cell::Filled); // top of line 0
    grid.set(1, 4, Cell::Filled); // bottom of line 0
    grid.set(2, 6, Cell::Filled); // top of line 1
    grid.set(3, 6, Cell::Filled);

    let [line0, line1] = encode(&grid);
    assert_eq!(line0[2].code(), 1);
    assert_eq!(line0[4].code(), 2);
    assert_eq!(line1[6].code(), 3);
    assert_eq!(line1[2].code(), 0);
}

#[test]
fn test_lcd_view_shows_glyph_chars() {
    let mut state = GameState::new(1);
    assert!(state.set_active(ActivePiece::at(PieceKind::I, Rotation::West, (1, 0))));

    let fb = LcdView::new().render(&state, Viewport::new(30, 8));
    let text: String = (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect();
    // A horizontal I on row 0 fills both lines at fall index 0.
    assert_eq!(text.matches('█').count(), 2);
    assert!(text.contains("PCS"));
}

#[test]
fn test_full_frame_encodes_every_cell() {
    let state = GameState::new(1);
    let fb = LcdView::new().render(&state, Viewport::new(25, 6));
    let mut out = Vec::new();
    encode_full_into(&fb, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches('┌').count(), 1);
    assert_eq!(text.matches('│').count(), 4);
}
