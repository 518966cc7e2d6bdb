//! Glyph encoding of the grid.
//!
//! Display line 0 shows width columns (0, 1), line 1 shows (2, 3). Within a
//! pair the lower column is the *top* half of the character. Glyphs run
//! left-to-right in increasing fall-axis order.
//!
//! | top | bottom | code | char |
//! |-----|--------|------|------|
//! | empty | empty | 0 | `' '` |
//! | filled | empty | 1 | `'▀'` |
//! | empty | filled | 2 | `'▄'` |
//! | filled | filled | 3 | `'█'` |

use crate::core::Grid;
use crate::types::{GRID_LENGTH, GRID_WIDTH};

/// Two display lines, one per pair of width columns.
pub const DISPLAY_LINES: usize = (GRID_WIDTH / 2) as usize;

/// One display line, indexed by fall-axis position.
pub type GlyphLine = [Glyph; GRID_LENGTH as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Glyph {
    #[default]
    Blank,
    Top,
    Bottom,
    Full,
}

impl Glyph {
    pub const ALL: [Glyph; 4] = [Glyph::Blank, Glyph::Top, Glyph::Bottom, Glyph::Full];

    pub fn from_halves(top: bool, bottom: bool) -> Self {
        match (top, bottom) {
            (false, false) => Glyph::Blank,
            (true, false) => Glyph::Top,
            (false, true) => Glyph::Bottom,
            (true, true) => Glyph::Full,
        }
    }

    /// The 2-bit character code.
    pub fn code(&self) -> u8 {
        match self {
            Glyph::Blank => 0,
            Glyph::Top => 1,
            Glyph::Bottom => 2,
            Glyph::Full => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// 8-row pattern uploaded to the character generator for this code.
    pub fn bitmap(&self) -> [u8; 8] {
        const ON: u8 = 0xFF;
        let (top, bottom) = match self {
            Glyph::Blank => (0, 0),
            Glyph::Top => (ON, 0),
            Glyph::Bottom => (0, ON),
            Glyph::Full => (ON, ON),
        };
        [top, top, top, top, bottom, bottom, bottom, bottom]
    }

    pub fn as_char(&self) -> char {
        match self {
            Glyph::Blank => ' ',
            Glyph::Top => '▀',
            Glyph::Bottom => '▄',
            Glyph::Full => '█',
        }
    }
}

/// Encode one display line.
///
/// `line` selects the column pair `(2 * line, 2 * line + 1)`.
pub fn encode_line(grid: &Grid, line: usize) -> GlyphLine {
    let top = (2 * line) as i8;
    let mut out = [Glyph::Blank; GRID_LENGTH as usize];
    for (y, glyph) in out.iter_mut().enumerate() {
        let y = y as i8;
        *glyph = Glyph::from_halves(grid.is_filled(top, y), grid.is_filled(top + 1, y));
    }
    out
}

/// Encode both display lines.
pub fn encode(grid: &Grid) -> [GlyphLine; DISPLAY_LINES] {
    [encode_line(grid, 0), encode_line(grid, 1)]
}
