//! LcdView: maps a `core::GameState` into a terminal framebuffer.
//!
//! Pure (no I/O). The two glyph lines sit inside a bezel, centred in the
//! viewport, with a status line underneath.

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::glyph::{encode, DISPLAY_LINES};
use crate::types::GRID_LENGTH;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BEZEL: CellStyle = CellStyle::new(Rgb::new(170, 170, 170), Rgb::new(20, 20, 20));
const SCREEN: CellStyle = CellStyle::new(Rgb::new(25, 45, 20), Rgb::new(140, 180, 50));
const STATUS: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));
const ALERT: CellStyle = CellStyle::new(Rgb::new(240, 80, 60), Rgb::new(0, 0, 0)).bold();

/// Columns of padding between the bezel and the glyphs.
const PAD: u16 = 1;

#[derive(Debug, Clone, Copy, Default)]
pub struct LcdView {
    show_help: bool,
}

impl LcdView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key help line under the status line.
    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Outer size of the bezel: glyph columns plus padding and border.
    pub fn frame_size() -> (u16, u16) {
        (GRID_LENGTH as u16 + 2 * PAD + 2, DISPLAY_LINES as u16 + 2)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(STATUS.into_cell(' '));

        let (frame_w, frame_h) = Self::frame_size();
        let block_h = frame_h + 1 + u16::from(self.show_help);
        let x0 = viewport.width.saturating_sub(frame_w) / 2;
        let y0 = viewport.height.saturating_sub(block_h) / 2;

        draw_bezel(fb, x0, y0, frame_w, frame_h);
        fb.fill_rect(x0 + 1, y0 + 1, frame_w - 2, frame_h - 2, ' ', SCREEN);

        for (line, glyphs) in encode(state.grid()).iter().enumerate() {
            let y = y0 + 1 + line as u16;
            for (i, glyph) in glyphs.iter().enumerate() {
                fb.put_char(x0 + 1 + PAD + i as u16, y, glyph.as_char(), SCREEN);
            }
        }

        let status_y = y0 + frame_h;
        if state.game_over() {
            put_centered(fb, x0, frame_w, status_y, "GAME OVER", ALERT);
        } else {
            let text = format!(
                "PCS {:>3}  ROWS {:>3}",
                state.pieces_spawned(),
                state.rows_cleared()
            );
            put_centered(fb, x0, frame_w, status_y, &text, STATUS);
        }

        if self.show_help {
            put_centered(fb, x0, frame_w, status_y + 1, "hjkl/arrows  q quit", STATUS);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }
}

fn draw_bezel(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let right = x + w - 1;
    let bottom = y + h - 1;
    for cx in x + 1..right {
        fb.put_char(cx, y, '─', BEZEL);
        fb.put_char(cx, bottom, '─', BEZEL);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', BEZEL);
        fb.put_char(right, cy, '│', BEZEL);
    }
    fb.put_char(x, y, '┌', BEZEL);
    fb.put_char(right, y, '┐', BEZEL);
    fb.put_char(x, bottom, '└', BEZEL);
    fb.put_char(right, bottom, '┘', BEZEL);
}

fn put_centered(fb: &mut FrameBuffer, x0: u16, w: u16, y: u16, text: &str, style: CellStyle) {
    let len = text.chars().count() as u16;
    let x = x0 + w.saturating_sub(len) / 2;
    fb.put_str(x, y, text, style);
}
