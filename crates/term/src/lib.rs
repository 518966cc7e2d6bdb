//! Terminal rendition of the two-line character LCD.
//!
//! The display contract is the glyph encoding in [`glyph`]: every pair of
//! width-axis cells at one fall-axis index becomes one of four half-block
//! characters, giving two display lines of 19 glyphs. [`LcdView`] lays those
//! lines out inside a bezel, and [`TerminalRenderer`] flushes the resulting
//! framebuffer to a real terminal.
//!
//! Only [`renderer`] performs I/O; the rest is pure and unit-tested.

pub mod fb;
pub mod glyph;
pub mod lcd_view;
pub mod renderer;

pub use lcd_tetris_core as core;
pub use lcd_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use glyph::{encode, encode_line, Glyph, GlyphLine, DISPLAY_LINES};
pub use lcd_view::{LcdView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
