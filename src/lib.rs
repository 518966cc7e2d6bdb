//! LCD Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `lcd_tetris::{core,input,term,types}`
//! and holds the run-time configuration of the terminal binary.

pub mod config;

pub use lcd_tetris_core as core;
pub use lcd_tetris_input as input;
pub use lcd_tetris_term as term;
pub use lcd_tetris_types as types;

pub use config::RunConfig;
