//! Run-time configuration from environment variables.
//!
//! | variable | default |
//! |----------|---------|
//! | `LCD_TETRIS_TICK_MS` | 500 |
//! | `LCD_TETRIS_SEED` | derived from the wall clock |
//! | `LCD_TETRIS_RESTART` | `true` |
//! | `LCD_TETRIS_LOG` | unset (logging off) |
//!
//! Absent or unparsable values fall back to the default.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub tick: Duration,
    pub seed: u32,
    /// Start a new session after game over instead of exiting.
    pub restart: bool,
    pub log_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS as u64),
            seed: clock_seed(),
            restart: true,
            log_path: None,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms = lookup("LCD_TETRIS_TICK_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(TICK_MS as u64);

        let seed = lookup("LCD_TETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let restart = lookup("LCD_TETRIS_RESTART")
            .and_then(|s| parse_flag(&s))
            .unwrap_or(true);

        let log_path = lookup("LCD_TETRIS_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            tick: Duration::from_millis(tick_ms),
            seed,
            restart,
            log_path,
        }
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}
