//! Gravity scheduler - the tick loop of a session.
//!
//! Each tick samples the input, applies the sampled commands in order, then
//! forces the piece down one row:
//!
//! - the piece fell: render, then wait one tick period
//! - the piece landed: render the compacted grid, then either end the session
//!   (boundary row occupied) or spawn the next piece and continue at once
//!
//! I/O is delegated to a [`Frontend`] so the loop itself stays deterministic.

use std::ops::ControlFlow;
use std::time::Duration;

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::game_state::{GameState, Gravity};
use crate::types::{GameAction, MAX_COMMANDS_PER_TICK, TICK_MS};

/// Commands sampled for one tick, in application order
pub type Commands = ArrayVec<GameAction, MAX_COMMANDS_PER_TICK>;

/// The scheduler's view of the outside world.
pub trait Frontend {
    type Error;

    /// Sample the input device and turn the reading into commands.
    fn sample_commands(&mut self) -> Result<Commands, Self::Error>;

    /// Draw the current grid.
    fn render(&mut self, state: &GameState) -> Result<(), Self::Error>;

    /// Let one tick period elapse.
    ///
    /// Returning `Break` stops the session before the next tick starts.
    fn wait(&mut self, period: Duration) -> Result<ControlFlow<()>, Self::Error>;
}

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver,
    /// The frontend asked to stop between ticks.
    Stopped,
}

/// Totals reported when a session stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    pub pieces: u32,
    pub rows_cleared: u32,
    pub ticks: u64,
}

/// Drives one gravity step per tick.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    tick: Duration,
}

impl Scheduler {
    pub fn new(tick: Duration) -> Self {
        Self { tick }
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Run the session until game over or until the frontend stops it.
    ///
    /// Starts the session if it has not been started yet.
    pub fn run<F: Frontend>(
        &self,
        state: &mut GameState,
        frontend: &mut F,
    ) -> Result<SessionSummary, F::Error> {
        state.start();
        let mut ticks: u64 = 0;

        loop {
            if state.game_over() {
                frontend.render(state)?;
                return Ok(summary(state, SessionEnd::GameOver, ticks));
            }
            if state.active().is_none() && !state.spawn_piece() {
                continue;
            }

            ticks += 1;
            for action in frontend.sample_commands()? {
                if let Err(err) = state.apply_action(action) {
                    trace!(action = action.as_str(), %err, "command rejected");
                }
            }

            match state.step_gravity() {
                Gravity::Fell => {
                    frontend.render(state)?;
                    if frontend.wait(self.tick)?.is_break() {
                        debug!(ticks, "session stopped by frontend");
                        return Ok(summary(state, SessionEnd::Stopped, ticks));
                    }
                }
                Gravity::Landed(landing) => {
                    if landing.game_over {
                        // Rendered at the top of the loop.
                        continue;
                    }
                    frontend.render(state)?;
                }
                Gravity::Idle => {}
            }
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_MS as u64))
    }
}

fn summary(state: &GameState, end: SessionEnd, ticks: u64) -> SessionSummary {
    SessionSummary {
        end,
        pieces: state.pieces_spawned(),
        rows_cleared: state.rows_cleared(),
        ticks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    /// Feeds no input, counts renders and stops after a fixed number of waits.
    struct Idle {
        renders: usize,
        waits: usize,
        stop_after: usize,
    }

    impl Frontend for Idle {
        type Error = Infallible;

        fn sample_commands(&mut self) -> Result<Commands, Infallible> {
            Ok(Commands::new())
        }

        fn render(&mut self, _state: &GameState) -> Result<(), Infallible> {
            self.renders += 1;
            Ok(())
        }

        fn wait(&mut self, period: Duration) -> Result<ControlFlow<()>, Infallible> {
            assert_eq!(period, Duration::from_millis(500));
            self.waits += 1;
            if self.waits >= self.stop_after {
                Ok(ControlFlow::Break(()))
            } else {
                Ok(ControlFlow::Continue(()))
            }
        }
    }

    #[test]
    fn frontend_can_stop_between_ticks() {
        let mut state = GameState::new(42);
        let mut frontend = Idle {
            renders: 0,
            waits: 0,
            stop_after: 3,
        };

        let summary = Scheduler::default().run(&mut state, &mut frontend).unwrap();
        assert_eq!(summary.end, SessionEnd::Stopped);
        assert_eq!(summary.ticks, 3);
        assert_eq!(summary.pieces, 1);
        assert_eq!(frontend.renders, 3);
        assert!(state.active().is_some());
    }

    #[test]
    fn idle_session_stacks_until_game_over() {
        let mut state = GameState::new(7);
        let mut frontend = Idle {
            renders: 0,
            waits: 0,
            stop_after: usize::MAX,
        };

        let summary = Scheduler::default().run(&mut state, &mut frontend).unwrap();
        assert_eq!(summary.end, SessionEnd::GameOver);
        assert!(state.game_over());
        assert!(state.active().is_none());
        assert_eq!(summary.pieces, state.pieces_spawned());
        // A 4-wide column of pieces reaches row 15 within a few dozen drops.
        assert!(summary.pieces >= 2 && summary.pieces < 80);
    }
}
