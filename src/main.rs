//! Terminal LCD Tetris runner (default binary).
//!
//! Emulates the two-line LCD with half-block characters and the analog
//! joystick with the keyboard. The gravity loop itself lives in
//! `core::Scheduler`; this file only supplies the terminal [`Frontend`].

use std::fs::File;
use std::ops::ControlFlow;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lcd_tetris::core::{Commands, Frontend, GameState, Scheduler, SessionEnd};
use lcd_tetris::input::{should_quit, InputAdapter, KeyboardJoystick};
use lcd_tetris::term::{FrameBuffer, LcdView, TerminalRenderer, Viewport};
use lcd_tetris::RunConfig;

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    init_logging(config.log_path.as_deref())?;

    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;

    let result = run(&mut renderer, &config);

    // Always try to restore terminal state.
    let _ = renderer.exit();
    result
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(renderer: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let scheduler = Scheduler::new(config.tick);
    let mut state = GameState::new(config.seed);
    let mut frontend = Terminal::new(renderer);
    info!(seed = config.seed, tick_ms = config.tick.as_millis() as u64, "starting");

    loop {
        let summary = scheduler.run(&mut state, &mut frontend)?;
        info!(
            episode = state.episode_id(),
            pieces = summary.pieces,
            rows = summary.rows_cleared,
            ticks = summary.ticks,
            end = ?summary.end,
            "session ended"
        );

        match summary.end {
            SessionEnd::Stopped => return Ok(()),
            SessionEnd::GameOver if config.restart => {
                // Leave GAME OVER on screen for one tick.
                if frontend.wait(scheduler.tick())?.is_break() {
                    return Ok(());
                }
                state.restart();
            }
            SessionEnd::GameOver => {
                while frontend.wait(scheduler.tick())?.is_continue() {}
                return Ok(());
            }
        }
    }
}

/// Terminal rendition of the LCD and the joystick.
struct Terminal<'a> {
    renderer: &'a mut TerminalRenderer,
    view: LcdView,
    fb: FrameBuffer,
    input: InputAdapter<KeyboardJoystick>,
}

impl<'a> Terminal<'a> {
    fn new(renderer: &'a mut TerminalRenderer) -> Self {
        Self {
            renderer,
            view: LcdView::new().with_help(true),
            fb: FrameBuffer::new(0, 0),
            input: InputAdapter::new(KeyboardJoystick::new()),
        }
    }
}

impl Frontend for Terminal<'_> {
    type Error = anyhow::Error;

    fn sample_commands(&mut self) -> Result<Commands> {
        Ok(self.input.sample())
    }

    fn render(&mut self, state: &GameState) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view.render_into(state, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw(&self.fb)
    }

    /// Collect key presses until the period has elapsed or a quit key is hit.
    fn wait(&mut self, period: Duration) -> Result<ControlFlow<()>> {
        let deadline = Instant::now() + period;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if timeout.is_zero() {
                return Ok(ControlFlow::Continue(()));
            }
            if !event::poll(timeout)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(ControlFlow::Break(()));
                    }
                    self.input.source_mut().handle_key(key);
                }
                Event::Resize(..) => self.renderer.invalidate(),
                _ => {}
            }
        }
    }
}
