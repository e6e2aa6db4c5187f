use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};

use crate::game::{GameConfig, GameEngine, GameOverReason, GameState};
use crate::input::InputHandler;
use crate::render::Renderer;

/// Full-screen play: every key press is one turn.
pub struct TuiMode {
    engine: GameEngine,
    state: GameState,
    renderer: Renderer,
    input_handler: InputHandler,
}

impl TuiMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut engine = GameEngine::new(config);
        let state = engine.reset()?;

        Ok(Self {
            engine,
            state,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn run(&mut self) -> Result<GameOverReason> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal);
        let cleanup = self.cleanup_terminal(&mut terminal);

        prefer_loop_error(result, cleanup)
    }

    fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<GameOverReason> {
        loop {
            terminal
                .draw(|frame| {
                    self.renderer.render(frame, &self.state);
                })
                .context("Failed to draw frame")?;

            // Blocks until the next terminal event
            let event = event::read().context("Failed to read terminal event")?;
            let Event::Key(key) = event else {
                continue;
            };
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if !self.state.is_running() {
                break;
            }
            self.handle_key(key);
        }

        let reason = self.state.game_over_reason().unwrap_or(GameOverReason::Quit);
        log::info!(
            "Game over ({:?}) with score {} after {} turns",
            reason,
            self.state.score,
            self.state.steps
        );
        Ok(reason)
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.input_handler.handle_key_event(key).into_action() {
            Some(action) => {
                self.engine.step(&mut self.state, action);
            }
            None => self.state.end(GameOverReason::Quit),
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        // Try every step so one failure doesn't leave the screen half restored
        let raw_mode = disable_raw_mode().context("Failed to disable raw mode");
        let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen");
        let cursor = terminal.show_cursor().context("Failed to show cursor");
        raw_mode.and(screen).and(cursor)
    }
}

/// Report the game loop's error ahead of a terminal cleanup failure
fn prefer_loop_error<T>(result: Result<T>, cleanup: Result<()>) -> Result<T> {
    match (result, cleanup) {
        (Err(err), Err(cleanup_err)) => {
            log::warn!("Failed to restore terminal: {:#}", cleanup_err);
            Err(err)
        }
        (result, Ok(())) => result,
        (Ok(_), Err(cleanup_err)) => Err(cleanup_err),
    }
}
