use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::game::{GameConfig, GameEngine, GameOverReason, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::render::{TextRenderer, game_over_message, text::PROMPT};

/// Line-based play: print the board, read one line, advance one turn.
pub struct ConsoleMode {
    engine: GameEngine,
    state: GameState,
    renderer: TextRenderer,
    input_handler: InputHandler,
}

impl ConsoleMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut engine = GameEngine::new(config);
        let state = engine.reset()?;

        Ok(Self::with_state(engine, state))
    }

    /// Resume from an existing state instead of a fresh board
    pub fn with_state(engine: GameEngine, state: GameState) -> Self {
        Self {
            engine,
            state,
            renderer: TextRenderer::new(),
            input_handler: InputHandler::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Play until the game ends, then print the final score line.
    ///
    /// End of input counts as quitting.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<GameOverReason> {
        while self.state.is_running() {
            output
                .write_all(self.renderer.render(&self.state).as_bytes())
                .context("Failed to write board")?;
            output
                .write_all(PROMPT.as_bytes())
                .context("Failed to write prompt")?;
            output.flush().context("Failed to flush output")?;

            let mut line = String::new();
            let read = input.read_line(&mut line).context("Failed to read input")?;

            let key = if read == 0 {
                log::debug!("Input closed after {} turns", self.state.steps);
                writeln!(output).context("Failed to write output")?;
                KeyAction::Quit
            } else {
                self.input_handler.handle_line(&line)
            };

            match key.into_action() {
                Some(action) => {
                    self.engine.step(&mut self.state, action);
                }
                None => self.state.end(GameOverReason::Quit),
            }
        }

        if let Some(message) = game_over_message(&self.state) {
            writeln!(output, "{}", message).context("Failed to write output")?;
        }
        output.flush().context("Failed to flush output")?;

        let reason = self.state.game_over_reason().unwrap_or(GameOverReason::Quit);
        log::info!(
            "Game over ({:?}) with score {} after {} turns",
            reason,
            self.state.score,
            self.state.steps
        );
        Ok(reason)
    }
}
