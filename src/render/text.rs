use crate::game::{CollisionType, GameOverReason, GameState, Position};

/// Prompt printed after every board
pub const PROMPT: &str = "Move (W/A/S/D, Q=quit): ";

/// Renders the board as plain text, one line per row.
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Board framed by `=` rules, followed by the score line.
    ///
    /// Starts with a blank line so consecutive turns stay visually apart.
    pub fn render(&self, state: &GameState) -> String {
        let rule = "=".repeat(state.grid_width * 2);
        let mut out = String::new();

        out.push('\n');
        out.push_str(&rule);
        out.push('\n');

        for row in 0..state.grid_height {
            let cells: Vec<String> = (0..state.grid_width)
                .map(|col| {
                    state
                        .cell_at(Position::new(row as i32, col as i32))
                        .symbol()
                        .to_string()
                })
                .collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }

        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("Score: {}\n", state.score));
        out
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Final line for a finished game, `None` while it is still running
pub fn game_over_message(state: &GameState) -> Option<String> {
    let headline = match state.game_over_reason()? {
        GameOverReason::Quit => "Game Over!",
        GameOverReason::Collision(CollisionType::Wall) => "You hit the wall! Game Over.",
        GameOverReason::Collision(CollisionType::SelfCollision) => {
            "You ran into yourself! Game Over."
        }
        GameOverReason::BoardFull => "The board is full, you win! Game Over.",
    };
    Some(format!("{} Final Score: {}", headline, state.score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Snake};

    fn sample_state() -> GameState {
        GameState::new(
            Snake::new(Position::new(1, 2), Direction::Right, 2),
            Position::new(0, 0),
            4,
            3,
        )
    }

    #[test]
    fn test_render_layout() {
        let mut state = sample_state();
        state.score = 7;

        let expected = "\n\
                        ========\n\
                        * . . .\n\
                        . O @ .\n\
                        . . . .\n\
                        ========\n\
                        Score: 7\n";
        assert_eq!(TextRenderer::new().render(&state), expected);
    }

    #[test]
    fn test_render_is_idempotent() {
        let state = sample_state();
        let renderer = TextRenderer::new();
        assert_eq!(renderer.render(&state), renderer.render(&state));
    }

    #[test]
    fn test_game_over_messages() {
        let mut state = sample_state();
        assert_eq!(game_over_message(&state), None);

        state.score = 4;
        state.end(GameOverReason::Quit);
        assert_eq!(
            game_over_message(&state).unwrap(),
            "Game Over! Final Score: 4"
        );

        let mut state = sample_state();
        state.end(GameOverReason::Collision(CollisionType::Wall));
        let message = game_over_message(&state).unwrap();
        assert!(message.contains("Game Over"));
        assert!(message.ends_with("Final Score: 0"));

        let mut state = sample_state();
        state.end(GameOverReason::Collision(CollisionType::SelfCollision));
        assert!(game_over_message(&state).unwrap().contains("yourself"));
    }
}
