use super::{
    action::{Action, Direction},
    config::GameConfig,
    state::{CollisionType, GameOverReason, GameState, Position, Snake},
};
use anyhow::{Context, Result};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn finished(collision_type: Option<CollisionType>) -> Self {
        Self {
            terminated: true,
            info: StepInfo {
                ate_food: false,
                collision_type,
            },
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { config, rng }
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> Result<GameState> {
        self.config.validate()?;

        let center_row = (self.config.grid_height / 2) as i32;
        let center_col = (self.config.grid_width / 2) as i32;

        let snake = Snake::new(
            Position::new(center_row, center_col),
            Direction::Right,
            self.config.initial_snake_length,
        );

        let food = self
            .spawn_food(&snake)
            .context("No free cell left for food on a fresh board")?;

        Ok(GameState::new(
            snake,
            food,
            self.config.grid_width,
            self.config.grid_height,
        ))
    }

    /// Execute one turn of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_running() {
            return StepResult::finished(None);
        }

        // Reversal is allowed unless the config blocks it; with a neck it is a
        // self-collision on the next move.
        if let Action::Move(new_direction) = action {
            let reversing = state.snake.direction.is_opposite(new_direction);
            if !(reversing && self.config.block_reversal) {
                state.snake.direction = new_direction;
            }
        }

        let new_head = state.snake.head().moved_in_direction(state.snake.direction);
        state.steps += 1;

        if let Some(collision_type) = self.check_collision(state, new_head) {
            log::debug!("{:?} collision at {:?}", collision_type, new_head);
            state.end(GameOverReason::Collision(collision_type));
            return StepResult::finished(Some(collision_type));
        }

        let ate_food = new_head == state.food;
        state.snake.advance(new_head, ate_food);

        if ate_food {
            state.score += 1;
            match self.spawn_food(&state.snake) {
                Some(food) => state.food = food,
                None => {
                    log::debug!("Board full at score {}", state.score);
                    state.end(GameOverReason::BoardFull);
                    return StepResult {
                        terminated: true,
                        info: StepInfo {
                            ate_food,
                            collision_type: None,
                        },
                    };
                }
            }
        }

        StepResult {
            terminated: false,
            info: StepInfo {
                ate_food,
                collision_type: None,
            },
        }
    }

    /// Check if the new head position causes a collision.
    ///
    /// Checked against the body before it moves, so stepping onto the cell the
    /// tail is about to vacate still counts.
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if state.is_occupied_by_snake(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Pick a uniformly random cell not covered by the snake, or `None` if the
    /// snake fills the grid.
    pub fn spawn_food(&mut self, snake: &Snake) -> Option<Position> {
        let width = self.config.grid_width as i32;
        let free: Vec<Position> = (0..self.config.grid_height as i32)
            .flat_map(|row| (0..width).map(move |col| Position::new(row, col)))
            .filter(|pos| !snake.occupies(*pos))
            .collect();

        let food = free.choose(&mut self.rng).copied();
        if let Some(pos) = food {
            log::debug!("Food spawned at {:?} ({} free cells)", pos, free.len());
        }
        food
    }
}
