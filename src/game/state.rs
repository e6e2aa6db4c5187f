use super::action::Direction;

/// A cell on the game grid. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move position by delta
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        self.moved_by(d_row, d_col)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        // Add initial body segments behind the head
        let (d_row, d_col) = direction.delta();

        for i in 1..length.max(1) {
            let prev = body[i - 1];
            body.push(prev.moved_by(-d_row, -d_col));
        }

        Self { body, direction }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// Returns `None` for an empty body or one that repeats a cell.
    pub fn from_body(body: Vec<Position>, direction: Direction) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        for (i, pos) in body.iter().enumerate() {
            if body[..i].contains(pos) {
                return None;
            }
        }
        Some(Self { body, direction })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// All segments, head first
    pub fn body(&self) -> &[Position] {
        &self.body
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position is any segment of the snake, tail included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Push `new_head` to the front, dropping the tail unless growing
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// True only for an empty body, which no constructor produces
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// Player quit, or input ran out
    Quit,
    Collision(CollisionType),
    /// Snake covers every cell, so no food can be placed
    BoardFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver(GameOverReason),
}

/// What occupies a grid cell, as seen by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Head,
    Body,
    Food,
    Empty,
}

impl Cell {
    pub fn symbol(&self) -> char {
        match self {
            Cell::Head => '@',
            Cell::Body => 'O',
            Cell::Food => '*',
            Cell::Empty => '.',
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub steps: u32,
    pub status: GameStatus,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Position, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            score: 0,
            steps: 0,
            status: GameStatus::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        match self.status {
            GameStatus::Running => None,
            GameStatus::GameOver(reason) => Some(reason),
        }
    }

    /// Move to the terminal state. The first reason sticks.
    pub fn end(&mut self, reason: GameOverReason) {
        if self.is_running() {
            self.status = GameStatus::GameOver(reason);
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.row < self.grid_height as i32
            && pos.col >= 0
            && pos.col < self.grid_width as i32
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    /// Classify a cell. The head wins over the body, the snake over food.
    pub fn cell_at(&self, pos: Position) -> Cell {
        if pos == self.snake.head() {
            Cell::Head
        } else if self.snake.body_segments().contains(&pos) {
            Cell::Body
        } else if pos == self.food {
            Cell::Food
        } else {
            Cell::Empty
        }
    }
}
