//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Both front ends in `modes` drive it one turn at a time.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{GameConfig, MAX_GRID_SIDE};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use state::{Cell, CollisionType, GameOverReason, GameState, GameStatus, Position, Snake};
