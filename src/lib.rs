//! Console Snake - a turn-based Snake game for the terminal
//!
//! This library provides:
//! - Core game logic (game module)
//! - Line and key input parsing (input module)
//! - Plain text and TUI rendering (render module)
//! - The two front ends, console and tui (modes module)

pub mod game;
pub mod input;
pub mod modes;
pub mod render;
