//! Board rendering: plain text for the console prompt, ratatui for the TUI.

pub mod renderer;
pub mod text;

pub use renderer::Renderer;
pub use text::{TextRenderer, game_over_message};
