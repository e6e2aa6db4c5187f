pub mod console;
pub mod tui;

pub use console::ConsoleMode;
pub use tui::TuiMode;
