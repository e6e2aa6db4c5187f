use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    Quit,
    /// Unrecognized input; the turn still advances in the current direction
    None,
}

impl KeyAction {
    /// The action to feed the engine, or `None` when the player quit
    pub fn into_action(self) -> Option<Action> {
        match self {
            KeyAction::GameAction(action) => Some(action),
            KeyAction::None => Some(Action::Continue),
            KeyAction::Quit => None,
        }
    }
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Interpret one line typed at the console prompt.
    ///
    /// The trimmed, uppercased line must be exactly one of `W`, `A`, `S`, `D`
    /// or `Q`; anything else is ignored.
    pub fn handle_line(&self, line: &str) -> KeyAction {
        match line.trim().to_uppercase().as_str() {
            "W" => KeyAction::GameAction(Action::Move(Direction::Up)),
            "A" => KeyAction::GameAction(Action::Move(Direction::Left)),
            "S" => KeyAction::GameAction(Action::Move(Direction::Down)),
            "D" => KeyAction::GameAction(Action::Move(Direction::Right)),
            "Q" => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::GameAction(Action::Move(Direction::Up)),
            KeyCode::Down => KeyAction::GameAction(Action::Move(Direction::Down)),
            KeyCode::Left => KeyAction::GameAction(Action::Move(Direction::Left)),
            KeyCode::Right => KeyAction::GameAction(Action::Move(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::GameAction(Action::Move(Direction::Up))
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::GameAction(Action::Move(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::GameAction(Action::Move(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::GameAction(Action::Move(Direction::Right))
            }

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_tokens() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_line("w"),
            KeyAction::GameAction(Action::Move(Direction::Up))
        );
        assert_eq!(
            handler.handle_line("A\n"),
            KeyAction::GameAction(Action::Move(Direction::Left))
        );
        assert_eq!(
            handler.handle_line("  s  "),
            KeyAction::GameAction(Action::Move(Direction::Down))
        );
        assert_eq!(
            handler.handle_line("D"),
            KeyAction::GameAction(Action::Move(Direction::Right))
        );
        assert_eq!(handler.handle_line("q\r\n"), KeyAction::Quit);
    }

    #[test]
    fn test_line_noise_is_ignored() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_line(""), KeyAction::None);
        assert_eq!(handler.handle_line("x"), KeyAction::None);
        assert_eq!(handler.handle_line("dd"), KeyAction::None);
        assert_eq!(handler.handle_line("quit"), KeyAction::None);
    }

    #[test]
    fn test_into_action() {
        assert_eq!(KeyAction::None.into_action(), Some(Action::Continue));
        assert_eq!(KeyAction::Quit.into_action(), None);
        assert_eq!(
            KeyAction::GameAction(Action::Move(Direction::Up)).into_action(),
            Some(Action::Move(Direction::Up))
        );
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(up),
            KeyAction::GameAction(Action::Move(Direction::Up))
        );

        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(left),
            KeyAction::GameAction(Action::Move(Direction::Left))
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        let a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(
            handler.handle_key_event(a),
            KeyAction::GameAction(Action::Move(Direction::Left))
        );

        let s_upper = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(s_upper),
            KeyAction::GameAction(Action::Move(Direction::Down))
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(q), KeyAction::Quit);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(esc), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(handler.handle_key_event(space), KeyAction::None);
    }
}
