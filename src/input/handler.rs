use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Pause,
    Restart,
    Quit,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map a key press to a command; unbound keys map to `None`
    pub fn map_key(&self, key: KeyEvent) -> Option<Command> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Some(Command::Turn(Direction::Up)),
            KeyCode::Down => Some(Command::Turn(Direction::Down)),
            KeyCode::Left => Some(Command::Turn(Direction::Left)),
            KeyCode::Right => Some(Command::Turn(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Turn(Direction::Up)),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Turn(Direction::Down)),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::Turn(Direction::Left)),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::Turn(Direction::Right)),

            // Controls
            KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::Pause),
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char(' ') => Some(Command::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),

            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
