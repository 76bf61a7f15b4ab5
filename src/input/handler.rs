use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Quit,
    /// Any other key; still counts as a key press for the menus
    Other,
}

/// Input gathered between two frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Latest steering command of the frame
    pub direction: Option<Direction>,
    /// Some key was pressed during the frame
    pub key_pressed: bool,
    pub quit: bool,
}

impl FrameInput {
    /// Input carrying a single steering command
    pub fn steer(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            key_pressed: true,
            quit: false,
        }
    }

    /// Input for a key press with no steering meaning
    pub fn any_key() -> Self {
        Self {
            key_pressed: true,
            ..Default::default()
        }
    }

    pub fn record(&mut self, action: KeyAction) {
        match action {
            KeyAction::Steer(direction) => {
                self.direction = Some(direction);
                self.key_pressed = true;
            }
            KeyAction::Quit => self.quit = true,
            KeyAction::Other => self.key_pressed = true,
        }
    }
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Numpad layout
            KeyCode::Char('8') => KeyAction::Steer(Direction::PosY),
            KeyCode::Char('5') => KeyAction::Steer(Direction::NegY),
            KeyCode::Char('4') => KeyAction::Steer(Direction::PosZ),
            KeyCode::Char('6') => KeyAction::Steer(Direction::NegZ),
            KeyCode::Char('3') => KeyAction::Steer(Direction::PosX),
            KeyCode::Char('7') => KeyAction::Steer(Direction::NegX),

            // Arrow keys
            KeyCode::Up => KeyAction::Steer(Direction::PosY),
            KeyCode::Down => KeyAction::Steer(Direction::NegY),
            KeyCode::Left => KeyAction::Steer(Direction::NegX),
            KeyCode::Right => KeyAction::Steer(Direction::PosX),

            // Letters
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'w' => KeyAction::Steer(Direction::PosY),
                's' => KeyAction::Steer(Direction::NegY),
                'a' => KeyAction::Steer(Direction::NegX),
                'd' => KeyAction::Steer(Direction::PosX),
                'q' => KeyAction::Steer(Direction::NegZ),
                'e' => KeyAction::Steer(Direction::PosZ),
                _ => KeyAction::Other,
            },

            KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::Other,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
