//! Keystroke input handling using crossterm
//!
//! Features:
//! - Non-blocking keystroke capture
//! - Key to game command mapping
//! - Ctrl+C / Esc graceful exit

use crate::problem::Operation;
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

/// What a keystroke asks the game to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Submit,
    Backspace,
    Reset,
    SelectOperation(Operation),
    NextOperation,
    PreviousOperation,
    Type(char),
}

/// Handles user input from terminal
pub struct InputHandler {
    /// Timeout for poll operations (milliseconds)
    poll_timeout: Duration,
}

impl InputHandler {
    /// Create new input handler with default timeout (50ms for responsive input)
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    /// Enable raw mode for terminal input
    pub fn enable_raw_mode() -> IoResult<()> {
        crossterm::terminal::enable_raw_mode()
    }

    /// Disable raw mode and restore terminal
    pub fn disable_raw_mode() -> IoResult<()> {
        crossterm::terminal::disable_raw_mode()
    }

    /// Poll for keystroke with timeout (non-blocking)
    /// Returns Some(KeyEvent) if key pressed, None if timeout
    pub fn read_key(&self) -> IoResult<Option<KeyEvent>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                event::Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                    Ok(Some(key_event))
                }
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Map a key event to a game command
    pub fn command(key: &KeyEvent) -> Option<Command> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => Some(Command::Exit),
            KeyCode::Char('c') if ctrl => Some(Command::Exit),
            KeyCode::Char('r') if ctrl => Some(Command::Reset),
            KeyCode::F(5) => Some(Command::Reset),
            KeyCode::F(n @ 1..=4) => Some(Command::SelectOperation(
                Operation::ALL[usize::from(n) - 1],
            )),
            KeyCode::Tab | KeyCode::Right => Some(Command::NextOperation),
            KeyCode::BackTab | KeyCode::Left => Some(Command::PreviousOperation),
            KeyCode::Enter => Some(Command::Submit),
            KeyCode::Backspace => Some(Command::Backspace),
            // Answer text is passed through verbatim; grading decides
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Command::Type(c))
            }
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
