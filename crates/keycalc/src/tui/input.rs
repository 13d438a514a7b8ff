//! Keyboard input handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::KeypadAction;

/// Actions that can be triggered by terminal key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiAction {
    /// Forward an input event to the engine
    Calc(KeypadAction),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    ///
    /// Keys follow the calculator keyboard bindings. `%` is accepted as the
    /// percent key since a terminal has no percent button to click.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> TuiAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return TuiAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => TuiAction::Quit,
                _ => TuiAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => TuiAction::Quit,
            KeyCode::Char('%') => TuiAction::Calc(KeypadAction::Percent),
            KeyCode::Char(c) => Self::bound(&c.to_string()),
            KeyCode::Enter => Self::bound("Enter"),
            KeyCode::Esc => Self::bound("Escape"),
            KeyCode::Backspace => Self::bound("Backspace"),
            _ => TuiAction::None,
        }
    }

    fn bound(key: &str) -> TuiAction {
        KeypadAction::from_key(key).map_or(TuiAction::None, TuiAction::Calc)
    }
}
