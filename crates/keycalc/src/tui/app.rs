//! Terminal application state

use tracing::debug;

use super::input::TuiAction;
use crate::core::{CalcState, CalculatorEngine, KeypadAction};

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    engine: CalculatorEngine,
    /// Last action forwarded to the engine, highlighted on the keypad
    last_action: Option<KeypadAction>,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the engine
    #[must_use]
    pub const fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> String {
        self.engine.display()
    }

    /// Returns the engine state
    #[must_use]
    pub fn state(&self) -> CalcState {
        self.engine.state()
    }

    /// Returns the last action forwarded to the engine
    #[must_use]
    pub const fn last_action(&self) -> Option<KeypadAction> {
        self.last_action
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Forwards one input event to the engine
    pub fn apply(&mut self, action: KeypadAction) {
        self.engine.apply(action);
        self.last_action = Some(action);
    }

    /// Handles a terminal action; returns true once the app should quit
    pub fn handle(&mut self, action: TuiAction) -> bool {
        match action {
            TuiAction::Calc(action) => self.apply(action),
            TuiAction::Quit => {
                debug!("quit requested");
                self.quit();
            }
            TuiAction::None => {}
        }
        self.should_quit
    }

    /// Resets the calculator
    pub fn clear(&mut self) {
        self.engine.clear();
        self.last_action = None;
    }
}
