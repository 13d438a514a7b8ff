//! Browser bindings for the calculator
//!
//! The page forwards button clicks (by element id) and document keydown
//! keys; after each call it writes `display` into the `result` input.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::core::CalculatorEngine;
use crate::wasm::keypad::WasmKeypad;

/// Browser calculator, the JS-facing entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    engine: CalculatorEngine,
    keypad: WasmKeypad,
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        Self {
            engine: CalculatorEngine::new(),
            keypad: WasmKeypad::new(),
        }
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn display(&self) -> String {
        self.engine.display()
    }

    /// Current state name
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn state(&self) -> String {
        self.engine.state().to_string()
    }

    /// Handle a keypad button click by element ID; returns false if the id
    /// is not a keypad button
    pub fn handle_button(&mut self, button_id: &str) -> bool {
        match self.keypad.handle_click(button_id) {
            Some(action) => {
                self.engine.apply(action);
                true
            }
            None => {
                console::warn_1(&format!("unknown keypad button: {button_id}").into());
                false
            }
        }
    }

    /// Handle a keyboard key press; returns false if the key is not bound
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.engine.press_key(key)
    }

    /// Reset the calculator
    pub fn clear(&mut self) {
        self.engine.clear();
    }

    /// Keypad button ids in layout order, for building the page
    #[must_use]
    pub fn button_ids(&self) -> Vec<String> {
        self.keypad.buttons().iter().map(|b| b.id.clone()).collect()
    }
}
