//! Browser driver over the mock DOM
//!
//! Every event goes through the DOM the way the page does it: clicks are
//! classified from the clicked element, key presses from the key name, and
//! the `result` input is rewritten after each event.

use tracing::trace;

use super::dom::{DomEvent, MockDom, RESULT_ELEMENT_ID};
use super::keypad::{MockDomKeypadExt, WasmKeypad};
use crate::core::{CalcState, CalculatorEngine, KeypadAction};
use crate::driver::CalculatorDriver;

/// Browser driver wrapping an engine and a mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    engine: CalculatorEngine,
    dom: MockDom,
    keypad: WasmKeypad,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver over the calculator page with its keypad
    #[must_use]
    pub fn new() -> Self {
        let keypad = WasmKeypad::new();
        let mut dom = MockDom::calculator();
        dom.add_keypad(&keypad);
        Self {
            engine: CalculatorEngine::new(),
            dom,
            keypad,
        }
    }

    /// Returns the engine
    #[must_use]
    pub const fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub const fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns a mutable reference to the DOM
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Returns the keypad
    #[must_use]
    pub const fn keypad(&self) -> &WasmKeypad {
        &self.keypad
    }

    /// Simulates clicking the element with `element_id`
    ///
    /// Returns the action the click resolved to, if any.
    pub fn click(&mut self, element_id: &str) -> Option<KeypadAction> {
        self.dom.dispatch_event(DomEvent::click(element_id));
        let action = self.dom.click_action(element_id);
        match action {
            Some(action) => self.engine.apply(action),
            None => trace!(element_id, "click on unclassified element"),
        }
        self.sync_dom();
        action
    }

    /// Simulates a document keydown; returns false if the key is not bound
    pub fn press_key(&mut self, key: &str) -> bool {
        self.dom.dispatch_event(DomEvent::key_down(key));
        let handled = self.engine.press_key(key);
        self.sync_dom();
        handled
    }

    /// Gets the `result` input's value
    #[must_use]
    pub fn result_value(&self) -> Option<&str> {
        self.dom.get_element_value(RESULT_ELEMENT_ID)
    }

    fn sync_dom(&mut self) {
        let display = self.engine.display();
        self.dom.set_element_value(RESULT_ELEMENT_ID, &display);
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, action: KeypadAction) {
        let id = self
            .keypad
            .find_button_by_action(action)
            .map(|btn| btn.id.clone());
        match id {
            Some(id) => {
                self.click(&id);
            }
            None => {
                self.engine.apply(action);
                self.sync_dom();
            }
        }
    }

    fn display(&self) -> String {
        self.result_value().unwrap_or_default().to_string()
    }

    fn clear(&mut self) {
        self.click("btn-clear");
    }

    fn state(&self) -> CalcState {
        self.engine.state()
    }
}
