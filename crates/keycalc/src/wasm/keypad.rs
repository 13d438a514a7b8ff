//! Browser keypad
//!
//! Buttons carry the page's class names (`btn number`, `btn operator`, ...)
//! and clicks are classified from class list and label, the same way the
//! page script does it.

use super::dom::{DomElement, MockDom, KEYPAD_ELEMENT_ID};
use crate::core::{KeypadAction, Operator, KEYPAD_ROWS};

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        let id = match action {
            KeypadAction::Digit(d) => format!("btn-{d}"),
            KeypadAction::Operator(op) => format!("btn-{}", op_name(op)),
            other => format!("btn-{}", other.button_class()),
        };
        Self {
            action,
            id,
            row,
            col,
        }
    }

    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> String {
        self.action.label()
    }

    /// Returns the button's class list
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("btn {}", self.action.button_class())
    }

    /// Builds the `<button>` element for this definition
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.label())
            .with_class("btn")
            .with_class(self.action.button_class())
            .with_attr("data-row", &self.row.to_string())
            .with_attr("data-col", &self.col.to_string())
    }
}

/// Returns a name for an operator (for element IDs)
const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
    }
}

/// Browser keypad layout
///
/// ```text
/// [ C ] [ ⌫ ] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ − ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    buttons: Vec<KeypadButtonDef>,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = KEYPAD_ROWS
            .iter()
            .enumerate()
            .flat_map(|(row, actions)| {
                actions
                    .iter()
                    .enumerate()
                    .map(move |(col, action)| KeypadButtonDef::new(*action, row, col))
            })
            .collect();
        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button that performs `action`
    #[must_use]
    pub fn find_button_by_action(&self, action: KeypadAction) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Creates DOM elements for all keypad buttons
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons.iter().map(KeypadButtonDef::to_element).collect()
    }

    /// Classifies a click on the button with `element_id`
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_button_by_id(element_id)
            .and_then(|btn| KeypadAction::from_button(&btn.class_name(), &btn.label()))
    }
}

/// Extension trait for MockDom to add the keypad
pub trait MockDomKeypadExt {
    /// Appends every keypad button to the keypad container
    fn add_keypad(&mut self, keypad: &WasmKeypad);

    /// Classifies a click from the clicked element's class list and text
    fn click_action(&self, element_id: &str) -> Option<KeypadAction>;
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &WasmKeypad) {
        for elem in keypad.create_dom_elements() {
            self.append_child(KEYPAD_ELEMENT_ID, elem);
        }
    }

    fn click_action(&self, element_id: &str) -> Option<KeypadAction> {
        self.get_element(element_id)
            .and_then(|elem| KeypadAction::from_button(&elem.class_name(), &elem.text_content))
    }
}
