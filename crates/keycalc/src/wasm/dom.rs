//! Mock DOM for browser wiring tests
//!
//! A flat element registry keyed by id plus an event history, enough to
//! exercise the keypad and display bindings without a browser.

use std::collections::HashMap;

/// Id of the display input element
pub const RESULT_ELEMENT_ID: &str = "result";

/// Id of the keypad container element
pub const KEYPAD_ELEMENT_ID: &str = "keypad";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Form control value (`<input>` elements)
    pub value: String,
    /// CSS classes
    pub classes: Vec<String>,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// Ids of child elements, in document order
    pub children: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            value: String::new(),
            classes: Vec::new(),
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Sets the form control value
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns the space-separated class list, like `Element.className`
    #[must_use]
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Document keydown event
    KeyDown {
        /// The `KeyboardEvent.key` value
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a keydown event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Mock DOM for testing the browser calculator without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page: a read-only `result` input and an empty
    /// keypad container
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        let result = DomElement::new("input")
            .with_id(RESULT_ELEMENT_ID)
            .with_attr("type", "text")
            .with_attr("readonly", "");
        let keypad = DomElement::new("div")
            .with_id(KEYPAD_ELEMENT_ID)
            .with_class("buttons");

        dom.register_element(result);
        dom.register_element(keypad);
        dom
    }

    /// Registers an element for ID lookup; elements without an id are dropped
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Registers `child` and links it under `parent_id`
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        if child.id.is_empty() {
            return;
        }
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child.id.clone());
        }
        self.register_element(child);
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Returns the child elements of `id` in document order
    #[must_use]
    pub fn children(&self, id: &str) -> Vec<&DomElement> {
        self.elements
            .get(id)
            .map(|parent| {
                parent
                    .children
                    .iter()
                    .filter_map(|child| self.elements.get(child))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the number of registered elements
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates an element's form value by ID
    pub fn set_element_value(&mut self, id: &str, value: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_value(value);
        }
    }

    /// Gets an element's form value by ID
    #[must_use]
    pub fn get_element_value(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.value.as_str())
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }
}
