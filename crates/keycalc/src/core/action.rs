//! Logical input events
//!
//! Frontends translate buttons and keys into [`KeypadAction`]s; the engine
//! never sees physical input.

use serde::{Deserialize, Serialize};

use super::Operator;

/// A single calculator input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeypadAction {
    /// Append a digit (0-9)
    Digit(u8),
    /// Append a decimal point
    Decimal,
    /// Select a binary operator
    Operator(Operator),
    /// Compute the pending operation
    Equals,
    /// Divide the display by 100
    Percent,
    /// Reset all state
    Clear,
    /// Remove the last display character
    Backspace,
}

/// Keypad button layout, top row first
pub const KEYPAD_ROWS: [&[KeypadAction]; 5] = [
    &[
        KeypadAction::Clear,
        KeypadAction::Backspace,
        KeypadAction::Percent,
        KeypadAction::Operator(Operator::Divide),
    ],
    &[
        KeypadAction::Digit(7),
        KeypadAction::Digit(8),
        KeypadAction::Digit(9),
        KeypadAction::Operator(Operator::Multiply),
    ],
    &[
        KeypadAction::Digit(4),
        KeypadAction::Digit(5),
        KeypadAction::Digit(6),
        KeypadAction::Operator(Operator::Subtract),
    ],
    &[
        KeypadAction::Digit(1),
        KeypadAction::Digit(2),
        KeypadAction::Digit(3),
        KeypadAction::Operator(Operator::Add),
    ],
    &[
        KeypadAction::Digit(0),
        KeypadAction::Decimal,
        KeypadAction::Equals,
    ],
];

impl KeypadAction {
    /// Maps a keyboard key name to an action
    ///
    /// Exact set: `0`-`9` and `.`, `+ - * /`, `Enter` and `=`, `Escape`,
    /// `c` and `C`, `Backspace`. There is no percent key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "." => Some(Self::Decimal),
            "+" => Some(Self::Operator(Operator::Add)),
            "-" => Some(Self::Operator(Operator::Subtract)),
            "*" => Some(Self::Operator(Operator::Multiply)),
            "/" => Some(Self::Operator(Operator::Divide)),
            "Enter" | "=" => Some(Self::Equals),
            "Escape" | "c" | "C" => Some(Self::Clear),
            "Backspace" => Some(Self::Backspace),
            _ => Self::digit_from_str(key),
        }
    }

    /// Classifies a clicked button by its class list and text
    ///
    /// Class checks run in the order clear, number/decimal, operator,
    /// equals, percent, backspace; the first match wins.
    #[must_use]
    pub fn from_button(class_list: &str, text: &str) -> Option<Self> {
        let has = |name: &str| class_list.split_whitespace().any(|c| c == name);

        if has("clear") {
            Some(Self::Clear)
        } else if has("number") || has("decimal") {
            match text.trim() {
                "." => Some(Self::Decimal),
                digit => Self::digit_from_str(digit),
            }
        } else if has("operator") {
            Operator::from_symbol(text).map(Self::Operator)
        } else if has("equals") {
            Some(Self::Equals)
        } else if has("percent") {
            Some(Self::Percent)
        } else if has("backspace") {
            Some(Self::Backspace)
        } else {
            None
        }
    }

    fn digit_from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            _ => None,
        }
    }

    /// Returns the character this action appends, if any
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            _ => None,
        }
    }

    /// Returns the keypad button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.glyph().to_string(),
            Self::Equals => "=".to_string(),
            Self::Percent => "%".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }

    /// Returns the CSS class that identifies this kind of button
    #[must_use]
    pub const fn button_class(&self) -> &'static str {
        match self {
            Self::Digit(_) => "number",
            Self::Decimal => "decimal",
            Self::Operator(_) => "operator",
            Self::Equals => "equals",
            Self::Percent => "percent",
            Self::Clear => "clear",
            Self::Backspace => "backspace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== from_key tests =====

    #[test]
    fn test_from_key_digits() {
        for d in 0..=9u8 {
            let key = d.to_string();
            assert_eq!(KeypadAction::from_key(&key), Some(KeypadAction::Digit(d)));
        }
    }

    #[test]
    fn test_from_key_decimal() {
        assert_eq!(KeypadAction::from_key("."), Some(KeypadAction::Decimal));
    }

    #[test]
    fn test_from_key_operators() {
        for op in Operator::ALL {
            assert_eq!(
                KeypadAction::from_key(op.symbol()),
                Some(KeypadAction::Operator(op))
            );
        }
    }

    #[test]
    fn test_from_key_equals() {
        assert_eq!(KeypadAction::from_key("Enter"), Some(KeypadAction::Equals));
        assert_eq!(KeypadAction::from_key("="), Some(KeypadAction::Equals));
    }

    #[test]
    fn test_from_key_clear() {
        for key in ["Escape", "c", "C"] {
            assert_eq!(KeypadAction::from_key(key), Some(KeypadAction::Clear));
        }
    }

    #[test]
    fn test_from_key_backspace() {
        assert_eq!(
            KeypadAction::from_key("Backspace"),
            Some(KeypadAction::Backspace)
        );
    }

    #[test]
    fn test_from_key_ignored() {
        for key in ["%", "enter", "escape", "x", "×", "Delete", "12", "", " ", "Tab"] {
            assert_eq!(KeypadAction::from_key(key), None, "key {key:?}");
        }
    }

    // ===== from_button tests =====

    #[test]
    fn test_from_button_number() {
        assert_eq!(
            KeypadAction::from_button("btn number", "7"),
            Some(KeypadAction::Digit(7))
        );
    }

    #[test]
    fn test_from_button_decimal() {
        assert_eq!(
            KeypadAction::from_button("btn decimal", "."),
            Some(KeypadAction::Decimal)
        );
    }

    #[test]
    fn test_from_button_operator_glyphs() {
        assert_eq!(
            KeypadAction::from_button("btn operator", "×"),
            Some(KeypadAction::Operator(Operator::Multiply))
        );
        assert_eq!(
            KeypadAction::from_button("operator", "÷"),
            Some(KeypadAction::Operator(Operator::Divide))
        );
        assert_eq!(
            KeypadAction::from_button("operator", "−"),
            Some(KeypadAction::Operator(Operator::Subtract))
        );
    }

    #[test]
    fn test_from_button_unknown_operator_text() {
        assert_eq!(KeypadAction::from_button("operator", "^"), None);
    }

    #[test]
    fn test_from_button_function_keys() {
        assert_eq!(
            KeypadAction::from_button("btn equals", "="),
            Some(KeypadAction::Equals)
        );
        assert_eq!(
            KeypadAction::from_button("btn percent", "%"),
            Some(KeypadAction::Percent)
        );
        assert_eq!(
            KeypadAction::from_button("btn backspace", "⌫"),
            Some(KeypadAction::Backspace)
        );
    }

    #[test]
    fn test_from_button_clear_wins() {
        assert_eq!(
            KeypadAction::from_button("operator clear", "+"),
            Some(KeypadAction::Clear)
        );
    }

    #[test]
    fn test_from_button_unclassified() {
        assert_eq!(KeypadAction::from_button("btn", "7"), None);
        assert_eq!(KeypadAction::from_button("", ""), None);
    }

    #[test]
    fn test_from_button_class_must_match_whole_token() {
        assert_eq!(KeypadAction::from_button("numbers", "7"), None);
    }

    // ===== Layout tests =====

    #[test]
    fn test_keypad_rows_cover_every_action_once() {
        let all: Vec<KeypadAction> = KEYPAD_ROWS.iter().flat_map(|row| row.iter().copied()).collect();
        assert_eq!(all.len(), 19);
        for d in 0..=9u8 {
            assert_eq!(all.iter().filter(|a| **a == KeypadAction::Digit(d)).count(), 1);
        }
        for op in Operator::ALL {
            assert!(all.contains(&KeypadAction::Operator(op)));
        }
        assert!(all.contains(&KeypadAction::Percent));
        assert!(all.contains(&KeypadAction::Backspace));
    }

    // ===== Labels and chars =====

    #[test]
    fn test_to_char() {
        assert_eq!(KeypadAction::Digit(4).to_char(), Some('4'));
        assert_eq!(KeypadAction::Decimal.to_char(), Some('.'));
        assert_eq!(KeypadAction::Equals.to_char(), None);
        assert_eq!(KeypadAction::Operator(Operator::Add).to_char(), None);
    }

    #[test]
    fn test_label_round_trips_through_button() {
        let actions = [
            KeypadAction::Digit(0),
            KeypadAction::Digit(9),
            KeypadAction::Decimal,
            KeypadAction::Operator(Operator::Divide),
            KeypadAction::Equals,
            KeypadAction::Percent,
            KeypadAction::Clear,
            KeypadAction::Backspace,
        ];
        for action in actions {
            assert_eq!(
                KeypadAction::from_button(action.button_class(), &action.label()),
                Some(action)
            );
        }
    }
}
