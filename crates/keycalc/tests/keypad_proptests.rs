//! Property-based tests for keypad classification and the browser driver

use keycalc::core::{KeypadAction, Operator, KEYPAD_ROWS};
use keycalc::driver::CalculatorDriver;
use keycalc::wasm::{MockDom, MockDomKeypadExt, WasmDriver, WasmKeypad};
use proptest::prelude::*;

// ===== Strategy definitions =====

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

fn keypad_action_strategy() -> impl Strategy<Value = KeypadAction> {
    prop_oneof![
        (0u8..=9u8).prop_map(KeypadAction::Digit),
        Just(KeypadAction::Decimal),
        operator_strategy().prop_map(KeypadAction::Operator),
        Just(KeypadAction::Equals),
        Just(KeypadAction::Percent),
        Just(KeypadAction::Clear),
        Just(KeypadAction::Backspace),
    ]
}

fn keyboard_key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u8..=9u8).prop_map(|d| d.to_string()),
        Just(".".to_string()),
        Just("+".to_string()),
        Just("-".to_string()),
        Just("*".to_string()),
        Just("/".to_string()),
        Just("=".to_string()),
        Just("Enter".to_string()),
        Just("Escape".to_string()),
        Just("c".to_string()),
        Just("Backspace".to_string()),
    ]
}

// ===== Classification properties =====

proptest! {
    /// Every action is reachable from its own button class and label
    #[test]
    fn prop_button_classification_round_trips(action in keypad_action_strategy()) {
        let class_list = format!("btn {}", action.button_class());
        prop_assert_eq!(
            KeypadAction::from_button(&class_list, &action.label()),
            Some(action)
        );
    }

    /// Unclassified buttons never act
    #[test]
    fn prop_unclassified_button_ignored(text in "\\PC{0,4}") {
        prop_assert_eq!(KeypadAction::from_button("btn", &text), None);
    }

    /// Only the bound keys map to actions
    #[test]
    fn prop_long_keys_unbound(key in "[a-z]{2,8}") {
        prop_assert_eq!(KeypadAction::from_key(&key), None);
    }

    /// Every button on the layout resolves through the DOM
    #[test]
    fn prop_dom_click_matches_layout(row in 0usize..KEYPAD_ROWS.len(), col in 0usize..4) {
        let keypad = WasmKeypad::new();
        let mut dom = MockDom::calculator();
        dom.add_keypad(&keypad);
        match keypad.get_button_at(row, col) {
            Some(btn) => {
                prop_assert_eq!(dom.click_action(&btn.id), Some(btn.action));
                prop_assert_eq!(KEYPAD_ROWS[row][col], btn.action);
            }
            None => prop_assert!(col >= KEYPAD_ROWS[row].len()),
        }
    }
}

// ===== Driver properties =====

proptest! {
    /// Clicking buttons and pressing keys drive the same engine behaviour
    #[test]
    fn prop_clicks_and_keys_agree(keys in prop::collection::vec(keyboard_key_strategy(), 0..40)) {
        let mut by_key = WasmDriver::new();
        let mut by_click = WasmDriver::new();
        for key in &keys {
            prop_assert!(by_key.press_key(key));
            let action = KeypadAction::from_key(key).unwrap();
            by_click.press(action);
        }
        prop_assert_eq!(by_key.display(), by_click.display());
        prop_assert_eq!(by_key.state(), by_click.state());
    }

    /// The `result` element always shows the engine display
    #[test]
    fn prop_result_element_synced(actions in prop::collection::vec(keypad_action_strategy(), 0..40)) {
        let mut driver = WasmDriver::new();
        for action in actions {
            driver.press(action);
            let expected = driver.engine().display();
            prop_assert_eq!(driver.result_value(), Some(expected.as_str()));
        }
    }
}
