//! Unified calculator driver
//!
//! Frontend-independent checks are written once against
//! [`CalculatorDriver`] and run against every frontend.

use crate::core::{CalcState, KeypadAction, Operator};

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use keycalc::driver::{verify_basic_arithmetic, CalculatorDriver};
/// use keycalc::wasm::WasmDriver;
///
/// let mut driver = WasmDriver::new();
/// verify_basic_arithmetic(&mut driver);
/// assert!(driver.display().is_empty());
/// ```
pub trait CalculatorDriver {
    /// Sends one input event
    fn press(&mut self, action: KeypadAction);

    /// Gets the current display text
    fn display(&self) -> String;

    /// Clears the calculator state
    fn clear(&mut self);

    /// Gets the engine state
    fn state(&self) -> CalcState;

    /// Sends a key sequence: `0`-`9`, `.`, `+ - * /`, `=`, `%` (percent),
    /// `C` (clear) and `<` (backspace); other characters are skipped
    fn press_sequence(&mut self, keys: &str) {
        for action in keys.chars().filter_map(sequence_action) {
            self.press(action);
        }
    }
}

fn sequence_action(ch: char) -> Option<KeypadAction> {
    match ch {
        '%' => Some(KeypadAction::Percent),
        '<' => Some(KeypadAction::Backspace),
        _ => KeypadAction::from_key(&ch.to_string()),
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalcState, CalculatorDriver, KeypadAction};
    use crate::tui::CalculatorApp;

    /// Terminal driver wrapping the calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub const fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub const fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: KeypadAction) {
            self.app.apply(action);
        }

        fn display(&self) -> String {
            self.app.display()
        }

        fn clear(&mut self) {
            self.app.clear();
        }

        fn state(&self) -> CalcState {
            self.app.state()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified checks =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [
        ("2+3=", "5"),
        ("10-4=", "6"),
        ("6*7=", "42"),
        ("20/4=", "5"),
        ("3-8=", "-5"),
        ("7/2=", "3.5"),
        (".1+.2=", "0.3"),
    ] {
        driver.press_sequence(keys);
        assert_eq!(driver.display(), expected, "{keys}");
        assert_eq!(driver.state(), CalcState::ResultShown, "{keys}");
        driver.clear();
    }
}

/// Verifies implicit compute when a second operator is pressed
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.press_sequence("5+3+");
    assert_eq!(driver.display(), "8");
    assert_eq!(driver.state(), CalcState::OperatorPending);
    driver.press_sequence("2=");
    assert_eq!(driver.display(), "10");
    driver.clear();

    // result feeds the next operation
    driver.press_sequence("2+3=*4=");
    assert_eq!(driver.display(), "20");
    driver.clear();
}

/// Verifies at most one decimal point per number
pub fn verify_decimal_guard<D: CalculatorDriver>(driver: &mut D) {
    driver.press_sequence("3..");
    assert_eq!(driver.display(), "3.");
    driver.press_sequence("5.");
    assert_eq!(driver.display(), "3.5");
    driver.clear();

    // a result is replaced, not guarded
    driver.press_sequence("7/2=.5");
    assert_eq!(driver.display(), ".5");
    driver.clear();
}

/// Verifies backspace down to an empty display
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    driver.press_sequence("12");
    driver.press(KeypadAction::Backspace);
    assert_eq!(driver.display(), "1");
    driver.press(KeypadAction::Backspace);
    assert_eq!(driver.display(), "");
    driver.press(KeypadAction::Backspace);
    assert_eq!(driver.display(), "");
    driver.clear();
}

/// Verifies percent
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) {
    driver.press(KeypadAction::Percent);
    assert_eq!(driver.display(), "");
    assert_eq!(driver.state(), CalcState::Idle);

    driver.press_sequence("50%");
    assert_eq!(driver.display(), "0.5");
    driver.clear();

    // the pending operation survives
    driver.press_sequence("200+50%=");
    assert_eq!(driver.display(), "200.5");
    driver.clear();
}

/// Verifies division by zero keeps the pending division
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.press_sequence("8/0=");
    assert_eq!(driver.display(), "Error: Division by zero");
    assert_eq!(driver.state(), CalcState::ErrorShown);

    // the next operator re-runs the division and is not recorded
    driver.press(KeypadAction::Operator(Operator::Add));
    assert_eq!(driver.display(), "Error: Division by zero");

    // a new right operand recovers
    driver.press_sequence("4=");
    assert_eq!(driver.display(), "2");
    driver.clear();
}

/// Verifies clear from several states
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    for keys in ["", "42", "4+", "4+2", "4+2=", "4/0="] {
        driver.press_sequence(keys);
        driver.press(KeypadAction::Clear);
        assert_eq!(driver.display(), "", "{keys}");
        assert_eq!(driver.state(), CalcState::Idle, "{keys}");
    }
}

/// Runs every unified check
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_decimal_guard(driver);
    verify_backspace(driver);
    verify_percent(driver);
    verify_division_by_zero(driver);
    verify_clear(driver);
}
