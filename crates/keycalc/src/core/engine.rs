//! Calculator engine state machine
//!
//! The engine owns the whole session: the display, both operands, the
//! pending operator and the reset-display flag. Every input event is one
//! method call that runs to completion.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::number::Operand;
use super::operations::{round_to_places, Operator, RESULT_DECIMAL_PLACES};
use super::{CalcError, CalcResult, KeypadAction};

/// What the display currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum Display {
    /// Typed digits or a computed result (possibly empty)
    Number(Operand),
    /// An error message
    Error(CalcError),
}

impl Default for Display {
    fn default() -> Self {
        Self::Number(Operand::empty())
    }
}

impl Display {
    /// Returns true if nothing is shown
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Number(entry) => entry.is_empty(),
            Self::Error(_) => false,
        }
    }

    /// Returns the error being shown, if any
    #[must_use]
    pub const fn error(&self) -> Option<CalcError> {
        match self {
            Self::Number(_) => None,
            Self::Error(err) => Some(*err),
        }
    }

    /// Returns the shown text as an operand
    fn to_operand(&self) -> Operand {
        match self {
            Self::Number(entry) => entry.clone(),
            Self::Error(err) => Operand::new(err.to_string()),
        }
    }
}

impl std::fmt::Display for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(entry) => f.write_str(entry.raw()),
            Self::Error(err) => write!(f, "{err}"),
        }
    }
}

/// Observable calculator state, derived from the session fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcState {
    /// Nothing entered
    Idle,
    /// Typing the left operand
    EnteringFirstOperand,
    /// Operator chosen, right operand not started
    OperatorPending,
    /// Typing the right operand
    EnteringSecondOperand,
    /// A computed result is shown
    ResultShown,
    /// An error message is shown
    ErrorShown,
}

impl CalcState {
    /// Returns the snake_case state name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::EnteringFirstOperand => "entering_first_operand",
            Self::OperatorPending => "operator_pending",
            Self::EnteringSecondOperand => "entering_second_operand",
            Self::ResultShown => "result_shown",
            Self::ErrorShown => "error_shown",
        }
    }
}

impl std::fmt::Display for CalcState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Four-function calculator with one pending binary operation
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    display: Display,
    current_input: Operand,
    previous_input: Operand,
    operator: Option<Operator>,
    reset_display: bool,
}

impl CalculatorEngine {
    /// Creates an engine in the idle state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> String {
        self.display.to_string()
    }

    /// Returns the tagged display value
    #[must_use]
    pub const fn display_value(&self) -> &Display {
        &self.display
    }

    /// Returns the right-hand operand
    #[must_use]
    pub const fn current_input(&self) -> &Operand {
        &self.current_input
    }

    /// Returns the left-hand operand
    #[must_use]
    pub const fn previous_input(&self) -> &Operand {
        &self.previous_input
    }

    /// Returns the pending operator
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Returns true if the next digit starts a fresh number
    #[must_use]
    pub const fn should_reset_display(&self) -> bool {
        self.reset_display
    }

    /// Returns the current observable state
    #[must_use]
    pub fn state(&self) -> CalcState {
        match (&self.display, self.operator, self.reset_display) {
            (Display::Error(_), _, _) => CalcState::ErrorShown,
            (_, Some(_), true) => CalcState::OperatorPending,
            (_, Some(_), false) => CalcState::EnteringSecondOperand,
            (display, None, _) if display.is_empty() => CalcState::Idle,
            (_, None, true) => CalcState::ResultShown,
            (_, None, false) => CalcState::EnteringFirstOperand,
        }
    }

    /// Dispatches one input event
    pub fn apply(&mut self, action: KeypadAction) {
        trace!(?action, "apply");
        match action {
            KeypadAction::Digit(_) | KeypadAction::Decimal => {
                if let Some(ch) = action.to_char() {
                    self.append(ch);
                }
            }
            KeypadAction::Operator(op) => self.select_operator(op),
            KeypadAction::Equals => {
                self.compute();
            }
            KeypadAction::Percent => self.percent(),
            KeypadAction::Clear => self.clear(),
            KeypadAction::Backspace => self.backspace(),
        }
    }

    /// Dispatches a keyboard key; returns false if the key is not bound
    pub fn press_key(&mut self, key: &str) -> bool {
        match KeypadAction::from_key(key) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => {
                trace!(key, "unbound key ignored");
                false
            }
        }
    }

    /// Resets every field to its initial value
    pub fn clear(&mut self) {
        *self = Self::default();
        debug!("cleared");
    }

    /// Appends a digit or decimal point to the display
    ///
    /// A set reset-display flag clears the display first, and an error
    /// message is discarded. A second decimal point in one number is
    /// ignored, as is any character other than `0`-`9` and `.`.
    pub fn append(&mut self, ch: char) {
        if !(ch.is_ascii_digit() || ch == '.') {
            trace!(%ch, "non-numeric character ignored");
            return;
        }

        if self.reset_display {
            self.display = Display::default();
            self.reset_display = false;
        }
        if let Display::Error(err) = self.display {
            debug!(%err, "error display overwritten by input");
            self.display = Display::default();
        }

        if let Display::Number(entry) = &mut self.display {
            if ch == '.' && entry.has_decimal_point() {
                trace!(display = %entry, "duplicate decimal point ignored");
                return;
            }
            entry.push(ch);
            self.current_input = entry.clone();
            trace!(display = %entry, "appended");
        }
    }

    /// Selects the operator for the next computation
    ///
    /// With an operation already pending, the pending operation is computed
    /// first so chains like `5 + 3 +` keep a running total. If that
    /// computation fails, the new operator is not recorded.
    pub fn select_operator(&mut self, op: Operator) {
        if self.display.is_empty() {
            trace!(%op, "operator ignored on empty display");
            return;
        }

        if self.operator.is_some() && !self.previous_input.is_empty() {
            if let Some(Err(err)) = self.compute() {
                debug!(%op, %err, "implicit compute failed, operator not recorded");
                return;
            }
        }

        self.operator = Some(op);
        self.previous_input = self.display.to_operand();
        self.reset_display = true;
        debug!(%op, lhs = %self.previous_input, "operator selected");
    }

    /// Computes the pending operation
    ///
    /// Returns `None` when there is nothing to compute. On success the
    /// result (rounded to eight decimal places) replaces the display and the
    /// pending operation is consumed. On failure the error message replaces
    /// the display and operator and operand state are left as they were.
    pub fn compute(&mut self) -> Option<CalcResult<f64>> {
        let op = self.operator?;
        if self.previous_input.is_empty() || self.current_input.is_empty() {
            trace!("compute skipped, operand missing");
            return None;
        }

        let outcome = self.evaluate(op);
        match outcome {
            Ok(value) => {
                let result = Operand::from_value(value);
                debug!(
                    lhs = %self.previous_input,
                    %op,
                    rhs = %self.current_input,
                    result = %result,
                    "computed"
                );
                self.display = Display::Number(result.clone());
                self.current_input = result;
                self.operator = None;
                self.previous_input = Operand::empty();
                self.reset_display = true;
            }
            Err(err) => {
                debug!(
                    lhs = %self.previous_input,
                    %op,
                    rhs = %self.current_input,
                    %err,
                    "compute failed"
                );
                self.display = Display::Error(err);
            }
        }
        Some(outcome)
    }

    fn evaluate(&self, op: Operator) -> CalcResult<f64> {
        let lhs = self.previous_input.parse()?;
        let rhs = self.current_input.parse()?;
        let raw = op.apply(lhs, rhs)?;
        Ok(round_to_places(raw, RESULT_DECIMAL_PLACES))
    }

    /// Divides the displayed number by 100
    ///
    /// The result is not rounded. Operator and previous input are untouched.
    pub fn percent(&mut self) {
        if self.display.is_empty() {
            return;
        }

        match self.display.to_operand().parse() {
            Ok(value) => {
                let result = Operand::from_value(value / 100.0);
                debug!(result = %result, "percent");
                self.display = Display::Number(result.clone());
                self.current_input = result;
            }
            Err(err) => {
                debug!(%err, "percent failed");
                self.display = Display::Error(err);
            }
        }
    }

    /// Removes the last display character
    ///
    /// An error message is removed as a whole.
    pub fn backspace(&mut self) {
        match &mut self.display {
            Display::Error(_) => {
                self.display = Display::default();
                self.current_input = Operand::empty();
            }
            Display::Number(entry) => {
                if entry.pop().is_some() {
                    self.current_input = entry.clone();
                }
            }
        }
    }
}
