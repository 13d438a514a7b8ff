//! Calculator engine core
//!
//! One pending binary operation, two string operands and a single display.
//! Failures never escape the engine: they are written to the display as
//! the literal text of the [`CalcError`] variant.

mod action;
pub mod engine;
pub mod number;
mod operations;

pub use action::{KeypadAction, KEYPAD_ROWS};
pub use engine::{CalcState, CalculatorEngine, Display};
pub use number::{format_number, parse_operand, Operand};
pub use operations::{round_to_places, Operator, RESULT_DECIMAL_PLACES};

use thiserror::Error;

/// Result type for calculator arithmetic
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// The `Display` output of each variant is exactly what the calculator
/// shows to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division with a zero right operand
    #[error("Error: Division by zero")]
    DivisionByZero,
    /// An operand had no numeric prefix
    #[error("Error")]
    ParseFailure,
}
