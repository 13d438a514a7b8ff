//! keycalc: a four-function keypad calculator
//!
//! The engine takes discrete key and button events and keeps a single
//! text display plus two operands and one pending operator. Browser and
//! terminal frontends only map their input onto [`core::KeypadAction`]s.
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut calc = CalculatorEngine::new();
//! for key in ["5", "+", "3", "+", "2", "="] {
//!     calc.press_key(key);
//! }
//! assert_eq!(calc.display(), "10");
//!
//! // division by zero keeps the pending division
//! for key in ["8", "/", "0", "="] {
//!     calc.press_key(key);
//! }
//! assert_eq!(calc.display(), "Error: Division by zero");
//! assert_eq!(calc.operator(), Some(Operator::Divide));
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser frontend; the mock DOM builds without browser bindings
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_number, parse_operand, CalcError, CalcResult, CalcState, CalculatorEngine,
        Display, KeypadAction, Operand, Operator,
    };
    pub use crate::driver::CalculatorDriver;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver};
}
