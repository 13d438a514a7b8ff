//! Browser frontend
//!
//! The mock DOM, keypad and driver build everywhere so the page wiring is
//! tested natively; the wasm-bindgen entry point needs feature `wasm`.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom, KEYPAD_ELEMENT_ID, RESULT_ELEMENT_ID};
pub use driver::WasmDriver;
pub use keypad::{KeypadButtonDef, MockDomKeypadExt, WasmKeypad};
