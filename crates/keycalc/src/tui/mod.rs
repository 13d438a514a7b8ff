//! Terminal frontend
//!
//! Key events come from crossterm; frames are plain text lines written
//! through crossterm commands.

mod app;
mod input;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, TuiAction};
pub use ui::{draw, render_lines, DISPLAY_WIDTH};
