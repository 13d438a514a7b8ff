//! Terminal rendering
//!
//! [`render_lines`] builds the frame as plain text so it can be tested
//! without a terminal; [`draw`] writes it through crossterm.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use super::app::CalculatorApp;
use crate::core::{CalcState, KEYPAD_ROWS};

/// Number of characters the display box shows
pub const DISPLAY_WIDTH: usize = 24;

/// Row of the display text within the frame
const DISPLAY_ROW: usize = 1;

const HELP_LINES: [&str; 3] = [
    " 0-9 .  digits     + - * /  operators",
    " Enter =  equals   %  percent   Backspace",
    " Esc c  clear      q  quit",
];

/// Builds the frame for the current app state
#[must_use]
pub fn render_lines(app: &CalculatorApp) -> Vec<String> {
    let border = "─".repeat(DISPLAY_WIDTH + 2);
    let mut lines = vec![
        format!("┌{border}┐"),
        format!("│ {} │", fit_display(&app.display())),
        format!("└{border}┘"),
    ];

    lines.push(format!(" state: {}", app.state()));
    let engine = app.engine();
    match engine.operator() {
        Some(op) => lines.push(format!(" pending: {} {}", engine.previous_input(), op.glyph())),
        None => lines.push(String::new()),
    }
    lines.push(String::new());

    for row in KEYPAD_ROWS {
        let cells: Vec<String> = row
            .iter()
            .map(|action| {
                let label = action.label();
                if app.last_action() == Some(*action) {
                    format!("<{label:^3}>")
                } else {
                    format!("[{label:^3}]")
                }
            })
            .collect();
        lines.push(format!(" {}", cells.join(" ")));
    }

    lines.push(String::new());
    lines.extend(HELP_LINES.iter().map(ToString::to_string));
    lines
}

/// Right-aligns display text, keeping the trailing characters when too long
fn fit_display(text: &str) -> String {
    let len = text.chars().count();
    if len > DISPLAY_WIDTH {
        text.chars().skip(len - DISPLAY_WIDTH).collect()
    } else {
        format!("{text:>DISPLAY_WIDTH$}")
    }
}

/// Draws the frame to a terminal writer
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn draw<W: Write>(out: &mut W, app: &CalculatorApp) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    let error_shown = app.state() == CalcState::ErrorShown;

    for (row, line) in render_lines(app).iter().enumerate() {
        let y = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, y))?;
        if row == DISPLAY_ROW && error_shown {
            queue!(out, SetForegroundColor(Color::Red), Print(line), ResetColor)?;
        } else {
            queue!(out, Print(line))?;
        }
    }

    out.flush()
}
