//! Interactive terminal session for the `run` command

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keycalc::tui::{draw, CalculatorApp, InputHandler};
use tracing::info;

use crate::error::{CliError, CliResult};

/// Runs the calculator in raw mode on the alternate screen until quit
///
/// The terminal is restored even when the session fails.
///
/// # Errors
///
/// Returns [`CliError::Terminal`] if the terminal cannot be set up, drawn
/// or restored.
pub fn run_interactive() -> CliResult<()> {
    let mut stdout = io::stdout();

    enable_raw_mode().map_err(|e| CliError::terminal(format!("failed to enable raw mode: {e}")))?;
    if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
        let _ = disable_raw_mode();
        return Err(CliError::terminal(format!(
            "failed to enter alternate screen: {e}"
        )));
    }

    let session = run_session(&mut stdout, || event::read().map(Some));
    let restored = restore(&mut stdout);

    let app = session?;
    restored?;
    info!(display = %app.display(), "session ended");
    Ok(())
}

fn restore<W: Write>(out: &mut W) -> CliResult<()> {
    let screen = execute!(out, Show, LeaveAlternateScreen);
    let raw = disable_raw_mode();
    screen
        .and(raw)
        .map_err(|e| CliError::terminal(format!("failed to restore terminal: {e}")))
}

/// Draws and handles events until quit or the event source is exhausted
///
/// # Errors
///
/// Returns [`CliError::Terminal`] on a draw or event read failure.
pub fn run_session<W, F>(out: &mut W, mut next_event: F) -> CliResult<CalculatorApp>
where
    W: Write,
    F: FnMut() -> io::Result<Option<Event>>,
{
    let mut app = CalculatorApp::new();
    let handler = InputHandler::new();

    loop {
        draw(out, &app).map_err(|e| CliError::terminal(format!("failed to draw: {e}")))?;

        let event =
            next_event().map_err(|e| CliError::terminal(format!("failed to read event: {e}")))?;
        match event {
            Some(Event::Key(key)) => {
                if app.handle(handler.handle_key(key)) {
                    break;
                }
            }
            Some(_) => {}
            None => break,
        }
    }

    Ok(app)
}
