//! Scripted key replay for the `keys` command

use console::Style;
use keycalc::core::{CalcState, CalculatorEngine, KeypadAction};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Keys that are only recognised as whole tokens
const NAMED_KEYS: [&str; 3] = ["Enter", "Escape", "Backspace"];

/// Parses command-line key tokens into input events
///
/// # Errors
///
/// Returns [`CliError::InvalidArgument`] for an empty token or a character
/// that is not a calculator key.
pub fn parse_keys<S: AsRef<str>>(tokens: &[S]) -> CliResult<Vec<KeypadAction>> {
    let mut actions = Vec::new();
    for token in tokens {
        let token = token.as_ref();
        if token.is_empty() {
            return Err(CliError::invalid_argument("empty key"));
        }
        if NAMED_KEYS.contains(&token) {
            actions.extend(KeypadAction::from_key(token));
            continue;
        }
        for ch in token.chars() {
            let action = if ch == '%' {
                Some(KeypadAction::Percent)
            } else {
                KeypadAction::from_key(&ch.to_string())
            };
            let action = action.ok_or_else(|| {
                CliError::invalid_argument(format!("unknown key `{ch}` in `{token}`"))
            })?;
            actions.push(action);
        }
    }
    Ok(actions)
}

/// Display after one replayed key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    /// Keypad label of the key
    pub key: String,
    /// Display text after the key
    pub display: String,
    /// State after the key
    pub state: CalcState,
}

/// Outcome of a replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Final display text
    pub display: String,
    /// Final state
    pub state: CalcState,
    /// Per-key steps, when traced
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<ReplayStep>,
}

/// Runs `actions` through a fresh engine
#[must_use]
pub fn replay(actions: &[KeypadAction], trace: bool) -> ReplayReport {
    let mut engine = CalculatorEngine::new();
    let mut steps = Vec::new();

    for action in actions {
        engine.apply(*action);
        debug!(key = %action.label(), display = %engine.display(), "replayed");
        if trace {
            steps.push(ReplayStep {
                key: action.label(),
                display: engine.display(),
                state: engine.state(),
            });
        }
    }

    info!(keys = actions.len(), display = %engine.display(), "replay finished");
    ReplayReport {
        display: engine.display(),
        state: engine.state(),
        steps,
    }
}

/// Renders a report as text, one line per traced step then the final display
#[must_use]
pub fn render_plain(report: &ReplayReport) -> String {
    let key_style = Style::new().dim();
    let mut out = String::new();
    for step in &report.steps {
        out.push_str(&format!(
            "{}\t{}\n",
            key_style.apply_to(&step.key),
            display_style(step.state).apply_to(&step.display)
        ));
    }
    out.push_str(&format!(
        "{}\n",
        display_style(report.state).apply_to(&report.display)
    ));
    out
}

fn display_style(state: CalcState) -> Style {
    if state == CalcState::ErrorShown {
        Style::new().red().bold()
    } else {
        Style::new().bold()
    }
}

/// Renders a report as JSON
///
/// # Errors
///
/// Returns an I/O error if serialization fails.
pub fn render_json(report: &ReplayReport) -> CliResult<String> {
    serde_json::to_string_pretty(report)
        .map_err(std::io::Error::from)
        .map_err(CliError::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use keycalc::core::Operator;

    fn plain(report: &ReplayReport) -> String {
        console::set_colors_enabled(false);
        render_plain(report)
    }

    // ===== parse_keys tests =====

    #[test]
    fn test_parse_single_keys() {
        let actions = parse_keys(&["5", "+", "3", "="]).unwrap();
        assert_eq!(
            actions,
            [
                KeypadAction::Digit(5),
                KeypadAction::Operator(Operator::Add),
                KeypadAction::Digit(3),
                KeypadAction::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_multi_char_token() {
        let actions = parse_keys(&["12.5*2="]).unwrap();
        assert_eq!(actions.len(), 7);
        assert_eq!(actions[2], KeypadAction::Decimal);
        assert_eq!(actions[4], KeypadAction::Operator(Operator::Multiply));
    }

    #[test]
    fn test_parse_named_keys() {
        let actions = parse_keys(&["Enter", "Escape", "Backspace"]).unwrap();
        assert_eq!(
            actions,
            [
                KeypadAction::Equals,
                KeypadAction::Clear,
                KeypadAction::Backspace
            ]
        );
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(
            parse_keys(&["50%"]).unwrap(),
            [
                KeypadAction::Digit(5),
                KeypadAction::Digit(0),
                KeypadAction::Percent
            ]
        );
    }

    #[test]
    fn test_parse_clear_letters() {
        assert_eq!(
            parse_keys(&["c", "C"]).unwrap(),
            [KeypadAction::Clear, KeypadAction::Clear]
        );
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = parse_keys(&["5", "x"]).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
        assert!(err.to_string().contains("`x`"));
    }

    #[test]
    fn test_parse_named_key_case_sensitive() {
        assert!(parse_keys(&["enter"]).is_err());
    }

    #[test]
    fn test_parse_empty_token() {
        assert!(parse_keys(&[""]).is_err());
    }

    // ===== replay tests =====

    #[test]
    fn test_replay_final_display() {
        let actions = parse_keys(&["5+3+2="]).unwrap();
        let report = replay(&actions, false);
        assert_eq!(report.display, "10");
        assert_eq!(report.state, CalcState::ResultShown);
        assert!(report.steps.is_empty());
    }

    #[test]
    fn test_replay_trace_steps() {
        let actions = parse_keys(&["8/0="]).unwrap();
        let report = replay(&actions, true);
        assert_eq!(report.steps.len(), 4);
        assert_eq!(report.steps[1].key, "÷");
        assert_eq!(report.steps[3].display, "Error: Division by zero");
        assert_eq!(report.steps[3].state, CalcState::ErrorShown);
    }

    // ===== render tests =====

    #[test]
    fn test_render_plain_final_only() {
        let report = replay(&parse_keys(&["6*7="]).unwrap(), false);
        assert_eq!(plain(&report), "42\n");
    }

    #[test]
    fn test_render_plain_trace() {
        let report = replay(&parse_keys(&["1+2="]).unwrap(), true);
        assert_eq!(plain(&report), "1\t1\n+\t1\n2\t2\n=\t3\n3\n");
    }

    #[test]
    fn test_render_json() {
        let report = replay(&parse_keys(&["50%"]).unwrap(), false);
        let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(json["display"], "0.5");
        assert_eq!(json["state"], "entering_first_operand");
        assert!(json.get("steps").is_none());
    }

    #[test]
    fn test_render_json_with_steps() {
        let report = replay(&parse_keys(&["9"]).unwrap(), true);
        let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(json["steps"][0]["key"], "9");
        assert_eq!(json["steps"][0]["display"], "9");
    }
}
