//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// keycalc: four-function keypad calculator
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive terminal calculator
    Run,

    /// Replay keys and print the display
    ///
    /// A token may hold several single-character keys (`12.5`); `Enter`,
    /// `Escape` and `Backspace` stand alone; `%` is percent.
    Keys(KeysArgs),

    /// Show configuration
    Config,
}

/// Arguments for the keys command
#[derive(Parser, Debug)]
pub struct KeysArgs {
    /// Keys to press, in order
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_keys() {
        let cli = parse(&["keycalc", "keys", "5", "+", "3", "="]);
        match cli.command {
            Commands::Keys(args) => {
                assert_eq!(args.keys, ["5", "+", "3", "="]);
                assert!(!args.trace);
                assert!(!args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_keys_with_flags() {
        let cli = parse(&["keycalc", "keys", "--trace", "--json", "1", "-", "2"]);
        match cli.command {
            Commands::Keys(args) => {
                assert!(args.trace);
                assert!(args.json);
                assert_eq!(args.keys, ["1", "-", "2"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_keys_requires_keys() {
        assert!(Cli::try_parse_from(["keycalc", "keys"]).is_err());
    }

    #[test]
    fn test_parse_run_and_config() {
        assert!(matches!(parse(&["keycalc", "run"]).command, Commands::Run));
        assert!(matches!(parse(&["keycalc", "config"]).command, Commands::Config));
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = parse(&["keycalc", "-vv", "--color", "never", "config"]);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
        assert_eq!(cli.color, ColorArg::Never);

        let cli = parse(&["keycalc", "config", "-q"]);
        assert!(cli.quiet);
        assert_eq!(cli.color, ColorArg::Auto);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["keycalc"]).is_err());
    }

    #[test]
    fn test_color_arg_conversion() {
        assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
        assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
    }
}
