//! keycalc: keypad calculator on the command line
//!
//! ## Usage
//!
//! ```bash
//! keycalc run                    # Interactive terminal calculator
//! keycalc keys 5 + 3 + 2 =       # Replay keys, prints 10
//! keycalc keys --trace 8 / 0 =   # Show the display after every key
//! keycalc keys --json 50%        # {"display": "0.5", ...}
//! keycalc config                 # Effective configuration
//! ```

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use keycalc_cli::{
    logging,
    replay::{parse_keys, render_json, render_plain, replay},
    terminal::run_interactive,
    Cli, CliConfig, CliError, CliResult, ColorChoice, Commands, KeysArgs, Verbosity,
};
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    logging::init(config.verbosity);
    console::set_colors_enabled(config.color.should_color());
    debug!(?config, "configuration");

    match cli.command {
        Commands::Run => run_interactive(),
        Commands::Keys(args) => run_keys(&config, &args),
        Commands::Config => run_config(&config),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();

    CliConfig::new().with_verbosity(verbosity).with_color(color)
}

fn run_keys(config: &CliConfig, args: &KeysArgs) -> CliResult<()> {
    let actions = parse_keys(&args.keys)?;
    let report = replay(&actions, args.trace);

    let output = if args.json {
        let mut json = render_json(&report)?;
        json.push('\n');
        json
    } else {
        render_plain(&report)
    };

    if config.verbosity.is_verbose() {
        eprintln!("{} keys, final state {}", actions.len(), report.state);
    }
    write_stdout(&output)
}

fn run_config(config: &CliConfig) -> CliResult<()> {
    let json = serde_json::to_string_pretty(config).map_err(std::io::Error::from)?;
    write_stdout(&format!("{json}\n"))
}

fn write_stdout(text: &str) -> CliResult<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes()).map_err(CliError::from)?;
    stdout.flush().map_err(CliError::from)
}
