//! keycalc CLI library
//!
//! Command-line host for the keycalc engine: interactive terminal session,
//! scripted key replay and configuration display.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod replay;
pub mod terminal;

pub use commands::{Cli, ColorArg, Commands, KeysArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
