//! Logging setup
//!
//! `RUST_LOG` takes precedence over the verbosity flags. Logs go to stderr
//! so stdout stays clean for display output.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Builds the log filter for `verbosity`, honouring `RUST_LOG` when set
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(verbosity.log_filter())
    }
}

/// Installs the global subscriber; later calls are no-ops
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_verbosity() {
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
            assert_eq!(env_filter(Verbosity::Verbose).to_string(), "info");
            assert_eq!(env_filter(Verbosity::Quiet).to_string(), "error");
        }
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(Verbosity::Normal);
        init(Verbosity::Debug);
    }
}
