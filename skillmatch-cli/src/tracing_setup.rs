//! Tracing setup for the skillmatch binary
//!
//! Usage:
//!   skillmatch --debug serve                               # Debug logging
//!   RUST_LOG=skillmatch_server=debug,tower_http=debug ...  # Per-crate filtering
//!
//! `RUST_LOG` always wins over `--debug`.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Default to `debug` instead of `info` when RUST_LOG is unset
    pub debug: bool,
}

/// Build the log filter: RUST_LOG if set, else `debug` or `info`
fn env_filter(debug: bool) -> EnvFilter {
    let default = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global console subscriber
pub fn init(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config.debug))
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_lowers_default_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(env_filter(true).to_string(), "debug");
        assert_eq!(env_filter(false).to_string(), "info");
    }
}
