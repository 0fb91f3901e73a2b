//! Logging setup for the amdwrap CLI.
//!
//! Built on `tracing`. The core crates log per-module decisions at `debug`
//! and advisories at `warn`; the CLI reports advisories itself, so by default
//! only its own `info` output and core errors are shown.
//!
//! # Example
//!
//! ```rust,no_run
//! use amdwrap_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Transforming modules");
//! debug!("Processing module: {}", "Main.controller.js");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "amdwrap=debug,amdwrap_gen=debug,amdwrap_cli=debug";
const QUIET_FILTER: &str = "amdwrap=error,amdwrap_cli=error";
const DEFAULT_FILTER: &str = "amdwrap=error,amdwrap_cli=info";

/// Initialize the tracing subscriber.
///
/// Call once, before any logging occurs.
///
/// # Verbosity Levels
///
/// 1. `--verbose`: DEBUG for all amdwrap crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`: custom filter
/// 4. Default: INFO for the CLI, errors from the core
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize logger with a custom filter.
///
/// ```rust,no_run
/// use amdwrap_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_logger_with_filter(EnvFilter::new("amdwrap=trace"), false);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be installed once per process, so these
    // only exercise filter construction.

    #[test]
    fn test_verbose_filter_builds() {
        let filter = filter_for(true, false);
        assert!(filter.to_string().contains("amdwrap=debug"));
    }

    #[test]
    fn test_quiet_filter_builds() {
        let filter = filter_for(false, true);
        assert!(filter.to_string().contains("amdwrap_cli=error"));
    }

    #[test]
    fn test_default_filter_parses() {
        let _filter = EnvFilter::new(DEFAULT_FILTER);
    }
}
