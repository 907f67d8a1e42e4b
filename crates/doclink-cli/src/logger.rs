//! Logging infrastructure for the doclink CLI.
//!
//! # Example
//!
//! ```rust,no_run
//! use doclink_cli::logger::init_logger;
//! use tracing::debug;
//!
//! init_logger(false, false, false, None);
//!
//! debug!("Resolving {}", "Deno.File");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "doclink=debug,doclink_core=debug,doclink_config=debug,doclink_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_LEVEL: &str = "info";

/// Initialize the tracing subscriber with the specified options.
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for doclink crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. `settings.log_level` from the config file
/// 5. Default: INFO
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool, config_level: Option<&str>) {
    init_logger_with_filter(build_filter(verbose, quiet, config_level), no_color);
}

/// Initialize logger with custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second initialization (tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn build_filter(verbose: bool, quiet: bool, config_level: Option<&str>) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            config_level
                .and_then(|level| EnvFilter::try_new(level).ok())
                .unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL))
        })
    }
}
