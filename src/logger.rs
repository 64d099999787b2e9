//! Logging setup using the `tracing` ecosystem.
//!
//! Everything goes to stderr; stdout carries the generated document.
//!
//! The filter is picked in this order:
//! 1. `--verbose`: debug for cdoc
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. default: warnings for cdoc

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("cdoc=debug")
    } else if quiet {
        EnvFilter::new("cdoc=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cdoc=warn"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
