//! Tracing setup for wstat.
//!
//! Everything is written to stderr; stdout is reserved for report lines so
//! that `--format json` output can be piped straight into other tools.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Quiet setup used by a normal `wstat` run: warnings and errors only
pub fn init() {
    init_with_level("warn")
}

/// Install the subscriber with `default_level` unless RUST_LOG is set
///
/// `--verbose` passes "debug" here to show factory and config decisions.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Route debug output through the libtest writer; safe to call from every test
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
