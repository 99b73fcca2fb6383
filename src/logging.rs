//! Tracing setup shared by both roles.
//!
//! Logs go to stderr so they never mix with review output on stdout.
//! `RUST_LOG` overrides the per-role default filter.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter for `critic serve`.
pub const GATEWAY_FILTER: &str = "info,tower_http=debug";

/// Default filter for the console. Quiet unless something goes wrong.
pub const CONSOLE_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
