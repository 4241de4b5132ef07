//! Tracing setup for binaries built on the engine.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build the log filter.
///
/// 1. `debug` sets the level to DEBUG
/// 2. Otherwise `RUST_LOG` is used if set
/// 3. Default is INFO
pub fn env_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new("medic=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("medic=info"))
    }
}

/// Install the global tracing subscriber.
///
/// Only the first call in a process installs anything; later calls are
/// no-ops.
pub fn init_tracing(debug: bool) {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(env_filter(debug))
        .try_init();
}
