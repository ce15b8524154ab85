//! `tracing` subscriber setup for the command-line front end.

use std::io;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level for a `-v` count: 0 is warn, 1 info, 2 debug, more is trace.
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// `RUST_LOG` wins over the level derived from the command line.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("timebucket={level}")))
}

/// Installs the global subscriber, writing to stderr. Call once at startup.
pub fn init_logging(verbosity: u8) {
    let level = level_from_verbosity(verbosity);
    let layer = fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(layer)
        .init();
}
