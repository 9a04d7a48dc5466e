//! Diagnostic logging for the console game.
//!
//! Events go to stderr so they never interleave with the game text on stdout.
//! The level comes from `RUST_LOG` and defaults to `warn`.

use std::error::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

const DEFAULT_FILTER: &str = "warn";

/// Installs the global tracing subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init() -> Result<(), Box<dyn Error>> {
    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let subscriber = Registry::default().with(build_env_filter()).with(stderr_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
