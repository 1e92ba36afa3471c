//! Tracing subscriber setup
//!
//! Events go to stderr so stdout carries only calculator output.
//! `RUST_LOG` takes precedence over the `-q`/`-v` flags.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Builds the filter for the given verbosity
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global subscriber; a second call is a no-op
pub fn init(verbosity: Verbosity) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(?verbosity, "logging initialized");
    }
}
