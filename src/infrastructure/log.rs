// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.

use crate::config::LogConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber writing to stderr.
///
/// `RUST_LOG` wins over the configured filter. Calling this twice keeps the
/// first subscriber.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(err) = result {
        eprintln!("Failed to install log subscriber: {err}");
    }
}
