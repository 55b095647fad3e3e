//! Subscriber installation and span helpers.

pub mod spans;

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_level`. Returns `false` when a
/// subscriber was already installed, so repeated calls are harmless.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.is_ok()
}
