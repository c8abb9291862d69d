//! Tracing setup: subscriber initialization and event definitions.

pub mod events;

use outfitvote_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "OUTFITVOTE_LOG";

/// Install a JSON subscriber on stderr filtered by `OUTFITVOTE_LOG`
/// (default `info`). Returns false if a subscriber was already installed.
pub fn init_tracing() -> bool {
    init_tracing_from_config(&ObservabilityConfig {
        json_logs: true,
        ..ObservabilityConfig::default()
    })
}

/// Install a subscriber for `config`. `OUTFITVOTE_LOG` still wins over the
/// configured level. Returns false if a subscriber was already installed.
pub fn init_tracing_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json_logs)
}

/// Install a JSON subscriber with an explicit filter, ignoring the
/// environment. Used by tests and embedders.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter), true)
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        builder.compact().try_init().is_ok()
    }
}
