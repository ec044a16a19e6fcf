//! Logging initialization for binaries embedding Scrivener.

use std::env;
use tracing_subscriber::EnvFilter;

/// Configuration for the tracing subscriber.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Log level filter (e.g., "info", "debug"); `RUST_LOG` wins when set.
    pub log_level: String,
    /// Enable JSON-formatted logs for structured logging.
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// Create a configuration with the given default log level.
    pub fn new(log_level: impl Into<String>) -> Self {
        Self {
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| log_level.into()),
            json_logs: false,
        }
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new("info")
    }
}

/// Initialize the global tracing subscriber.
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
            .ok();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .ok();
    }
}
