//! TOML-based configuration for limiter, retry, and provider settings.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from scrivener.toml)
//! - User overrides (./scrivener.toml or ~/.config/scrivener/scrivener.toml)
//! - Automatic merging with user values taking precedence

use crate::{LimiterConfig, RetryConfig};
use config::{Config, File, FileFormat};
use scrivener_error::{ConfigError, ScrivenerError, ScrivenerResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Per-provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Model identifier the adapter should request.
    pub model: String,
}

/// Top-level Scrivener configuration.
///
/// # Example
///
/// ```no_run
/// use scrivener_rate_limit::ScrivenerConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScrivenerConfig::load()?;
/// assert!(config.limiter.capacity > 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct ScrivenerConfig {
    /// Token-bucket parameters applied to every provider.
    #[serde(default)]
    pub limiter: LimiterConfig,

    /// Retry policy wrapped around each provider call.
    #[serde(default)]
    pub retry: RetryConfig,

    /// Map of provider name to provider settings.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

impl ScrivenerConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ScrivenerResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ScrivenerError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScrivenerError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override
    /// earlier):
    /// 1. Bundled defaults (scrivener.toml shipped with the library)
    /// 2. User config in home directory (~/.config/scrivener/scrivener.toml)
    /// 3. User config in current directory (./scrivener.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> ScrivenerResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../scrivener.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scrivener/scrivener.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("scrivener").required(false));

        builder
            .build()
            .map_err(|e| {
                ScrivenerError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScrivenerError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Settings for a provider, when configured.
    pub fn provider(&self, name: &str) -> Option<&ProviderConfig> {
        self.providers.get(name)
    }

    /// The configured model for a provider, when present.
    pub fn model_for(&self, name: &str) -> Option<&str> {
        self.providers.get(name).map(|p| p.model.as_str())
    }
}
