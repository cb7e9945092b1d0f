//! Logging initialization for applications embedding the client.
//!
//! The library itself only emits `tracing` events; it never installs a
//! subscriber. Binaries and test harnesses call [`LoggingConfig::init`] once.
//!
//! # Usage
//!
//! ```rust,ignore
//! use grafana_client::logging::LoggingConfig;
//!
//! LoggingConfig::new().with_json(true).init()?;
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for the `tracing-subscriber` registry.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset or invalid, e.g. `info` or `grafana_client=debug`.
    pub default_filter: String,
    /// Emit one JSON object per event instead of human-readable lines.
    pub json: bool,
    /// Include the event target (module path) in each line.
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
            json: false,
            with_target: true,
        }
    }
}

impl LoggingConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    /// The filter this config installs: `RUST_LOG` if valid, else `default_filter`.
    pub fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.default_filter)
                .map_err(|e| LoggingError::InvalidFilter(e.to_string())),
        }
    }

    /// Install the global subscriber.
    ///
    /// # Errors
    /// Returns an error if the filter is invalid or a global subscriber is
    /// already installed.
    pub fn init(&self) -> Result<(), LoggingError> {
        let env_filter = self.env_filter()?;

        let result = if self.json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_target(self.with_target))
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_target(self.with_target))
                .try_init()
        };

        result.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
    }
}

/// Errors that can occur during logging initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),
    #[error("Failed to install global subscriber: {0}")]
    AlreadyInitialized(String),
}
