//! Connection configuration for the Grafana client.
//!
//! This crate provides types and a loader for Grafana connection settings
//! sourced from environment variables and an optional `.env` file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::ConnectionConfig;
