//! Centralized constants for the Grafana client workspace.
//!
//! Default values shared between the config loader and the client builder.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of retries for rate-limited requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound for configured retries.
pub const MAX_MAX_RETRIES: usize = 10;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Environment Variables
// =============================================================================

/// Base URL of the Grafana server, e.g. `http://localhost:3000`.
pub const ENV_BASE_URL: &str = "GRAFANA_URL";

/// API token sent as a bearer token.
pub const ENV_API_TOKEN: &str = "GRAFANA_API_TOKEN";

/// Request timeout in seconds.
pub const ENV_TIMEOUT: &str = "GRAFANA_TIMEOUT";

/// Maximum number of retries for rate-limited requests.
pub const ENV_MAX_RETRIES: &str = "GRAFANA_MAX_RETRIES";

/// Skip TLS certificate verification (`true`/`false`).
pub const ENV_SKIP_VERIFY: &str = "GRAFANA_SKIP_VERIFY";

/// When set to any value, `ConfigLoader::load_dotenv` is a no-op.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
