//! Grafana HTTP API client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `dashboards`: Dashboard methods
//! - `datasources`: Datasource methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Dashboard JSON encoding (delegated to [`crate::codec`])
//!
//! # Invariants
//! - Every method issues one request (plus rate-limit retries), except
//!   [`GrafanaClient::save_dashboard`], which re-fetches the saved dashboard.

pub mod builder;

mod dashboards;
mod datasources;

use secrecy::{ExposeSecret, SecretString};

/// Grafana REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use grafana_client::GrafanaClient;
/// use secrecy::SecretString;
///
/// let client = GrafanaClient::builder()
///     .base_url("http://localhost:3000".to_string())
///     .api_token(SecretString::new("my-token".to_string().into()))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct GrafanaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_token: Option<SecretString>,
    pub(crate) max_retries: usize,
}

impl GrafanaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GrafanaClientBuilder {
        builder::GrafanaClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests carry an `Authorization` header.
    pub fn has_api_token(&self) -> bool {
        self.api_token.is_some()
    }

    pub(crate) fn auth_token(&self) -> Option<&str> {
        self.api_token.as_ref().map(|t| t.expose_secret())
    }
}
