//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use grafana_client::testing::{load_fixture, load_fixture_bytes};

#[allow(unused_imports)]
pub use grafana_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token every mocked request is expected to carry.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";

/// Build a [`grafana_client::GrafanaClient`] pointed at `server`.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> grafana_client::GrafanaClient {
    grafana_client::GrafanaClient::builder()
        .base_url(server.uri())
        .api_token(secrecy::SecretString::new(TEST_TOKEN.to_string().into()))
        .max_retries(0)
        .build()
        .expect("client should build")
}
