//! Testing utilities for Grafana client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use grafana_client::testing::{load_fixture, load_fixture_bytes};
//!
//! let envelope = load_fixture("dashboards/get_dashboard.json");
//! let raw = load_fixture_bytes("dashboards/get_dashboard.json");
//! ```

use std::path::{Path, PathBuf};

fn fixture_path(fixture_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path)
}

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let bytes = load_fixture_bytes(fixture_path);
    serde_json::from_slice(&bytes).expect("Invalid JSON in fixture")
}

/// Load a fixture file verbatim, for feeding the codec raw bytes.
///
/// # Panics
/// If the fixture file cannot be read.
pub fn load_fixture_bytes(path: &str) -> Vec<u8> {
    let full_path = fixture_path(path);
    std::fs::read(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}
