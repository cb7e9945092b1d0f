//! Grafana HTTP API client and dashboard document model.
//!
//! This crate provides a typed model of Grafana dashboards (rows, panels,
//! queries and template variables), a JSON codec that round-trips them against
//! Grafana's wire format, and a thin async client for the dashboard and
//! datasource endpoints.

pub mod client;
pub mod codec;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod models;
mod serde_helpers;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::GrafanaClient;
pub use client::builder::GrafanaClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    Dashboard, DashboardHit, DashboardMeta, DashboardSearchOptions, Datasource, GeneralOptions,
    GraphPanel, GraphiteQuery, Panel, PrometheusQuery, Queries, Query, Row, SinglestatPanel, Tags,
    TextPanel, Variable,
};
