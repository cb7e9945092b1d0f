//! REST API endpoint implementations.
//!
//! Each function issues one request against the Grafana HTTP API and decodes
//! the response. Client methods in [`crate::client`] delegate here.

mod dashboards;
mod datasources;
mod request;
pub mod url_encoding;

pub use dashboards::{delete_dashboard, get_dashboard, save_dashboard, search_dashboards};
pub use datasources::{get_datasource, get_datasource_by_name, list_datasources};
pub use request::send_request_with_retry;
