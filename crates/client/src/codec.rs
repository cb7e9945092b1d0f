//! JSON encode/decode entry points for dashboard documents.
//!
//! Responsibilities:
//! - Turn model values into Grafana wire bytes and back.
//! - Run the numbering pass (panel ids, query ref IDs) before encoding.
//!
//! Does NOT handle:
//! - Transport. The HTTP layer hands these functions bytes and nothing else.
//!
//! Invariants:
//! - Encoders that number panels take `&mut` and leave the ids in the model.
//! - Decoders fail only on malformed JSON or wrongly typed fields of a known
//!   kind; unknown panel, query and variable kinds are dropped.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::models::{
    Dashboard, DashboardEnvelope, Panel, Queries, Row, SaveDashboardRequest, Templating,
    Variable, decode_known,
};

/// Encode a dashboard, numbering its panels across all rows.
///
/// Server-owned fields (id, version, meta) are never written.
pub fn encode_dashboard(dashboard: &mut Dashboard) -> Result<Vec<u8>> {
    dashboard.assign_panel_ids();
    Ok(serde_json::to_vec(&*dashboard)?)
}

/// Decode a bare dashboard document.
pub fn decode_dashboard(bytes: &[u8]) -> Result<Dashboard> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decode a `{"dashboard": ..., "meta": ...}` response, attaching `meta`.
pub fn decode_dashboard_envelope(bytes: &[u8]) -> Result<Dashboard> {
    let envelope: DashboardEnvelope = serde_json::from_slice(bytes)?;
    Ok(envelope.into_dashboard())
}

/// Encode a single row, numbering its panels from 1.
pub fn encode_row(row: &mut Row) -> Result<Vec<u8>> {
    row.assign_panel_ids();
    Ok(serde_json::to_vec(&*row)?)
}

pub fn decode_row(bytes: &[u8]) -> Result<Row> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode a panel array, numbering the panels from 1.
pub fn encode_panels(panels: &mut [Panel]) -> Result<Vec<u8>> {
    let mut next: u32 = 1;
    for panel in panels.iter_mut() {
        panel.prepare_encode(next);
        next += 1;
    }
    Ok(serde_json::to_vec(&*panels)?)
}

/// Decode a panel array, skipping panels of unknown type.
pub fn decode_panels(bytes: &[u8]) -> Result<Vec<Panel>> {
    let values: Vec<Value> = serde_json::from_slice(bytes)?;
    Ok(decode_known(values)?)
}

/// Encode a query list as the `{"datasource": ..., "targets": [...]}` block of a panel.
pub fn encode_queries(queries: &Queries) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(queries)?)
}

/// Decode a `{"datasource": ..., "targets": [...]}` block, skipping unrecognized targets.
pub fn decode_queries(bytes: &[u8]) -> Result<Queries> {
    Ok(serde_json::from_slice(bytes)?)
}

#[derive(Serialize)]
struct TemplatingRef<'a> {
    list: &'a [Variable],
}

/// Encode variables as a `{"list": [...]}` templating block.
pub fn encode_variables(variables: &[Variable]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&TemplatingRef { list: variables })?)
}

/// Decode a `{"list": [...]}` templating block, skipping variables of unknown type.
pub fn decode_variables(bytes: &[u8]) -> Result<Vec<Variable>> {
    let templating: Templating = serde_json::from_slice(bytes)?;
    Ok(templating.list)
}

/// Encode the body of a dashboard save request.
pub(crate) fn encode_save_request(dashboard: &mut Dashboard, overwrite: bool) -> Result<Vec<u8>> {
    dashboard.assign_panel_ids();
    let request = SaveDashboardRequest {
        dashboard: &*dashboard,
        overwrite,
    };
    Ok(serde_json::to_vec(&request)?)
}
