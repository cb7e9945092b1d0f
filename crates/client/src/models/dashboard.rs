//! The dashboard document and its server envelope.
//!
//! Responsibilities:
//! - Hold user-authored dashboard state (rows, tags, templating, display settings).
//! - Keep server-owned state (id, version, meta) readable but never written back.
//! - Number panels across the whole dashboard before encoding.
//!
//! Invariants:
//! - `id`, `version` and `meta` are only populated by decoding a server response.
//! - Panel ids are unique across the document: numbering continues from row to row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::field::Tags;
use super::panel::Panel;
use super::row::Row;
use super::variable::{Templating, Variable};
use crate::serde_helpers::{null_as_default, wire_u8_enum};

/// Dashboard JSON schema version written by new dashboards.
pub const DEFAULT_SCHEMA_VERSION: u32 = 14;

fn default_schema_version() -> u32 {
    DEFAULT_SCHEMA_VERSION
}

fn schema_version_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(DEFAULT_SCHEMA_VERSION))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardStyle {
    #[default]
    Dark,
    Light,
}

/// Whether hovering one graph highlights the same time on the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GraphTooltip {
    #[default]
    Default,
    SharedCrosshair,
    SharedTooltip,
}

wire_u8_enum!(GraphTooltip {
    Default = 0,
    SharedCrosshair = 1,
    SharedTooltip = 2,
});

/// A dashboard document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(default, skip_serializing)]
    id: Option<u64>,
    #[serde(default, skip_serializing)]
    version: Option<u64>,
    #[serde(
        rename = "schemaVersion",
        default = "default_schema_version",
        deserialize_with = "schema_version_or_default"
    )]
    pub schema_version: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub editable: bool,
    #[serde(rename = "graphTooltip", default, deserialize_with = "null_as_default")]
    pub graph_tooltip: GraphTooltip,
    #[serde(rename = "hideControls", default, deserialize_with = "null_as_default")]
    pub hide_controls: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rows: Vec<Row>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub style: DashboardStyle,
    /// `browser`, `utc`, or empty for the user's default.
    #[serde(default, deserialize_with = "null_as_default")]
    pub timezone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    tags: Tags,
    #[serde(default, deserialize_with = "null_as_default")]
    pub templating: Templating,
    #[serde(default, skip_serializing)]
    meta: Option<DashboardMeta>,
}

impl Dashboard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            version: None,
            schema_version: DEFAULT_SCHEMA_VERSION,
            editable: true,
            graph_tooltip: GraphTooltip::Default,
            hide_controls: false,
            rows: Vec::new(),
            style: DashboardStyle::Dark,
            timezone: String::new(),
            title: title.into(),
            tags: Tags::default(),
            templating: Templating::default(),
            meta: None,
        }
    }

    /// Server-assigned id; `None` until the dashboard has been saved.
    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn version(&self) -> Option<u64> {
        self.version
    }

    /// Server metadata, present on dashboards fetched from Grafana.
    pub fn meta(&self) -> Option<&DashboardMeta> {
        self.meta.as_ref()
    }

    pub(crate) fn set_meta(&mut self, meta: Option<DashboardMeta>) {
        self.meta = meta;
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.set(tags);
    }

    pub fn add_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.add(tags);
    }

    pub fn remove_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags.remove(tags);
    }

    pub fn add_row(&mut self, row: Row) -> &mut Row {
        self.rows.push(row);
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    pub fn add_variable(&mut self, variable: Variable) {
        self.templating.list.push(variable);
    }

    /// Iterate over every panel in row order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.rows.iter().flat_map(|row| row.panels.iter())
    }

    /// Number panels `1..=n` across all rows and assign missing query ref IDs.
    pub fn assign_panel_ids(&mut self) {
        let mut next = 1;
        for row in &mut self.rows {
            next = row.number_panels_from(next);
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new("")
    }
}

/// Server-side metadata returned alongside a fetched dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardMeta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: u64,
    #[serde(rename = "canEdit", default, deserialize_with = "null_as_default")]
    pub can_edit: bool,
    #[serde(rename = "canSave", default, deserialize_with = "null_as_default")]
    pub can_save: bool,
    #[serde(rename = "canStar", default, deserialize_with = "null_as_default")]
    pub can_star: bool,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(rename = "createdBy", default, deserialize_with = "null_as_default")]
    pub created_by: String,
    #[serde(default)]
    pub expires: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
    #[serde(rename = "updatedBy", default, deserialize_with = "null_as_default")]
    pub updated_by: String,
}

/// `{"dashboard": ..., "meta": ...}` as returned by `GET /api/dashboards/db/{slug}`.
#[derive(Debug, Deserialize)]
pub(crate) struct DashboardEnvelope {
    pub dashboard: Dashboard,
    #[serde(default)]
    pub meta: Option<DashboardMeta>,
}

impl DashboardEnvelope {
    pub fn into_dashboard(self) -> Dashboard {
        let mut dashboard = self.dashboard;
        dashboard.set_meta(self.meta);
        dashboard
    }
}

/// Body of `POST /api/dashboards/db`.
#[derive(Debug, Serialize)]
pub(crate) struct SaveDashboardRequest<'a> {
    pub dashboard: &'a Dashboard,
    pub overwrite: bool,
}

/// Response of `POST /api/dashboards/db`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDashboardResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: u64,
}

impl SaveDashboardResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
