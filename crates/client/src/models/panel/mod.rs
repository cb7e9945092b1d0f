//! Dashboard panels.
//!
//! Responsibilities:
//! - The closed set of supported panel kinds ([`Panel`]).
//! - Options shared by every kind ([`GeneralOptions`]), flattened into each panel object.
//! - Dispatch on the `"type"` discriminator when decoding.
//!
//! Does NOT handle:
//! - Panel numbering. Ids are written by the owning row or dashboard.
//!
//! Invariants:
//! - A panel of unknown `"type"` decodes to nothing and is skipped by list decoders.
//! - `GeneralOptions`, the kind's own fields and the query block own disjoint keys.

mod graph;
mod singlestat;
mod text;

pub use graph::{
    DrawOptions, GraphPanel, Legend, NullPointMode, SeriesOverride, SeriesStack, StackedValue,
    Threshold, ThresholdColorMode, ThresholdOp, Tooltip, TooltipSort, XAxis, XAxisMode, YAxes,
    YAxis,
};
pub use singlestat::{
    DEFAULT_SINGLESTAT_COLORS, Gauge, SinglestatPanel, Sparkline, TimeRangeOptions,
};
pub use text::{TextMode, TextPanel};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field::ForceString;
use super::probe::{Discriminated, declared_type};
use super::query::Queries;
use crate::serde_helpers::null_as_default;

/// Fields common to every panel kind.
///
/// `id` is positional: it is rewritten whenever the owning row or dashboard is
/// encoded, and it does not take part in equality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralOptions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub height: ForceString,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<PanelLink>,
    /// Minimum width in grid columns (1-12).
    #[serde(rename = "minSpan", default, deserialize_with = "null_as_default")]
    pub min_span: u8,
    /// Width in grid columns (1-12).
    #[serde(default, deserialize_with = "null_as_default")]
    pub span: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transparent: bool,
}

impl GeneralOptions {
    /// Positional id written by the last encode, or read from the wire.
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl PartialEq for GeneralOptions {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
            && self.height == other.height
            && self.links == other.links
            && self.min_span == other.min_span
            && self.span == other.span
            && self.title == other.title
            && self.transparent == other.transparent
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelLinkType {
    #[default]
    Absolute,
    Dashboard,
}

/// A link shown in the panel header.
///
/// Absolute links use `title` and `url`; dashboard links use `dashboard_uri`
/// and `dashboard`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelLink {
    #[serde(rename = "includeVars", default, deserialize_with = "null_as_default")]
    pub include_vars: bool,
    #[serde(rename = "keepTime", default, deserialize_with = "null_as_default")]
    pub keep_time: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub params: String,
    #[serde(rename = "targetBlank", default, deserialize_with = "null_as_default")]
    pub open_in_new_tab: bool,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub link_type: PanelLinkType,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub title: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub url: String,
    #[serde(
        rename = "dashUri",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub dashboard_uri: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub dashboard: String,
}

impl PanelLink {
    pub fn absolute(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn dashboard(dashboard: impl Into<String>, dashboard_uri: impl Into<String>) -> Self {
        Self {
            link_type: PanelLinkType::Dashboard,
            dashboard: dashboard.into(),
            dashboard_uri: dashboard_uri.into(),
            ..Self::default()
        }
    }
}

/// A dashboard panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Panel {
    Text(TextPanel),
    Singlestat(SinglestatPanel),
    Graph(GraphPanel),
}

impl Panel {
    /// The wire discriminator of this panel.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Singlestat(_) => "singlestat",
            Self::Graph(_) => "graph",
        }
    }

    pub fn general_options(&self) -> &GeneralOptions {
        match self {
            Self::Text(p) => &p.general,
            Self::Singlestat(p) => &p.general,
            Self::Graph(p) => &p.general,
        }
    }

    pub fn general_options_mut(&mut self) -> &mut GeneralOptions {
        match self {
            Self::Text(p) => &mut p.general,
            Self::Singlestat(p) => &mut p.general,
            Self::Graph(p) => &mut p.general,
        }
    }

    /// The query list, for panel kinds that run queries.
    pub fn queries(&self) -> Option<&Queries> {
        match self {
            Self::Text(_) => None,
            Self::Singlestat(p) => Some(&p.queries),
            Self::Graph(p) => Some(&p.queries),
        }
    }

    pub fn queries_mut(&mut self) -> Option<&mut Queries> {
        match self {
            Self::Text(_) => None,
            Self::Singlestat(p) => Some(&mut p.queries),
            Self::Graph(p) => Some(&mut p.queries),
        }
    }

    /// Decode one panel object. Returns `Ok(None)` for an unknown `"type"`.
    pub fn from_value(value: Value) -> Result<Option<Self>, serde_json::Error> {
        let kind = match declared_type(&value)? {
            Some("text") => PanelKind::Text,
            Some("singlestat") => PanelKind::Singlestat,
            Some("graph") => PanelKind::Graph,
            other => {
                tracing::debug!(panel_type = ?other, "skipping panel of unknown type");
                return Ok(None);
            }
        };
        let panel = match kind {
            PanelKind::Text => Self::Text(TextPanel::deserialize(value)?),
            PanelKind::Singlestat => Self::Singlestat(SinglestatPanel::deserialize(value)?),
            PanelKind::Graph => Self::Graph(GraphPanel::deserialize(value)?),
        };
        Ok(Some(panel))
    }

    /// Write `id` into this panel and positional ref IDs into its queries.
    pub(crate) fn prepare_encode(&mut self, id: u32) {
        self.general_options_mut().id = id;
        if let Some(queries) = self.queries_mut() {
            queries.assign_ref_ids();
        }
    }
}

impl Discriminated for Panel {
    fn from_value(value: Value) -> Result<Option<Self>, serde_json::Error> {
        Panel::from_value(value)
    }
}

#[derive(Clone, Copy)]
enum PanelKind {
    Text,
    Singlestat,
    Graph,
}

impl From<TextPanel> for Panel {
    fn from(panel: TextPanel) -> Self {
        Self::Text(panel)
    }
}

impl From<SinglestatPanel> for Panel {
    fn from(panel: SinglestatPanel) -> Self {
        Self::Singlestat(panel)
    }
}

impl From<GraphPanel> for Panel {
    fn from(panel: GraphPanel) -> Self {
        Self::Graph(panel)
    }
}
