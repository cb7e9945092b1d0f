//! The dashboard document model and Grafana API payloads.
//!
//! Dashboards form a tree (dashboard, rows, panels, queries) with variables
//! alongside. Types are organized by level in submodules and re-exported here.

pub mod common;
pub mod dashboard;
pub mod datasource;
pub mod field;
pub mod panel;
mod probe;
pub mod query;
pub mod row;
pub mod search;
pub mod variable;

pub use common::GrafanaMessage;
pub use dashboard::{
    DEFAULT_SCHEMA_VERSION, Dashboard, DashboardMeta, DashboardStyle, GraphTooltip,
    SaveDashboardResponse,
};
pub(crate) use dashboard::{DashboardEnvelope, SaveDashboardRequest};
pub use datasource::{Datasource, DatasourceAccess};
pub use field::{ForceString, Tags};
pub use panel::{
    DrawOptions, Gauge, GeneralOptions, GraphPanel, Legend, NullPointMode, Panel, PanelLink,
    PanelLinkType, SeriesOverride, SeriesStack, SinglestatPanel, Sparkline, StackedValue,
    TextMode, TextPanel, Threshold, ThresholdColorMode, ThresholdOp, TimeRangeOptions, Tooltip,
    TooltipSort, XAxis, XAxisMode, YAxes, YAxis,
};
pub(crate) use probe::decode_known;
pub use query::{
    GraphiteQuery, MIXED_DATASOURCE, PrometheusQuery, Queries, Query, ref_id_for_index,
};
pub use row::Row;
pub use search::{DashboardHit, DashboardSearchOptions};
pub use variable::{
    ConstantVariable, CustomVariable, DatasourceVariable, HideMode, IntervalVariable,
    QueryVariable, SortOrder, Templating, Variable, VariableOptions,
};
