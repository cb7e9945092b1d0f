//! The graph (time series) panel and its option blocks.

use serde::{Deserialize, Serialize};

use super::GeneralOptions;
use crate::models::field::ForceString;
use crate::models::query::Queries;
use crate::serde_helpers::{null_as_default, wire_u8_enum};

/// A time series graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphPanel {
    #[serde(default, deserialize_with = "null_as_default")]
    pub yaxes: YAxes,
    #[serde(default, deserialize_with = "null_as_default")]
    pub xaxis: XAxis,
    #[serde(default, deserialize_with = "null_as_default")]
    pub legend: Legend,
    /// Fixed number of decimals in legend and tooltip values; `None` is automatic.
    #[serde(default)]
    pub decimals: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tooltip: Tooltip,
    #[serde(rename = "seriesOverrides", default, deserialize_with = "null_as_default")]
    pub series_overrides: Vec<SeriesOverride>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thresholds: Vec<Threshold>,
    #[serde(flatten)]
    pub draw: DrawOptions,
    #[serde(flatten)]
    pub general: GeneralOptions,
    #[serde(flatten)]
    pub queries: Queries,
}

impl GraphPanel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            yaxes: YAxes::new(YAxis::new("short"), YAxis::new("short")),
            xaxis: XAxis {
                show: true,
                ..XAxis::default()
            },
            legend: Legend {
                show: true,
                ..Legend::default()
            },
            tooltip: Tooltip {
                shared: true,
                ..Tooltip::default()
            },
            draw: DrawOptions {
                lines: true,
                fill: 1,
                line_width: 1,
                point_radius: 5,
                ..DrawOptions::default()
            },
            general: GeneralOptions {
                title: title.into(),
                ..GeneralOptions::default()
            },
            ..Self::default()
        }
    }
}

/// The left and right Y axes, written as a two-element array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<YAxis>", into = "[YAxis; 2]")]
pub struct YAxes {
    pub left: YAxis,
    pub right: YAxis,
}

impl YAxes {
    pub fn new(left: YAxis, right: YAxis) -> Self {
        Self { left, right }
    }
}

impl From<Vec<YAxis>> for YAxes {
    fn from(axes: Vec<YAxis>) -> Self {
        let mut axes = axes.into_iter();
        Self {
            left: axes.next().unwrap_or_default(),
            right: axes.next().unwrap_or_default(),
        }
    }
}

impl From<YAxes> for [YAxis; 2] {
    fn from(axes: YAxes) -> Self {
        [axes.left, axes.right]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YAxis {
    /// Unit format, e.g. `short`, `bytes` or `ms`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub format: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub label: String,
    #[serde(rename = "logBase", default, deserialize_with = "null_as_default")]
    pub log_base: u32,
    #[serde(default)]
    pub max: Option<ForceString>,
    #[serde(default)]
    pub min: Option<ForceString>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub show: bool,
}

impl YAxis {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            log_base: 1,
            show: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XAxisMode {
    #[default]
    Time,
    Series,
    Histogram,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XAxis {
    #[serde(default)]
    pub buckets: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mode: XAxisMode,
    #[serde(default, deserialize_with = "null_as_default")]
    pub show: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    #[serde(rename = "alignAsTable", default, deserialize_with = "null_as_default")]
    pub align_as_table: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current: bool,
    #[serde(rename = "hideEmpty", default, deserialize_with = "null_as_default")]
    pub hide_empty: bool,
    #[serde(rename = "hideZero", default, deserialize_with = "null_as_default")]
    pub hide_zero: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub min: bool,
    #[serde(rename = "rightSide", default, deserialize_with = "null_as_default")]
    pub right_side: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub show: bool,
    #[serde(rename = "sideWidth", default)]
    pub side_width: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullPointMode {
    #[serde(rename = "connected")]
    Connected,
    #[default]
    #[serde(rename = "null")]
    Null,
    #[serde(rename = "null as zero")]
    NullAsZero,
}

/// How series are drawn. Flattened into the panel object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawOptions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub bars: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lines: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: bool,
    /// Area fill opacity, 0-10.
    #[serde(default, deserialize_with = "null_as_default")]
    pub fill: u8,
    #[serde(rename = "linewidth", default, deserialize_with = "null_as_default")]
    pub line_width: u8,
    #[serde(rename = "pointradius", default, deserialize_with = "null_as_default")]
    pub point_radius: u8,
    #[serde(rename = "steppedLine", default, deserialize_with = "null_as_default")]
    pub staircase: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stack: bool,
    #[serde(rename = "nullPointMode", default, deserialize_with = "null_as_default")]
    pub null_point_mode: NullPointMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TooltipSort {
    #[default]
    None,
    Increasing,
    Decreasing,
}

wire_u8_enum!(TooltipSort {
    None = 0,
    Increasing = 1,
    Decreasing = 2,
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackedValue {
    #[default]
    Individual,
    Cumulative,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    /// Show every series at the hovered time, not only the hovered one.
    #[serde(default, deserialize_with = "null_as_default")]
    pub shared: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sort: TooltipSort,
    #[serde(rename = "value_type", default, deserialize_with = "null_as_default")]
    pub stacked_value: StackedValue,
}

/// Stack setting of a series override: a flag or a stack group name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesStack {
    Enabled(bool),
    Group(String),
}

/// Per-series draw settings matched by `alias`. Unset fields are not written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesOverride {
    /// Series name or `/regex/` this override applies to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bars: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<bool>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashes: Option<bool>,
    #[serde(rename = "dashLength", default, skip_serializing_if = "Option::is_none")]
    pub dash_length: Option<u32>,
    #[serde(rename = "spaceLength", default, skip_serializing_if = "Option::is_none")]
    pub dash_space: Option<u32>,
    #[serde(rename = "fill", default, skip_serializing_if = "Option::is_none")]
    pub line_fill: Option<u8>,
    #[serde(
        rename = "fillBelowTo",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub fill_below_to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<bool>,
    #[serde(rename = "linewidth", default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<u8>,
    #[serde(rename = "nullPointMode", default, skip_serializing_if = "Option::is_none")]
    pub null_point_mode: Option<NullPointMode>,
    #[serde(rename = "pointradius", default, skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u8>,
    #[serde(rename = "steppedLine", default, skip_serializing_if = "Option::is_none")]
    pub staircase: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<SeriesStack>,
    /// Axis index: 1 is left, 2 is right.
    #[serde(rename = "yaxis", default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<u8>,
    #[serde(rename = "zindex", default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    /// e.g. `negative-Y` or `constant`.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub transform: String,
}

impl SeriesOverride {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdColorMode {
    Custom,
    #[default]
    Critical,
    Warning,
    Ok,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdOp {
    #[default]
    Gt,
    Lt,
}

/// A horizontal threshold line or region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    #[serde(rename = "colorMode", default, deserialize_with = "null_as_default")]
    pub color_mode: ThresholdColorMode,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fill: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub line: bool,
    /// Only used with [`ThresholdColorMode::Custom`].
    #[serde(
        rename = "lineColor",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub line_color: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub op: ThresholdOp,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GraphiteQuery, Panel, Query};
    use serde_json::json;

    fn graph_json() -> serde_json::Value {
        json!({
            "type": "graph",
            "id": 2,
            "title": "Requests",
            "span": 12,
            "height": "300px",
            "links": [],
            "datasource": "graphite",
            "targets": [
                { "refId": "A", "target": "stats.web.requests" },
                { "refId": "B", "target": "stats.web.errors" }
            ],
            "bars": false,
            "lines": true,
            "points": false,
            "fill": 1,
            "linewidth": 2,
            "pointradius": 5,
            "steppedLine": false,
            "stack": false,
            "nullPointMode": "null as zero",
            "decimals": null,
            "legend": {
                "alignAsTable": true, "avg": true, "current": true, "hideEmpty": false,
                "hideZero": true, "max": true, "min": false, "rightSide": false,
                "show": true, "sideWidth": null, "total": false, "values": true
            },
            "tooltip": { "shared": true, "sort": 2, "value_type": "individual" },
            "xaxis": { "buckets": null, "mode": "time", "show": true, "values": [] },
            "yaxes": [
                { "format": "reqps", "label": "rate", "logBase": 1, "max": null, "min": 0, "show": true },
                { "format": "short", "logBase": 1, "max": "100", "min": null, "show": false }
            ],
            "seriesOverrides": [
                { "alias": "/errors/", "color": "#BF1B00", "yaxis": 2, "stack": "A", "linewidth": 3 }
            ],
            "thresholds": [
                { "colorMode": "critical", "fill": true, "line": true, "op": "gt", "value": 90.5 }
            ]
        })
    }

    #[test]
    fn test_graph_decodes_every_option_block() {
        let Some(Panel::Graph(panel)) = Panel::from_value(graph_json()).unwrap() else {
            panic!("expected a graph panel");
        };
        assert_eq!(panel.general.title, "Requests");
        assert_eq!(panel.queries.len(), 2);
        assert_eq!(panel.queries[1].datasource(), "graphite");
        assert_eq!(panel.draw.line_width, 2);
        assert_eq!(panel.draw.null_point_mode, NullPointMode::NullAsZero);
        assert_eq!(panel.decimals, None);
        assert!(panel.legend.align_as_table);
        assert_eq!(panel.tooltip.sort, TooltipSort::Decreasing);
        assert_eq!(panel.xaxis.mode, XAxisMode::Time);
        assert_eq!(panel.yaxes.left.format, "reqps");
        assert_eq!(panel.yaxes.left.min.as_ref().map(|m| m.as_str()), Some("0"));
        assert_eq!(panel.yaxes.right.max.as_ref().map(|m| m.as_str()), Some("100"));
        assert_eq!(panel.series_overrides[0].y_axis, Some(2));
        assert_eq!(
            panel.series_overrides[0].stack,
            Some(SeriesStack::Group("A".to_string()))
        );
        assert_eq!(panel.thresholds[0].value, 90.5);
    }

    #[test]
    fn test_graph_round_trip() {
        let panel = Panel::from_value(graph_json()).unwrap().unwrap();
        let encoded = serde_json::to_value(&panel).unwrap();
        let decoded = Panel::from_value(encoded.clone()).unwrap().unwrap();
        assert_eq!(decoded, panel);

        assert_eq!(encoded["yaxes"][1].get("label"), None);
        assert_eq!(encoded["yaxes"][0]["max"], serde_json::Value::Null);
        assert_eq!(encoded["legend"]["sideWidth"], serde_json::Value::Null);
        assert_eq!(
            encoded["seriesOverrides"][0],
            json!({ "alias": "/errors/", "color": "#BF1B00", "yaxis": 2, "stack": "A", "linewidth": 3 })
        );
        assert_eq!(encoded["thresholds"][0].get("lineColor"), None);
    }

    #[test]
    fn test_yaxes_tolerate_short_array() {
        let axes: YAxes = serde_json::from_value(json!([{ "format": "ms", "show": true }])).unwrap();
        assert_eq!(axes.left.format, "ms");
        assert_eq!(axes.right, YAxis::default());
    }

    #[test]
    fn test_tooltip_sort_rejects_unknown_number() {
        let result = serde_json::from_value::<Tooltip>(json!({ "sort": 7 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_mixed_datasources_written_per_target() {
        let mut panel = GraphPanel::new("Mixed");
        panel.queries.push(Query::from(GraphiteQuery::new("ds1", "a")));
        panel.queries.push(Query::from(GraphiteQuery::new("ds2", "b")));
        let value = serde_json::to_value(Panel::from(panel)).unwrap();

        assert_eq!(value["datasource"], "-- Mixed --");
        assert_eq!(value["targets"][0]["datasource"], "ds1");
        assert_eq!(value["targets"][1]["datasource"], "ds2");
    }
}
