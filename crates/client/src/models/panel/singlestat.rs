//! The single-stat panel and its sparkline, gauge and time-range option blocks.

use serde::{Deserialize, Serialize};

use super::GeneralOptions;
use crate::models::query::Queries;
use crate::serde_helpers::null_as_default;

/// Default colors for the ok, warning and critical ranges.
pub const DEFAULT_SINGLESTAT_COLORS: [&str; 3] = [
    "rgba(245, 54, 54, 0.9)",
    "rgba(237, 129, 40, 0.89)",
    "rgba(50, 172, 45, 0.97)",
];

/// A panel reducing its series to one prominent value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SinglestatPanel {
    /// Reducer applied to the series, e.g. `avg`, `current` or `total`.
    #[serde(rename = "valueName", default, deserialize_with = "null_as_default")]
    pub value_name: String,
    #[serde(rename = "valueFontSize", default, deserialize_with = "null_as_default")]
    pub value_font_size: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prefix: String,
    #[serde(rename = "prefixFontSize", default, deserialize_with = "null_as_default")]
    pub prefix_font_size: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postfix: String,
    #[serde(rename = "postfixFontSize", default, deserialize_with = "null_as_default")]
    pub postfix_font_size: String,
    /// Unit format, e.g. `none`, `bytes` or `percent`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub format: String,
    #[serde(rename = "colorBackground", default, deserialize_with = "null_as_default")]
    pub color_background: bool,
    #[serde(rename = "colorValue", default, deserialize_with = "null_as_default")]
    pub color_value: bool,
    /// Comma-separated threshold values, e.g. `"50,80"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub thresholds: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub colors: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sparkline: Sparkline,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gauge: Gauge,
    #[serde(flatten)]
    pub time_range: TimeRangeOptions,
    #[serde(flatten)]
    pub general: GeneralOptions,
    #[serde(flatten)]
    pub queries: Queries,
}

impl SinglestatPanel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            value_name: "avg".to_string(),
            value_font_size: "80%".to_string(),
            prefix_font_size: "50%".to_string(),
            postfix_font_size: "50%".to_string(),
            format: "none".to_string(),
            colors: DEFAULT_SINGLESTAT_COLORS.iter().map(|c| c.to_string()).collect(),
            general: GeneralOptions {
                title: title.into(),
                ..GeneralOptions::default()
            },
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sparkline {
    #[serde(default, deserialize_with = "null_as_default")]
    pub show: bool,
    /// Stretch the sparkline to the full panel height.
    #[serde(rename = "full", default, deserialize_with = "null_as_default")]
    pub full_height: bool,
    #[serde(rename = "lineColor", default, deserialize_with = "null_as_default")]
    pub line_color: String,
    #[serde(rename = "fillColor", default, deserialize_with = "null_as_default")]
    pub fill_color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    #[serde(default, deserialize_with = "null_as_default")]
    pub show: bool,
    #[serde(rename = "minValue", default, deserialize_with = "null_as_default")]
    pub min_value: f64,
    #[serde(rename = "maxValue", default, deserialize_with = "null_as_default")]
    pub max_value: f64,
    #[serde(rename = "thresholdLabels", default, deserialize_with = "null_as_default")]
    pub threshold_labels: bool,
    #[serde(rename = "thresholdMarkers", default, deserialize_with = "null_as_default")]
    pub threshold_markers: bool,
}

/// Panel-local override of the dashboard time range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeRangeOptions {
    /// Relative range replacing the dashboard's, e.g. `"1h"`.
    #[serde(rename = "timeFrom", default)]
    pub time_from: Option<String>,
    #[serde(rename = "timeShift", default)]
    pub time_shift: Option<String>,
    #[serde(rename = "hideTimeOverride", default, deserialize_with = "null_as_default")]
    pub hide_time_override: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Panel, PrometheusQuery, Query};
    use serde_json::json;

    #[test]
    fn test_singlestat_decodes_nested_and_flat_fields() {
        let value = json!({
            "type": "singlestat",
            "id": 1,
            "title": "Uptime",
            "valueName": "current",
            "format": "s",
            "colorValue": true,
            "thresholds": "3600,86400",
            "colors": ["#d44a3a", "rgba(237, 129, 40, 0.89)", "#299c46"],
            "sparkline": { "show": true, "full": false, "lineColor": "rgb(31, 120, 193)", "fillColor": "rgba(31, 118, 189, 0.18)" },
            "gauge": { "show": false, "minValue": 0, "maxValue": 100, "thresholdLabels": false, "thresholdMarkers": true },
            "timeFrom": "24h",
            "timeShift": null,
            "hideTimeOverride": false,
            "datasource": "prometheus",
            "targets": [
                { "refId": "A", "expr": "process_uptime_seconds", "intervalFactor": 2, "format": "time_series" }
            ]
        });
        let Some(Panel::Singlestat(panel)) = Panel::from_value(value).unwrap() else {
            panic!("expected a singlestat panel");
        };
        assert_eq!(panel.value_name, "current");
        assert!(panel.color_value);
        assert_eq!(panel.colors.len(), 3);
        assert!(panel.sparkline.show);
        assert_eq!(panel.gauge.max_value, 100.0);
        assert_eq!(panel.time_range.time_from.as_deref(), Some("24h"));
        assert_eq!(panel.time_range.time_shift, None);
        assert_eq!(panel.queries.len(), 1);
        assert_eq!(panel.queries[0].datasource(), "prometheus");
    }

    #[test]
    fn test_singlestat_encodes_null_time_shift_and_targets() {
        let mut panel = SinglestatPanel::new("Load");
        panel
            .queries
            .push(Query::from(PrometheusQuery::new("prometheus", "node_load1")));
        let value = serde_json::to_value(Panel::from(panel)).unwrap();

        assert_eq!(value["type"], "singlestat");
        assert_eq!(value["timeShift"], serde_json::Value::Null);
        assert_eq!(value["datasource"], "prometheus");
        assert_eq!(value["targets"][0]["expr"], "node_load1");
        assert_eq!(value["targets"][0]["refId"], "A");
        assert!(value["targets"][0].get("datasource").is_none());
        assert_eq!(value["colors"].as_array().map(Vec::len), Some(3));
    }
}
