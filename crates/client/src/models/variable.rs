//! Dashboard template variables.
//!
//! Variables declare their kind in a `"type"` field, so decoding dispatches on
//! it directly. Kinds this crate does not model are dropped from the list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field::ForceString;
use super::probe::{Discriminated, declared_type, known_only};
use crate::serde_helpers::{null_as_default, wire_u8_enum};

/// Visibility of a variable's picker on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HideMode {
    #[default]
    Visible,
    LabelHidden,
    Hidden,
}

wire_u8_enum!(HideMode {
    Visible = 0,
    LabelHidden = 1,
    Hidden = 2,
});

/// Fields shared by every variable kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableOptions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hide: HideMode,
}

impl VariableOptions {
    fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SortOrder {
    #[default]
    Disabled,
    AlphabeticalAsc,
    AlphabeticalDesc,
    NumericalAsc,
    NumericalDesc,
}

wire_u8_enum!(SortOrder {
    Disabled = 0,
    AlphabeticalAsc = 1,
    AlphabeticalDesc = 2,
    NumericalAsc = 3,
    NumericalDesc = 4,
});

/// A time interval picker, e.g. `1m,10m,1h`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntervalVariable {
    #[serde(default, deserialize_with = "null_as_default")]
    pub auto: bool,
    /// Number of intervals the time range is divided into for the `auto` option.
    #[serde(rename = "auto_count", default, deserialize_with = "null_as_default")]
    pub auto_count: u32,
    #[serde(rename = "auto_min", default)]
    pub auto_min: ForceString,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(flatten)]
    pub options: VariableOptions,
}

/// Values fetched from a datasource query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryVariable {
    #[serde(default, deserialize_with = "null_as_default")]
    pub datasource: String,
    #[serde(rename = "includeAll", default, deserialize_with = "null_as_default")]
    pub include_all: bool,
    #[serde(rename = "allValue", default, deserialize_with = "null_as_default")]
    pub all_value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub multi: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub regex: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sort: SortOrder,
    #[serde(flatten)]
    pub options: VariableOptions,
}

/// A picker over datasources of one plugin type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasourceVariable {
    /// Datasource plugin type, e.g. `prometheus`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub regex: String,
    #[serde(flatten)]
    pub options: VariableOptions,
}

/// A fixed, comma-separated list of values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomVariable {
    #[serde(rename = "includeAll", default, deserialize_with = "null_as_default")]
    pub include_all: bool,
    #[serde(rename = "allValue", default, deserialize_with = "null_as_default")]
    pub all_value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub multi: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: String,
    #[serde(flatten)]
    pub options: VariableOptions,
}

/// A hidden constant, usually used as a query prefix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstantVariable {
    #[serde(rename = "query", default, deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(flatten)]
    pub options: VariableOptions,
}

/// A dashboard template variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Variable {
    Interval(IntervalVariable),
    Query(QueryVariable),
    Datasource(DatasourceVariable),
    Custom(CustomVariable),
    Constant(ConstantVariable),
}

impl Variable {
    pub fn interval(name: impl Into<String>, query: impl Into<String>) -> Self {
        Self::Interval(IntervalVariable {
            query: query.into(),
            options: VariableOptions::named(name),
            ..IntervalVariable::default()
        })
    }

    pub fn query(
        name: impl Into<String>,
        datasource: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self::Query(QueryVariable {
            datasource: datasource.into(),
            query: query.into(),
            options: VariableOptions::named(name),
            ..QueryVariable::default()
        })
    }

    pub fn datasource(name: impl Into<String>, plugin_type: impl Into<String>) -> Self {
        Self::Datasource(DatasourceVariable {
            query: plugin_type.into(),
            options: VariableOptions::named(name),
            ..DatasourceVariable::default()
        })
    }

    pub fn custom(name: impl Into<String>, values: impl Into<String>) -> Self {
        Self::Custom(CustomVariable {
            query: values.into(),
            options: VariableOptions::named(name),
            ..CustomVariable::default()
        })
    }

    pub fn constant(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Constant(ConstantVariable {
            value: value.into(),
            options: VariableOptions {
                hide: HideMode::Hidden,
                ..VariableOptions::named(name)
            },
        })
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Interval(_) => "interval",
            Self::Query(_) => "query",
            Self::Datasource(_) => "datasource",
            Self::Custom(_) => "custom",
            Self::Constant(_) => "constant",
        }
    }

    pub fn options(&self) -> &VariableOptions {
        match self {
            Self::Interval(v) => &v.options,
            Self::Query(v) => &v.options,
            Self::Datasource(v) => &v.options,
            Self::Custom(v) => &v.options,
            Self::Constant(v) => &v.options,
        }
    }

    pub fn options_mut(&mut self) -> &mut VariableOptions {
        match self {
            Self::Interval(v) => &mut v.options,
            Self::Query(v) => &mut v.options,
            Self::Datasource(v) => &mut v.options,
            Self::Custom(v) => &mut v.options,
            Self::Constant(v) => &mut v.options,
        }
    }

    /// Decode one variable object. Returns `Ok(None)` for an unknown `"type"`.
    pub fn from_value(value: Value) -> Result<Option<Self>, serde_json::Error> {
        let kind = declared_type(&value)?.map(str::to_owned);
        let variable = match kind.as_deref() {
            Some("interval") => Self::Interval(IntervalVariable::deserialize(value)?),
            Some("query") => Self::Query(QueryVariable::deserialize(value)?),
            Some("datasource") => Self::Datasource(DatasourceVariable::deserialize(value)?),
            Some("custom") => Self::Custom(CustomVariable::deserialize(value)?),
            Some("constant") => Self::Constant(ConstantVariable::deserialize(value)?),
            other => {
                tracing::debug!(variable_type = ?other, "skipping variable of unknown type");
                return Ok(None);
            }
        };
        Ok(Some(variable))
    }
}

impl Discriminated for Variable {
    fn from_value(value: Value) -> Result<Option<Self>, serde_json::Error> {
        Variable::from_value(value)
    }
}

/// The dashboard `templating` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Templating {
    #[serde(default, deserialize_with = "known_only")]
    pub list: Vec<Variable>,
}

impl Templating {
    pub fn new(list: Vec<Variable>) -> Self {
        Self { list }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_variable_kinds_round_trip() {
        let list = vec![
            Variable::interval("interval", "1m,10m,1h"),
            Variable::query("host", "prometheus", "label_values(up, instance)"),
            Variable::datasource("ds", "prometheus"),
            Variable::custom("env", "prod,staging"),
            Variable::constant("prefix", "apps.web"),
        ];
        let templating = Templating::new(list);
        let value = serde_json::to_value(&templating).unwrap();

        let types: Vec<&str> = value["list"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["type"].as_str().unwrap())
            .collect();
        assert_eq!(types, ["interval", "query", "datasource", "custom", "constant"]);
        assert_eq!(value["list"][4]["query"], "apps.web");
        assert_eq!(value["list"][4]["hide"], 2);

        let back: Templating = serde_json::from_value(value).unwrap();
        assert_eq!(back, templating);
    }

    #[test]
    fn test_query_variable_decodes_grafana_nulls() {
        let value = json!({
            "type": "query",
            "name": "host",
            "label": "Host",
            "hide": 1,
            "datasource": "prometheus",
            "includeAll": true,
            "allValue": null,
            "multi": true,
            "query": "label_values(up, instance)",
            "regex": null,
            "sort": 3,
            "refresh": 1
        });
        let Some(Variable::Query(var)) = Variable::from_value(value).unwrap() else {
            panic!("expected a query variable");
        };
        assert_eq!(var.options.hide, HideMode::LabelHidden);
        assert_eq!(var.sort, SortOrder::NumericalAsc);
        assert!(var.all_value.is_empty());
        assert!(var.regex.is_empty());
    }

    #[test]
    fn test_unknown_variable_type_is_skipped() {
        let templating: Templating = serde_json::from_value(json!({
            "list": [
                { "type": "adhoc", "name": "filters" },
                { "type": "constant", "name": "c", "query": "v" }
            ]
        }))
        .unwrap();
        assert_eq!(templating.list.len(), 1);
        assert_eq!(templating.list[0].options().name, "c");
    }

    #[test]
    fn test_invalid_hide_mode_is_an_error() {
        let value = json!({ "type": "custom", "name": "x", "hide": 9 });
        assert!(Variable::from_value(value).is_err());
    }

    #[test]
    fn test_options_mut() {
        let mut var = Variable::custom("env", "a,b");
        var.options_mut().label = "Environment".to_string();
        assert_eq!(var.options().label, "Environment");
        assert_eq!(var.type_name(), "custom");
    }
}
