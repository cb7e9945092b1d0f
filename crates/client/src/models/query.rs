//! Panel queries ("targets") and their per-panel wire layout.
//!
//! Responsibilities:
//! - Model the supported query shapes ([`PrometheusQuery`], [`GraphiteQuery`]).
//! - Infer the shape of a raw target object from the fields it carries.
//! - Encode a panel's query list as `datasource` + `targets`, assigning ref IDs
//!   and collapsing a shared datasource onto the panel.
//!
//! Does NOT handle:
//! - Datasource lookups. Datasource names are opaque strings here.
//!
//! Invariants:
//! - Grafana does not record a query's kind in the target object. The kind is
//!   guessed: `expr` together with `intervalFactor` means Prometheus, otherwise
//!   `target` means Graphite, otherwise the target is dropped. A future query
//!   shape carrying both `expr` and `intervalFactor` will be read as Prometheus.

use std::borrow::Cow;
use std::ops::{Deref, DerefMut};

use serde::de::{Error as _, IgnoredAny};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::field::ForceString;
use crate::serde_helpers::null_as_default;

/// Panel-level datasource written when a panel's queries use different datasources.
pub const MIXED_DATASOURCE: &str = "-- Mixed --";

/// Reference ID for the query at `index`: `A`..`Z`, then `AA`, `AB`, ...
///
/// This is bijective base-26, so every index maps to a distinct label.
pub fn ref_id_for_index(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// A Prometheus query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrometheusQuery {
    /// Assigned from the enclosing target list; see [`Query::ref_id`].
    #[serde(skip)]
    pub ref_id: String,
    #[serde(skip)]
    pub datasource: String,
    #[serde(rename = "intervalFactor", default, deserialize_with = "null_as_default")]
    pub interval_factor: u32,
    #[serde(default, skip_serializing_if = "ForceString::is_empty")]
    pub interval: ForceString,
    /// Result format, e.g. `time_series` or `table`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub format: String,
    #[serde(rename = "expr", default, deserialize_with = "null_as_default")]
    pub expression: String,
    #[serde(
        rename = "legendFormat",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub legend_format: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub step: u32,
}

impl PrometheusQuery {
    pub fn new(datasource: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            datasource: datasource.into(),
            expression: expression.into(),
            interval_factor: 2,
            format: "time_series".to_string(),
            ..Self::default()
        }
    }
}

/// A Graphite query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphiteQuery {
    #[serde(skip)]
    pub ref_id: String,
    #[serde(skip)]
    pub datasource: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target: String,
    /// Target with references to other queries expanded, as written by Grafana.
    #[serde(
        rename = "targetFull",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub target_full: String,
}

impl GraphiteQuery {
    pub fn new(datasource: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            datasource: datasource.into(),
            target: target.into(),
            ..Self::default()
        }
    }
}

/// A query attached to a panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Query {
    Prometheus(PrometheusQuery),
    Graphite(GraphiteQuery),
}

impl Query {
    /// Reference ID, empty until assigned.
    pub fn ref_id(&self) -> &str {
        match self {
            Self::Prometheus(q) => &q.ref_id,
            Self::Graphite(q) => &q.ref_id,
        }
    }

    pub fn set_ref_id(&mut self, ref_id: impl Into<String>) {
        let ref_id = ref_id.into();
        match self {
            Self::Prometheus(q) => q.ref_id = ref_id,
            Self::Graphite(q) => q.ref_id = ref_id,
        }
    }

    /// Name of the datasource this query runs against.
    pub fn datasource(&self) -> &str {
        match self {
            Self::Prometheus(q) => &q.datasource,
            Self::Graphite(q) => &q.datasource,
        }
    }

    fn set_datasource(&mut self, datasource: String) {
        match self {
            Self::Prometheus(q) => q.datasource = datasource,
            Self::Graphite(q) => q.datasource = datasource,
        }
    }

    /// Decode one raw target object.
    ///
    /// `panel_datasource` is used when the target names no datasource of its
    /// own, unless it is the mixed sentinel. Returns `Ok(None)` when the shape
    /// matches no known query kind.
    pub fn from_value(
        value: Value,
        panel_datasource: Option<&str>,
    ) -> Result<Option<Self>, serde_json::Error> {
        let probe = QueryProbe::deserialize(&value)?;
        let mut query = match probe.kind() {
            Some(QueryKind::Prometheus) => Self::Prometheus(PrometheusQuery::deserialize(value)?),
            Some(QueryKind::Graphite) => Self::Graphite(GraphiteQuery::deserialize(value)?),
            None => {
                tracing::debug!(ref_id = ?probe.ref_id, "skipping query of unrecognized shape");
                return Ok(None);
            }
        };

        if let Some(ref_id) = probe.ref_id {
            query.set_ref_id(ref_id);
        }
        let own = probe.datasource.map(ForceString::into_inner).filter(|ds| !ds.is_empty());
        let inherited = panel_datasource
            .filter(|ds| !ds.is_empty() && *ds != MIXED_DATASOURCE)
            .map(str::to_string);
        if let Some(datasource) = own.or(inherited) {
            query.set_datasource(datasource);
        }
        Ok(Some(query))
    }
}

impl From<PrometheusQuery> for Query {
    fn from(query: PrometheusQuery) -> Self {
        Self::Prometheus(query)
    }
}

impl From<GraphiteQuery> for Query {
    fn from(query: GraphiteQuery) -> Self {
        Self::Graphite(query)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueryKind {
    Prometheus,
    Graphite,
}

/// The fields that tell query shapes apart, plus the common ones.
#[derive(Deserialize)]
struct QueryProbe {
    #[serde(rename = "refId", alias = "refid", default)]
    ref_id: Option<String>,
    #[serde(default)]
    datasource: Option<ForceString>,
    #[serde(default)]
    expr: Option<IgnoredAny>,
    #[serde(rename = "intervalFactor", default)]
    interval_factor: Option<IgnoredAny>,
    #[serde(default)]
    target: Option<IgnoredAny>,
}

impl QueryProbe {
    fn kind(&self) -> Option<QueryKind> {
        if self.expr.is_some() && self.interval_factor.is_some() {
            Some(QueryKind::Prometheus)
        } else if self.target.is_some() {
            Some(QueryKind::Graphite)
        } else {
            None
        }
    }
}

/// The ordered query list of a queryable panel.
///
/// Flattened into the panel object as `datasource` and `targets`. An empty
/// list writes neither key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Queries(Vec<Query>);

impl Queries {
    pub fn new(queries: Vec<Query>) -> Self {
        Self(queries)
    }

    /// Decode a raw `targets` array; see [`Query::from_value`].
    pub fn from_values(
        values: Vec<Value>,
        panel_datasource: Option<&str>,
    ) -> Result<Self, serde_json::Error> {
        let mut queries = Vec::with_capacity(values.len());
        for value in values {
            if let Some(query) = Query::from_value(value, panel_datasource)? {
                queries.push(query);
            }
        }
        Ok(Self(queries))
    }

    /// Write positional ref IDs into queries that have none.
    pub fn assign_ref_ids(&mut self) {
        for (index, query) in self.0.iter_mut().enumerate() {
            if query.ref_id().is_empty() {
                query.set_ref_id(ref_id_for_index(index));
            }
        }
    }

    /// The datasource shared by every query, or `None` when they differ.
    pub fn shared_datasource(&self) -> Option<&str> {
        let mut names = self.0.iter().map(Query::datasource);
        let first = names.next()?;
        names.all(|name| name == first).then_some(first)
    }

    pub fn into_inner(self) -> Vec<Query> {
        self.0
    }

    /// Wire view of each query as it appears in `targets`.
    pub(crate) fn targets(&self, include_datasource: bool) -> Vec<Target<'_>> {
        self.0
            .iter()
            .enumerate()
            .map(|(index, query)| Target {
                ref_id: match query.ref_id() {
                    "" => Cow::Owned(ref_id_for_index(index)),
                    id => Cow::Borrowed(id),
                },
                datasource: include_datasource.then(|| query.datasource()),
                query,
            })
            .collect()
    }
}

impl Deref for Queries {
    type Target = Vec<Query>;

    fn deref(&self) -> &Vec<Query> {
        &self.0
    }
}

impl DerefMut for Queries {
    fn deref_mut(&mut self) -> &mut Vec<Query> {
        &mut self.0
    }
}

impl From<Vec<Query>> for Queries {
    fn from(queries: Vec<Query>) -> Self {
        Self(queries)
    }
}

impl FromIterator<Query> for Queries {
    fn from_iter<I: IntoIterator<Item = Query>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One entry of a panel's `targets` array.
#[derive(Serialize)]
pub(crate) struct Target<'a> {
    #[serde(rename = "refId")]
    ref_id: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    datasource: Option<&'a str>,
    #[serde(flatten)]
    query: &'a Query,
}

impl Serialize for Queries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_empty() {
            return serializer.serialize_map(Some(0))?.end();
        }
        let shared = self.shared_datasource();
        let mut map = serializer.serialize_map(None)?;
        match shared {
            Some("") => {}
            Some(datasource) => map.serialize_entry("datasource", datasource)?,
            None => map.serialize_entry("datasource", MIXED_DATASOURCE)?,
        }
        map.serialize_entry("targets", &self.targets(shared.is_none()))?;
        map.end()
    }
}

#[derive(Deserialize)]
struct QueriesWire {
    #[serde(default)]
    datasource: Option<ForceString>,
    #[serde(default, deserialize_with = "null_as_default")]
    targets: Vec<Value>,
}

impl<'de> Deserialize<'de> for Queries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = QueriesWire::deserialize(deserializer)?;
        let panel_datasource = wire.datasource.as_deref();
        Queries::from_values(wire.targets, panel_datasource).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ref_id_for_index() {
        assert_eq!(ref_id_for_index(0), "A");
        assert_eq!(ref_id_for_index(1), "B");
        assert_eq!(ref_id_for_index(25), "Z");
        assert_eq!(ref_id_for_index(26), "AA");
        assert_eq!(ref_id_for_index(27), "AB");
        assert_eq!(ref_id_for_index(51), "AZ");
        assert_eq!(ref_id_for_index(52), "BA");
        assert_eq!(ref_id_for_index(701), "ZZ");
        assert_eq!(ref_id_for_index(702), "AAA");
    }

    #[test]
    fn test_probe_detects_prometheus() {
        let value = json!({
            "refId": "B",
            "expr": "rate(http_requests_total[5m])",
            "intervalFactor": 2,
            "format": "time_series",
            "legendFormat": "{{handler}}"
        });
        let query = Query::from_value(value, Some("prom")).unwrap().unwrap();
        let Query::Prometheus(prom) = &query else {
            panic!("expected a Prometheus query, got {query:?}");
        };
        assert_eq!(prom.expression, "rate(http_requests_total[5m])");
        assert_eq!(prom.interval_factor, 2);
        assert_eq!(prom.legend_format, "{{handler}}");
        assert_eq!(query.ref_id(), "B");
        assert_eq!(query.datasource(), "prom");
    }

    #[test]
    fn test_prometheus_null_scalars_decode_as_defaults() {
        let value = json!({
            "refId": "A",
            "expr": "up",
            "intervalFactor": 1,
            "legendFormat": null
        });
        let query = Query::from_value(value, None).unwrap().unwrap();
        let Query::Prometheus(prom) = &query else {
            panic!("expected a Prometheus query, got {query:?}");
        };
        assert_eq!(prom.legend_format, "");
    }

    #[test]
    fn test_probe_expr_without_interval_factor_is_not_prometheus() {
        let value = json!({ "expr": "up" });
        assert!(Query::from_value(value, None).unwrap().is_none());
    }

    #[test]
    fn test_probe_detects_graphite() {
        let value = json!({ "refid": "A", "target": "stats.web.*", "datasource": "graphite" });
        let query = Query::from_value(value, Some(MIXED_DATASOURCE)).unwrap().unwrap();
        assert!(matches!(query, Query::Graphite(ref g) if g.target == "stats.web.*"));
        assert_eq!(query.ref_id(), "A");
        assert_eq!(query.datasource(), "graphite");
    }

    #[test]
    fn test_mixed_sentinel_is_not_inherited() {
        let value = json!({ "target": "a.b" });
        let query = Query::from_value(value, Some(MIXED_DATASOURCE)).unwrap().unwrap();
        assert_eq!(query.datasource(), "");
    }

    #[test]
    fn test_unknown_shape_is_dropped_from_list() {
        let queries = Queries::from_values(
            vec![
                json!({ "target": "first" }),
                json!({ "rawSql": "SELECT 1" }),
                json!({ "target": "second" }),
            ],
            None,
        )
        .unwrap();
        assert_eq!(queries.len(), 2);
    }

    #[test]
    fn test_wrong_typed_field_is_an_error() {
        let value = json!({ "target": 42 });
        assert!(Query::from_value(value, None).is_err());
    }

    #[test]
    fn test_shared_datasource() {
        let queries: Queries = vec![
            GraphiteQuery::new("ds1", "a").into(),
            GraphiteQuery::new("ds1", "b").into(),
        ]
        .into();
        assert_eq!(queries.shared_datasource(), Some("ds1"));

        let queries: Queries = vec![
            GraphiteQuery::new("ds1", "a").into(),
            PrometheusQuery::new("ds2", "up").into(),
        ]
        .into();
        assert_eq!(queries.shared_datasource(), None);
        assert_eq!(Queries::default().shared_datasource(), None);
    }

    #[test]
    fn test_assign_ref_ids_keeps_existing() {
        let mut explicit = GraphiteQuery::new("ds", "b");
        explicit.ref_id = "X".to_string();
        let mut queries: Queries = vec![
            GraphiteQuery::new("ds", "a").into(),
            explicit.into(),
            GraphiteQuery::new("ds", "c").into(),
        ]
        .into();
        queries.assign_ref_ids();
        let ids: Vec<&str> = queries.iter().map(Query::ref_id).collect();
        assert_eq!(ids, ["A", "X", "C"]);
    }

    #[test]
    fn test_empty_queries_write_no_keys() {
        let value = serde_json::to_value(Queries::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_shared_empty_datasource_is_omitted() {
        let queries: Queries = vec![GraphiteQuery::new("", "a").into()].into();
        let value = serde_json::to_value(&queries).unwrap();
        assert_eq!(value, json!({ "targets": [{ "refId": "A", "target": "a" }] }));
    }
}
