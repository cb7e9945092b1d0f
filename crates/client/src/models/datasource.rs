//! Datasources configured in the Grafana organization.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// How Grafana reaches a datasource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasourceAccess {
    /// Requests go through the Grafana backend.
    #[default]
    Proxy,
    /// The browser talks to the datasource directly.
    Direct,
}

/// A configured datasource.
///
/// `id` is assigned by the server and only arrives through decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Datasource {
    #[serde(default, deserialize_with = "null_as_default")]
    id: u64,
    #[serde(rename = "orgId", default, deserialize_with = "null_as_default")]
    pub org_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Plugin type, e.g. `prometheus` or `graphite`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub access: DatasourceAccess,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub database: String,
    #[serde(rename = "basicAuth", default, deserialize_with = "null_as_default")]
    pub basic_auth: bool,
    #[serde(rename = "basicAuthUser", default, deserialize_with = "null_as_default")]
    pub basic_auth_user: String,
    #[serde(rename = "basicAuthPassword", default, deserialize_with = "null_as_default")]
    pub basic_auth_password: String,
    #[serde(rename = "isDefault", default, deserialize_with = "null_as_default")]
    pub is_default: bool,
    #[serde(rename = "withCredentials", default, deserialize_with = "null_as_default")]
    pub with_credentials: bool,
}

impl Datasource {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_datasource_decodes_server_fields() {
        let ds: Datasource = serde_json::from_value(json!({
            "id": 4,
            "orgId": 1,
            "name": "prometheus",
            "type": "prometheus",
            "typeLogoUrl": "public/app/plugins/datasource/prometheus/img/prometheus_logo.svg",
            "access": "proxy",
            "url": "http://prometheus:9090",
            "password": "",
            "user": "",
            "database": "",
            "basicAuth": false,
            "isDefault": true,
            "jsonData": {},
            "readOnly": false
        }))
        .unwrap();
        assert_eq!(ds.id(), 4);
        assert_eq!(ds.kind, "prometheus");
        assert_eq!(ds.access, DatasourceAccess::Proxy);
        assert!(ds.is_default);
    }

    #[test]
    fn test_datasource_id_round_trips() {
        let ds: Datasource = serde_json::from_value(json!({ "id": 9, "name": "g" })).unwrap();
        let value = serde_json::to_value(&ds).unwrap();
        assert_eq!(value["id"], 9);
        assert_eq!(value["access"], "proxy");
        assert_eq!(Datasource::new("g", "graphite", "http://g").id(), 0);
    }
}
