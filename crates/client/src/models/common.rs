//! Response shapes shared across Grafana API endpoints.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// Grafana's `{"message": "..."}` body, used for errors and simple acknowledgements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrafanaMessage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}
