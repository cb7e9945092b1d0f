//! Decoding of lists whose elements may be of a kind this crate does not model.
//!
//! Each element is buffered as a [`serde_json::Value`], inspected, and then
//! decoded into its concrete variant. Elements that resolve to no known variant
//! are dropped; elements that resolve to a variant but fail to decode fail the
//! whole list.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A polymorphic model decoded from a buffered JSON value.
pub(crate) trait Discriminated: Sized {
    /// Decode `value`, returning `Ok(None)` when its kind is not recognized.
    fn from_value(value: Value) -> Result<Option<Self>, serde_json::Error>;
}

/// Read the declared `"type"` string of a JSON object.
///
/// Non-object elements are a structural error rather than an unknown kind.
pub(crate) fn declared_type(value: &Value) -> Result<Option<&str>, serde_json::Error> {
    let object = value
        .as_object()
        .ok_or_else(|| serde_json::Error::custom("expected a JSON object"))?;
    Ok(object.get("type").and_then(Value::as_str))
}

/// Decode a list of JSON values, skipping elements of unknown kind.
pub(crate) fn decode_known<T: Discriminated>(
    values: Vec<Value>,
) -> Result<Vec<T>, serde_json::Error> {
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        if let Some(item) = T::from_value(value)? {
            out.push(item);
        }
    }
    Ok(out)
}

/// `deserialize_with` adapter for a `Vec<T>` field; `null` decodes as empty.
pub(crate) fn known_only<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Discriminated,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    decode_known(raw).map_err(D::Error::custom)
}
