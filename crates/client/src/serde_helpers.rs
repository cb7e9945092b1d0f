//! Serde helpers for Grafana's loosely typed JSON.
//!
//! Responsibilities:
//! - Treat `null` as "use the default" for collections Grafana sometimes writes as `null`.
//! - Convert small integer enums to and from their wire numbers.
//!
//! Explicitly does NOT handle:
//! - Number-or-string coercion of free-form values (see [`crate::models::ForceString`]).

use serde::{Deserialize, Deserializer};

/// Deserialize a value, mapping an explicit JSON `null` to `T::default()`.
///
/// Pair with `#[serde(default)]` so a missing key is also accepted.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Implements `From<Enum> for u8` and `TryFrom<u8> for Enum` for a fieldless enum
/// whose wire form is a small integer. Use with `#[serde(try_from = "u8", into = "u8")]`.
macro_rules! wire_u8_enum {
    ($name:ident { $($variant:ident = $value:literal),+ $(,)? }) => {
        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                match value {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = String;

            fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
                match value {
                    $($value => Ok($name::$variant),)+
                    other => Err(format!(
                        "invalid {} value: {}",
                        stringify!($name),
                        other
                    )),
                }
            }
        }
    };
}

pub(crate) use wire_u8_enum;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "null_as_default")]
        values: Vec<String>,
    }

    #[test]
    fn test_null_as_default_accepts_null() {
        let parsed: Wrapper = serde_json::from_str(r#"{ "values": null }"#).unwrap();
        assert!(parsed.values.is_empty());
    }

    #[test]
    fn test_null_as_default_accepts_missing() {
        let parsed: Wrapper = serde_json::from_str("{}").unwrap();
        assert!(parsed.values.is_empty());
    }

    #[test]
    fn test_null_as_default_passes_values_through() {
        let parsed: Wrapper = serde_json::from_str(r#"{ "values": ["a", "b"] }"#).unwrap();
        assert_eq!(parsed.values, vec!["a", "b"]);
    }

    #[test]
    fn test_null_as_default_rejects_wrong_type() {
        let parsed = serde_json::from_str::<Wrapper>(r#"{ "values": 3 }"#);
        assert!(parsed.is_err());
    }
}
