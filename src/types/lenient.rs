//! Deserialization helpers for records the service fills loosely.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Treat an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decode a collection sent either as a bare array or as `{"<key>": [...], ...}`.
///
/// Item errors are passed through unchanged so the failing field stays visible.
pub(crate) fn bare_or_wrapped<'de, D, T>(
    deserializer: D,
    key: &'static str,
) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let list = match Value::deserialize(deserializer)? {
        list @ Value::Array(_) => list,
        Value::Object(mut map) => map
            .remove(key)
            .ok_or_else(|| D::Error::missing_field(key))?,
        _ => {
            return Err(D::Error::custom(format!(
                "expected an array or an object with a `{}` field",
                key
            )))
        }
    };
    serde_json::from_value::<Option<Vec<T>>>(list)
        .map(Option::unwrap_or_default)
        .map_err(D::Error::custom)
}
