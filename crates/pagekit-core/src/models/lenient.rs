//! Forgiving field decoders for stored configurations.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a string-valued enum, falling back to its default on anything
/// unrecognized (unknown string, wrong JSON type, `null`).
pub(crate) fn enum_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => T::default(),
        Some(Value::String(s)) => s.parse().unwrap_or_else(|_| {
            log::warn!("unrecognized layout value '{}', using default", s);
            T::default()
        }),
        Some(other) => {
            log::warn!("unexpected layout value {}, using default", other);
            T::default()
        }
    })
}

/// Decode a boolean flag that older configurations may store as `null`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Decode an identifier stored either as a JSON string or a number.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

/// Read an identifier (string or number) out of an opaque settings record.
pub(crate) fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
