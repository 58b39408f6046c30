//! YAML scalars read as strings: `PORT: 8080` and `DEBUG: true` load the
//! same as their quoted forms.

use serde::de::{Deserialize, Deserializer, Error};
use serde_yaml::Value;
use std::collections::HashMap;

fn scalar_to_string<E: Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) => Ok(Some(s)),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
            Err(E::custom("expected a scalar value"))
        }
    }
}

/// Map of scalar values; a null value becomes the empty string.
pub(crate) fn deserialize_string_map<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: HashMap<String, Value> = HashMap::deserialize(deserializer)?;
    let mut result = HashMap::with_capacity(raw.len());

    for (key, value) in raw {
        let value = scalar_to_string(value)
            .map_err(|e: D::Error| D::Error::custom(format!("env '{key}': {e}")))?
            .unwrap_or_default();
        result.insert(key, value);
    }

    Ok(result)
}

/// Optional scalar; null or absent is `None`.
pub(crate) fn deserialize_optional_string<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_to_string(Value::deserialize(deserializer)?)
}
