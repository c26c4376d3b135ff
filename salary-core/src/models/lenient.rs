//! Forgiving field codecs for service payloads.
//!
//! The salary service is a remote collaborator whose JSON is not under our
//! control. Monetary fields must never turn a malformed value into a hard
//! failure or into something that can poison arithmetic, so anything that is
//! not a JSON number decodes as "absent".

/// `Option<Decimal>` codec: JSON numbers become `Some`, everything else
/// (`null`, strings, booleans, objects, missing keys) becomes `None`.
///
/// Use with `#[serde(default, with = "lenient::amount")]`.
pub mod amount {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::{Number, Value};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Number(n) => from_number(&n),
            other => {
                if !other.is_null() {
                    tracing::debug!(value = %other, "ignoring non-numeric amount");
                }
                None
            }
        })
    }

    pub fn serialize<S>(
        value: &Option<Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(amount) => {
                let number = Number::from_str(&amount.normalize().to_string())
                    .map_err(serde::ser::Error::custom)?;
                number.serialize(serializer)
            }
            None => serializer.serialize_none(),
        }
    }

    /// Converts a JSON number without going through `f64` when possible.
    pub(crate) fn from_number(n: &Number) -> Option<Decimal> {
        let text = n.to_string();
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .ok()
    }
}

/// `String` decoder that maps `null` or a missing key to `""` and renders
/// scalar non-strings (numbers, booleans) as their JSON text.
///
/// Use with `#[serde(default, deserialize_with = "lenient::text")]`.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    use serde_json::Value;

    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// `Option<String>` decoder for free-text fields.
///
/// Strings and scalars decode like [`text`]; `null`, a missing key, arrays
/// and objects become `None`.
///
/// Use with `#[serde(default, deserialize_with = "lenient::optional_text")]`.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    use serde_json::Value;

    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Null => None,
        scalar @ (Value::Number(_) | Value::Bool(_)) => Some(scalar.to_string()),
        other => {
            tracing::debug!(value = %other, "ignoring non-text field");
            None
        }
    })
}
