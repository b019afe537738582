//! Lenient field decoders.
//!
//! The remote APIs are not consistent about scalar types: identifiers and
//! balances show up as either JSON strings or numbers, ratings as numbers or
//! numeric strings.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
        }
    }
}

pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(Scalar::into_string)
}

pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_string))
}

pub(crate) fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(Scalar::Number(n)) => Ok(n.as_f64().unwrap_or_default()),
        Some(Scalar::Text(s)) => s
            .trim()
            .replace(',', ".")
            .parse()
            .map_err(serde::de::Error::custom),
    }
}

/// Read an identifier out of an arbitrary JSON value.
pub(crate) fn value_as_id(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
