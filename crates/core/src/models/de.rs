//! Lenient field deserializers for backend payloads.
//!
//! The backend passes some upstream values through untouched, so a price may
//! arrive as `12.5`, `"12.5"` or `null`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Number(f64),
    Text(String),
}

/// Accepts a number, a numeric string or `null`. Anything unparseable or
/// non-finite (`"NaN"`, `"inf"`) is `None`.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<NumberLike> = Option::deserialize(deserializer)?;
    let value = match raw {
        Some(NumberLike::Number(n)) => Some(n),
        Some(NumberLike::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}

/// Same as [`opt_f64`] but falls back to `0.0`.
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_f64(deserializer)?.unwrap_or(0.0))
}

/// Treats an explicit `null` like a missing field.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdLike {
    Number(u64),
    Text(String),
}

/// Identifier sent either as a number or as a string (Mongo ObjectIds).
/// `null` becomes the empty string.
pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<IdLike>::deserialize(deserializer)? {
        Some(IdLike::Number(n)) => n.to_string(),
        Some(IdLike::Text(s)) => s,
        None => String::new(),
    })
}

/// Falls back to `T::default()` for any value `T` does not accept,
/// e.g. an enum tag the client does not know yet.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(raw).unwrap_or_default())
}
