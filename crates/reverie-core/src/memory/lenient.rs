//! Fail-soft numeric field adapters for memory records.
//!
//! Producers hand us loosely typed records; a malformed number falls back to
//! the field default instead of rejecting the whole memory.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::constants::DEFAULT_IMPORTANCE;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

fn raw_to_f64(raw: Option<RawNumber>) -> Option<f64> {
    let value = match raw? {
        RawNumber::Number(v) => v,
        RawNumber::Text(s) => s.trim().parse::<f64>().ok()?,
        RawNumber::Other(_) => return None,
    };
    value.is_finite().then_some(value)
}

/// Importance as a float; anything unusable becomes `DEFAULT_IMPORTANCE`.
pub fn importance<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(raw_to_f64(raw).unwrap_or_else(|| {
        tracing::debug!("unusable importance, using default");
        DEFAULT_IMPORTANCE
    }))
}

/// Access count as a non-negative integer; anything unusable becomes 0.
pub fn access_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(match raw_to_f64(raw) {
        Some(v) if v >= 0.0 => v as u64,
        _ => 0,
    })
}

pub(crate) fn default_importance() -> f64 {
    DEFAULT_IMPORTANCE
}
