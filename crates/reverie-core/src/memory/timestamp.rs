use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Offset-less layouts accepted after RFC 3339 fails. Read as UTC.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (with offset), offset-less date-times, and bare dates.
/// Returns `None` for anything else; callers treat that as "created now".
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Some(naive) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Some(Utc.from_utc_datetime(&naive));
    }

    // Swallowed on purpose: a bad timestamp means zero decay, not an error.
    // This can hide upstream bugs, so it is at least visible at debug level.
    tracing::debug!(created_at = raw, "unparseable timestamp, treating as now");
    None
}

/// Serde adapter for `Option<DateTime<Utc>>` that never fails on bad input.
pub mod lenient {
    use chrono::{DateTime, Utc};
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Text(String),
        Other(IgnoredAny),
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawTimestamp>::deserialize(deserializer)? {
            Some(RawTimestamp::Text(raw)) => super::parse_timestamp(&raw),
            Some(RawTimestamp::Other(_)) => {
                tracing::debug!("non-string timestamp, treating as now");
                None
            }
            None => None,
        })
    }
}
