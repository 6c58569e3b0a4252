//! Timestamp value object for immutable points in time.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Immutable point in time, always UTC.
///
/// Serializes as the same RFC 3339 (ISO-8601) string `to_iso8601` renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment, truncated to microseconds.
    pub fn now() -> Self {
        Self(Utc::now().trunc_subsecs(6))
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// ISO-8601 rendering with microsecond precision.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Micros, false)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn fixed() -> Timestamp {
        let dt = DateTime::parse_from_rfc3339("2025-03-02T09:15:30Z")
            .unwrap()
            .with_timezone(&Utc);
        Timestamp::from_datetime(dt)
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now().trunc_subsecs(6);
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_iso8601_includes_offset() {
        assert_eq!(fixed().to_iso8601(), "2025-03-02T09:15:30.000000+00:00");
    }

    #[test]
    fn timestamp_display_matches_iso8601() {
        let ts = fixed();
        assert_eq!(ts.to_string(), ts.to_iso8601());
    }

    #[test]
    fn timestamp_iso8601_parses_back() {
        let ts = fixed();
        let parsed = DateTime::parse_from_rfc3339(&ts.to_iso8601()).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), *ts.as_datetime());
    }

    #[test]
    fn timestamp_serializes_like_iso8601() {
        let ts = fixed();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2025-03-02T09:15:30.000000+00:00\"");
    }

    #[test]
    fn timestamp_now_survives_json_round_trip() {
        let ts = Timestamp::now();
        let parsed: Timestamp = serde_json::from_str(&serde_json::to_string(&ts).unwrap()).unwrap();
        assert_eq!(parsed, ts);
    }

    #[test]
    fn timestamp_rejects_garbage() {
        assert!(serde_json::from_str::<Timestamp>("\"yesterday\"").is_err());
    }

    #[test]
    fn timestamp_deserializes_from_json() {
        let ts: Timestamp = serde_json::from_str("\"2025-03-02T09:15:30Z\"").unwrap();
        assert_eq!(ts.as_datetime().year(), 2025);
        assert!(ts.is_before(&Timestamp::now()));
    }
}
