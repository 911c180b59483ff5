//! The `Reading` record type and its wire format.

use crate::device::Location;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped observation emitted by a device.
///
/// The JSON field set is the external contract consumed by the downstream
/// catalog table; field names and types must not change:
///
/// ```json
/// {"device_id":"sensor_001","timestamp":"2024-01-01T00:00:00.000Z",
///  "temperature":23.4,"humidity":55.2,"pressure":1013.25,
///  "location":{"lat":35.6762,"lon":139.6503},"battery":100}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub device_id: String,
    /// Observation time, serialized as RFC 3339 UTC with millisecond
    /// precision (trailing `Z`).
    #[serde(with = "timestamp_millis")]
    pub timestamp: DateTime<Utc>,
    /// Degrees Celsius, rounded to one decimal place.
    pub temperature: f64,
    /// Relative humidity in percent, rounded to one decimal place.
    pub humidity: f64,
    /// Atmospheric pressure in hPa, rounded to two decimal places.
    pub pressure: f64,
    /// Copied verbatim from the owning device profile.
    pub location: Location,
    /// Remaining battery percentage, clamped to at least 1.
    pub battery: i64,
}

/// Serde adapter for millisecond-precision RFC 3339 timestamps.
mod timestamp_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
