//! Device profile configuration.
//!
//! A [`DeviceProfile`] describes one simulated sensor: its identity, fixed
//! geographic location, the value ranges its metrics are drawn from, and how
//! fast its battery drains. Profiles are immutable once constructed and are
//! passed into the generator explicitly rather than held as global state, so
//! tests can supply synthetic fleets.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by profile validation.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Device identifier is empty.
    #[error("Device identifier must not be empty")]
    EmptyDeviceId,

    /// A metric range has min > max.
    #[error("Inverted {metric} range: min {min} > max {max}")]
    InvertedRange {
        metric: &'static str,
        min: f64,
        max: f64,
    },

    /// A metric range contains a NaN or infinite bound.
    #[error("Non-finite bound in {metric} range")]
    NonFiniteRange { metric: &'static str },

    /// Battery drain rate is negative or non-finite.
    #[error("Invalid battery drain rate: {0}")]
    InvalidDrainRate(f64),
}

/// Geographic coordinates of a device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// Inclusive `[min, max]` range a metric is sampled from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, metric: &'static str) -> Result<(), ProfileError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ProfileError::NonFiniteRange { metric });
        }
        if self.min > self.max {
            return Err(ProfileError::InvertedRange {
                metric,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Static configuration for one simulated sensor device.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceProfile {
    /// Device identifier, e.g. `sensor_001`.
    pub device_id: String,
    /// Fixed installation coordinates, copied verbatim into every reading.
    pub location: Location,
    /// Temperature sampling range in degrees Celsius.
    pub temperature_range: ValueRange,
    /// Relative humidity sampling range in percent.
    pub humidity_range: ValueRange,
    /// Atmospheric pressure sampling range in hPa.
    pub pressure_range: ValueRange,
    /// Battery drain in percentage points per hour.
    pub battery_drain_rate: f64,
}

impl DeviceProfile {
    /// Validate the profile, rejecting empty identifiers, inverted or
    /// non-finite ranges, and negative drain rates.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.device_id.is_empty() {
            return Err(ProfileError::EmptyDeviceId);
        }
        self.temperature_range.validate("temperature")?;
        self.humidity_range.validate("humidity")?;
        self.pressure_range.validate("pressure")?;
        if !self.battery_drain_rate.is_finite() || self.battery_drain_rate < 0.0 {
            return Err(ProfileError::InvalidDrainRate(self.battery_drain_rate));
        }
        Ok(())
    }
}

/// The built-in fleet of five devices installed around central Tokyo.
///
/// Returned as an owned `Vec` so callers can use it as-is, extend it, or
/// replace it entirely with a synthetic fleet.
pub fn default_fleet() -> Vec<DeviceProfile> {
    vec![
        DeviceProfile {
            device_id: "sensor_001".to_string(),
            // Tokyo station
            location: Location {
                lat: 35.6762,
                lon: 139.6503,
            },
            temperature_range: ValueRange::new(18.0, 28.0),
            humidity_range: ValueRange::new(40.0, 70.0),
            pressure_range: ValueRange::new(1010.0, 1020.0),
            battery_drain_rate: 0.1,
        },
        DeviceProfile {
            device_id: "sensor_002".to_string(),
            // Shinjuku station
            location: Location {
                lat: 35.6895,
                lon: 139.6917,
            },
            temperature_range: ValueRange::new(19.0, 29.0),
            humidity_range: ValueRange::new(35.0, 65.0),
            pressure_range: ValueRange::new(1008.0, 1018.0),
            battery_drain_rate: 0.15,
        },
        DeviceProfile {
            device_id: "sensor_003".to_string(),
            // Ikebukuro station
            location: Location {
                lat: 35.709,
                lon: 139.7319,
            },
            temperature_range: ValueRange::new(17.0, 27.0),
            humidity_range: ValueRange::new(45.0, 75.0),
            pressure_range: ValueRange::new(1012.0, 1022.0),
            battery_drain_rate: 0.08,
        },
        DeviceProfile {
            device_id: "sensor_004".to_string(),
            // Ebisu station
            location: Location {
                lat: 35.658,
                lon: 139.7016,
            },
            temperature_range: ValueRange::new(20.0, 30.0),
            humidity_range: ValueRange::new(38.0, 68.0),
            pressure_range: ValueRange::new(1009.0, 1019.0),
            battery_drain_rate: 0.12,
        },
        DeviceProfile {
            device_id: "sensor_005".to_string(),
            // Shinagawa station
            location: Location {
                lat: 35.6284,
                lon: 139.7364,
            },
            temperature_range: ValueRange::new(19.0, 29.0),
            humidity_range: ValueRange::new(42.0, 72.0),
            pressure_range: ValueRange::new(1011.0, 1021.0),
            battery_drain_rate: 0.09,
        },
    ]
}
