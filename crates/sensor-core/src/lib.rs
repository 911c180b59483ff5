//! Core types for the sensor data generator.
//!
//! This crate provides the foundational types shared by the generation and
//! serialization crates:
//!
//! - [`DeviceProfile`] - Static per-device configuration (identity, location,
//!   metric ranges, battery drain rate)
//! - [`Reading`] - One timestamped multi-metric observation
//! - [`default_fleet`] - The five built-in device profiles
//!
//! # Architecture
//!
//! ```text
//! sensor-core (this crate)
//!    │
//!    ├─── sensor-generator  (produces Readings from DeviceProfiles)
//!    └─── sensor-jsonl      (serializes Readings to JSONL files)
//! ```
//!
//! # Example
//!
//! ```rust
//! use sensor_core::default_fleet;
//!
//! let fleet = default_fleet();
//! assert_eq!(fleet.len(), 5);
//! for profile in &fleet {
//!     profile.validate().unwrap();
//! }
//! ```

pub mod device;
pub mod reading;

// Re-exports for convenience
pub use device::{default_fleet, DeviceProfile, Location, ProfileError, ValueRange};
pub use reading::Reading;
