//! JSONL (JSON Lines) output for sensor readings.
//!
//! This crate serializes generated readings either to a single flat file or
//! to Hive-style date partitions (`year=YYYY/month=MM/day=DD/`) matching the
//! downstream catalog table's partition scheme.
//!
//! # Example
//!
//! ```ignore
//! use sensor_jsonl::{write_flat, write_partitioned};
//!
//! let metrics = write_flat(&readings, "output/sensor_data.jsonl")?;
//! println!("Wrote {} records", metrics.records_written);
//!
//! let paths = write_partitioned(&readings, "data")?;
//! println!("Files created: {}", paths.len());
//! ```

pub mod error;
pub mod writer;

pub use error::JsonlWriteError;
pub use writer::{write_flat, write_partitioned, WriteMetrics, PARTITION_FILE_NAME};
