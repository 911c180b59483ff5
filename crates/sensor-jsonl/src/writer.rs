//! Flat and date-partitioned JSONL writers.

use crate::error::JsonlWriteError;
use chrono::{Datelike, NaiveDate};
use sensor_core::Reading;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// File name used inside each date partition directory.
pub const PARTITION_FILE_NAME: &str = "sensor_data.jsonl";

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of records written.
    pub records_written: u64,
    /// Total output size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl WriteMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Write all readings to a single JSONL file, one record per line in input
/// order. Missing parent directories are created.
pub fn write_flat<P: AsRef<Path>>(
    readings: &[Reading],
    output_path: P,
) -> Result<WriteMetrics, JsonlWriteError> {
    let start_time = Instant::now();
    let output_path = output_path.as_ref();

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    write_records(readings, output_path)?;

    let metrics = WriteMetrics {
        records_written: readings.len() as u64,
        file_size_bytes: fs::metadata(output_path)?.len(),
        total_duration: start_time.elapsed(),
    };

    info!(
        "Generated {} records and saved to {} ({} bytes, {:.2} records/sec)",
        metrics.records_written,
        output_path.display(),
        metrics.file_size_bytes,
        metrics.records_per_second()
    );

    Ok(metrics)
}

/// Write readings into Hive-style date partitions under `base_dir`.
///
/// Readings are grouped by UTC calendar date; each group lands at
/// `base_dir/year=YYYY/month=MM/day=DD/sensor_data.jsonl`, preserving the
/// input order within each partition. The input is timestamp-sorted, so
/// ascending date order equals first-occurrence order.
///
/// Returns the written file paths in date order.
pub fn write_partitioned<P: AsRef<Path>>(
    readings: &[Reading],
    base_dir: P,
) -> Result<Vec<PathBuf>, JsonlWriteError> {
    let base_dir = base_dir.as_ref();

    let mut by_date: BTreeMap<NaiveDate, Vec<&Reading>> = BTreeMap::new();
    for reading in readings {
        by_date
            .entry(reading.timestamp.date_naive())
            .or_default()
            .push(reading);
    }

    let mut output_paths = Vec::with_capacity(by_date.len());

    for (date, day_readings) in &by_date {
        let partition_dir = base_dir
            .join(format!("year={:04}", date.year()))
            .join(format!("month={:02}", date.month()))
            .join(format!("day={:02}", date.day()));
        fs::create_dir_all(&partition_dir)?;

        let file_path = partition_dir.join(PARTITION_FILE_NAME);
        write_records(day_readings.iter().copied(), &file_path)?;

        info!(
            "Generated {} records for {} and saved to {}",
            day_readings.len(),
            date,
            file_path.display()
        );
        output_paths.push(file_path);
    }

    Ok(output_paths)
}

fn write_records<'a, I>(readings: I, path: &Path) -> Result<(), JsonlWriteError>
where
    I: IntoIterator<Item = &'a Reading>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
    for reading in readings {
        serde_json::to_writer(&mut writer, reading)?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sensor_core::{default_fleet, Location};
    use sensor_generator::{DatasetGenerator, GenerationParams};
    use tempfile::TempDir;

    fn sample_readings() -> Vec<Reading> {
        let location = Location {
            lat: 35.6762,
            lon: 139.6503,
        };
        vec![
            Reading {
                device_id: "sensor_001".to_string(),
                timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 23, 55, 0).unwrap(),
                temperature: 21.3,
                humidity: 55.0,
                pressure: 1013.25,
                location,
                battery: 97,
            },
            Reading {
                device_id: "sensor_002".to_string(),
                timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
                temperature: 19.8,
                humidity: 48.2,
                pressure: 1011.02,
                location,
                battery: 96,
            },
            Reading {
                device_id: "sensor_001".to_string(),
                timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 0, 5, 0).unwrap(),
                temperature: 20.1,
                humidity: 51.7,
                pressure: 1012.4,
                location,
                battery: 96,
            },
        ]
    }

    fn read_jsonl(path: &Path) -> Vec<Reading> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_flat_round_trip() {
        let readings = sample_readings();
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("nested").join("sensor_data.jsonl");

        let metrics = write_flat(&readings, &output_path).unwrap();
        assert_eq!(metrics.records_written, 3);
        assert!(metrics.file_size_bytes > 0);
        assert!(output_path.exists());

        assert_eq!(read_jsonl(&output_path), readings);
    }

    #[test]
    fn test_flat_empty_dataset() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("empty.jsonl");

        let metrics = write_flat(&[], &output_path).unwrap();
        assert_eq!(metrics.records_written, 0);
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "");
    }

    #[test]
    fn test_partition_layout() {
        let readings = sample_readings();
        let temp_dir = TempDir::new().unwrap();

        let paths = write_partitioned(&readings, temp_dir.path()).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(
            paths[0],
            temp_dir
                .path()
                .join("year=2024")
                .join("month=01")
                .join("day=01")
                .join("sensor_data.jsonl")
        );
        assert_eq!(
            paths[1],
            temp_dir
                .path()
                .join("year=2024")
                .join("month=01")
                .join("day=02")
                .join("sensor_data.jsonl")
        );
    }

    #[test]
    fn test_partition_completeness() {
        let readings = sample_readings();
        let temp_dir = TempDir::new().unwrap();

        let paths = write_partitioned(&readings, temp_dir.path()).unwrap();

        let mut recovered = Vec::new();
        for path in &paths {
            recovered.extend(read_jsonl(path));
        }

        // Union of partitions equals the input, nothing duplicated or lost;
        // input is timestamp-sorted so concatenating date partitions in
        // order reproduces it exactly.
        assert_eq!(recovered, readings);
    }

    #[test]
    fn test_partition_date_homogeneity() {
        let readings = sample_readings();
        let temp_dir = TempDir::new().unwrap();

        for path in write_partitioned(&readings, temp_dir.path()).unwrap() {
            // Extract the partition date from the year=/month=/day= segments
            let segments: Vec<String> = path
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            let digits = |prefix: &str| {
                segments
                    .iter()
                    .find_map(|s| s.strip_prefix(prefix).map(str::to_owned))
                    .unwrap()
            };
            let expected = format!("{}-{}-{}", digits("year="), digits("month="), digits("day="));

            for reading in read_jsonl(&path) {
                assert_eq!(reading.timestamp.date_naive().to_string(), expected);
            }
        }
    }

    #[test]
    fn test_partition_empty_dataset() {
        let temp_dir = TempDir::new().unwrap();
        let paths = write_partitioned(&[], temp_dir.path()).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_single_day_scenario_produces_one_partition() {
        let params = GenerationParams {
            start_time: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            duration_days: 1,
            interval_minutes: 60,
            data_loss_probability: 0.0,
        };
        let mut generator = DatasetGenerator::new(default_fleet(), 42).unwrap();
        let (readings, _) = generator.generate(&params).unwrap();
        assert_eq!(readings.len(), 120);

        let temp_dir = TempDir::new().unwrap();
        let paths = write_partitioned(&readings, temp_dir.path()).unwrap();

        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with(
            Path::new("year=2024")
                .join("month=01")
                .join("day=01")
                .join("sensor_data.jsonl")
        ));
        assert_eq!(read_jsonl(&paths[0]).len(), 120);
    }

    #[test]
    fn test_generated_dataset_round_trip() {
        let params = GenerationParams {
            duration_days: 2,
            interval_minutes: 120,
            ..GenerationParams::default()
        };
        let mut generator = DatasetGenerator::new(default_fleet(), 42).unwrap();
        let (readings, _) = generator.generate(&params).unwrap();

        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("sensor_data.jsonl");
        write_flat(&readings, &output_path).unwrap();

        assert_eq!(read_jsonl(&output_path), readings);
    }

    #[test]
    fn test_metrics_rates() {
        let metrics = WriteMetrics {
            records_written: 1000,
            file_size_bytes: 100000,
            total_duration: Duration::from_secs(10),
        };
        assert_eq!(metrics.records_per_second(), 100.0);

        assert_eq!(WriteMetrics::default().records_per_second(), 0.0);
    }
}
