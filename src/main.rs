//! Command-line interface for the synthetic sensor data generator.
//!
//! Generates a randomized multi-device sensor time series and writes it as
//! JSONL, by default into Hive-style date partitions matching the downstream
//! catalog table layout (`year=YYYY/month=MM/day=DD/sensor_data.jsonl`).
//!
//! # Usage Examples
//!
//! ```bash
//! # Defaults: 607 days of 5-minute readings for 5 devices, 3% loss,
//! # partitioned under ./data
//! sensor-data-generator
//!
//! # One day of hourly readings, reproducible, into a custom directory
//! sensor-data-generator \
//!   --duration-days 1 \
//!   --interval-minutes 60 \
//!   --data-loss-probability 0 \
//!   --seed 7 \
//!   --output-dir /tmp/sensor-data
//!
//! # Single flat file instead of partitions
//! sensor-data-generator --flat output/sensor_data.jsonl
//! ```

use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use clap::Parser;
use sensor_core::default_fleet;
use sensor_generator::{DatasetGenerator, GenerationParams};
use sensor_jsonl::{write_flat, write_partitioned};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "sensor-data-generator")]
#[command(about = "Generates synthetic IoT sensor readings as date-partitioned JSONL")]
#[command(long_about = None)]
struct Cli {
    /// Simulation start time (RFC 3339)
    #[arg(long, default_value = "2024-01-01T00:00:00Z")]
    start_time: DateTime<Utc>,

    /// Length of the simulated window in days
    #[arg(long, default_value = "607")]
    duration_days: u32,

    /// Minutes between consecutive readings per device
    #[arg(long, default_value = "5")]
    interval_minutes: u32,

    /// Probability that any single reading is dropped (simulated telemetry loss)
    #[arg(long, default_value = "0.03")]
    data_loss_probability: f64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Base directory for partitioned output
    #[arg(long, short = 'o', default_value = "data")]
    output_dir: PathBuf,

    /// Write a single flat JSONL file at this path instead of date partitions
    #[arg(long, value_name = "PATH")]
    flat: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let params = GenerationParams {
        start_time: cli.start_time,
        duration_days: cli.duration_days,
        interval_minutes: cli.interval_minutes,
        data_loss_probability: cli.data_loss_probability,
    };

    info!("Generating IoT sensor data...");
    let mut generator =
        DatasetGenerator::new(default_fleet(), cli.seed).context("Invalid device fleet")?;
    let (readings, _summary) = generator
        .generate(&params)
        .context("Dataset generation failed")?;

    let files_created = if let Some(flat_path) = &cli.flat {
        write_flat(&readings, flat_path)
            .with_context(|| format!("Failed to write {}", flat_path.display()))?;
        1
    } else {
        let paths = write_partitioned(&readings, &cli.output_dir).with_context(|| {
            format!(
                "Failed to write partitions under {}",
                cli.output_dir.display()
            )
        })?;
        paths.len()
    };

    info!("Dataset summary:");
    info!("- Total records: {}", readings.len());
    info!("- Files created: {files_created}");
    if let (Some(first), Some(last)) = (readings.first(), readings.last()) {
        info!(
            "- Date range: {} to {}",
            first.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            last.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
        );
    }
    let mut devices: Vec<&str> = Vec::new();
    for reading in &readings {
        if !devices.contains(&reading.device_id.as_str()) {
            devices.push(&reading.device_id);
        }
    }
    info!("- Devices: {}", devices.join(", "));

    Ok(())
}
