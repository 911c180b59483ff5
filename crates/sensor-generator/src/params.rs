//! Generation parameters and their validation.

use crate::generator::GeneratorError;
use chrono::{DateTime, TimeZone, Utc};

/// Parameters controlling one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// First simulated observation time.
    pub start_time: DateTime<Utc>,
    /// Length of the simulated window in days.
    pub duration_days: u32,
    /// Minutes between consecutive time steps.
    pub interval_minutes: u32,
    /// Probability in `[0, 1]` that any single reading is dropped.
    pub data_loss_probability: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            start_time: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            duration_days: 607,
            interval_minutes: 5,
            data_loss_probability: 0.03,
        }
    }
}

impl GenerationParams {
    /// Validate the parameters, failing fast on zero durations/intervals and
    /// out-of-range loss probabilities.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.duration_days == 0 {
            return Err(GeneratorError::InvalidDuration(self.duration_days));
        }
        if self.interval_minutes == 0 {
            return Err(GeneratorError::InvalidInterval(self.interval_minutes));
        }
        if !self.data_loss_probability.is_finite()
            || !(0.0..=1.0).contains(&self.data_loss_probability)
        {
            return Err(GeneratorError::InvalidLossProbability(
                self.data_loss_probability,
            ));
        }
        Ok(())
    }
}
