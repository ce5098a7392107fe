use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{
    datetime_to_unix_millis, decimal_to_f64, epoch_millis_to_datetime, parse_iso_time,
};
use crate::error::{ChartError, ChartResult};

/// One raw observation of the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: DateTime<Utc>,
    pub value: f64,
}

impl Sample {
    #[must_use]
    pub fn new(time: DateTime<Utc>, value: f64) -> Self {
        Self { time, value }
    }

    /// Builds a sample from an ISO-8601 timestamp string.
    pub fn parse(time: &str, value: f64) -> ChartResult<Self> {
        Ok(Self::new(parse_iso_time(time)?, value))
    }

    pub fn from_epoch_millis(millis: i64, value: f64) -> ChartResult<Self> {
        Ok(Self::new(epoch_millis_to_datetime(millis)?, value))
    }

    pub fn from_decimal(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(time, decimal_to_f64(value, "value")?))
    }

    #[must_use]
    pub fn timestamp_millis(self) -> i64 {
        datetime_to_unix_millis(self.time)
    }
}

/// Downsampled sample carrying its numeric axis position.
///
/// `timestamp` is always `time` expressed in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReducedSample {
    pub time: DateTime<Utc>,
    pub value: f64,
    pub timestamp: i64,
}

impl ReducedSample {
    #[must_use]
    pub fn sample(self) -> Sample {
        Sample::new(self.time, self.value)
    }
}

impl From<Sample> for ReducedSample {
    fn from(sample: Sample) -> Self {
        Self {
            time: sample.time,
            value: sample.value,
            timestamp: sample.timestamp_millis(),
        }
    }
}

/// Checks the ordering and finiteness invariants every series must hold.
///
/// Times must be non-decreasing by index and every value must be finite.
pub fn validate_series(samples: &[Sample]) -> ChartResult<()> {
    for (index, sample) in samples.iter().enumerate() {
        if !sample.value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "sample {index} has a non-finite value"
            )));
        }
    }

    if let Some(index) = samples
        .windows(2)
        .position(|pair| pair[1].time < pair[0].time)
    {
        return Err(ChartError::InvalidData(format!(
            "sample {} is older than sample {index}",
            index + 1
        )));
    }

    Ok(())
}
