use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[cfg(feature = "parallel-downsample")]
use rayon::prelude::*;

use crate::core::{ReducedSample, Sample, average, lttb, min_max};
use crate::error::{ChartError, ChartResult};

/// Threshold used by hosts that do not pick one explicitly.
pub const DEFAULT_THRESHOLD: usize = 1_000;

/// Selects how a series is reduced to `threshold` representatives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownsampleStrategy {
    /// Largest-Triangle-Three-Buckets; output is exactly `threshold` samples.
    #[default]
    Lttb,
    /// Minimum and maximum of every bucket.
    MinMax,
    /// Bucket mean stamped with the bucket's middle time.
    Average,
}

impl DownsampleStrategy {
    /// Smallest threshold the strategy's bucket math accepts.
    #[must_use]
    pub fn minimum_threshold(self) -> usize {
        match self {
            Self::Lttb => 3,
            Self::MinMax => 2,
            Self::Average => 1,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lttb => "lttb",
            Self::MinMax => "min_max",
            Self::Average => "average",
        }
    }
}

impl fmt::Display for DownsampleStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DownsampleStrategy {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "lttb" => Ok(Self::Lttb),
            "min_max" | "minmax" => Ok(Self::MinMax),
            "average" | "avg" | "mean" => Ok(Self::Average),
            other => Err(ChartError::InvalidData(format!(
                "unknown downsample strategy: {other}"
            ))),
        }
    }
}

/// Reduces `samples` to at most `threshold` representatives.
///
/// Series no longer than `threshold` come back unchanged. The input is never
/// mutated; the result is a fresh allocation.
pub fn downsample_samples(
    samples: &[Sample],
    threshold: usize,
    strategy: DownsampleStrategy,
) -> ChartResult<Vec<Sample>> {
    if samples.len() <= threshold {
        return Ok(samples.to_vec());
    }

    let minimum = strategy.minimum_threshold();
    if threshold < minimum {
        return Err(ChartError::InvalidThreshold { threshold, minimum });
    }

    let sampled = match strategy {
        DownsampleStrategy::Lttb => lttb(samples, threshold),
        DownsampleStrategy::MinMax => min_max(samples, threshold),
        DownsampleStrategy::Average => average(samples, threshold),
    };

    debug!(
        strategy = %strategy,
        input_count = samples.len(),
        output_count = sampled.len(),
        threshold,
        "downsampled series"
    );
    Ok(sampled)
}

/// Downsamples and derives the millisecond axis timestamp of every output sample.
pub fn downsample(
    samples: &[Sample],
    threshold: usize,
    strategy: DownsampleStrategy,
) -> ChartResult<Vec<ReducedSample>> {
    let sampled = downsample_samples(samples, threshold, strategy)?;
    Ok(reduce_series(&sampled))
}

/// Attaches the derived `timestamp` field to every sample.
#[must_use]
pub fn reduce_series(samples: &[Sample]) -> Vec<ReducedSample> {
    #[cfg(feature = "parallel-downsample")]
    {
        samples.par_iter().copied().map(ReducedSample::from).collect()
    }

    #[cfg(not(feature = "parallel-downsample"))]
    {
        samples.iter().copied().map(ReducedSample::from).collect()
    }
}
