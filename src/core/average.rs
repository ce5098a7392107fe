#[cfg(feature = "parallel-downsample")]
use rayon::prelude::*;

use crate::core::Sample;

/// Bucket size shared by the fixed-bucket strategies: `ceil(len / threshold)`.
#[must_use]
pub fn fixed_bucket_size(len: usize, threshold: usize) -> usize {
    len.div_ceil(threshold.max(1)).max(1)
}

/// Average reduction: one sample per fixed-size bucket holding the bucket's
/// mean value and the time of its middle sample.
///
/// Output length is `ceil(len / bucket_size)` and may fall short of `threshold`.
#[must_use]
pub fn average(samples: &[Sample], threshold: usize) -> Vec<Sample> {
    let bucket_size = fixed_bucket_size(samples.len(), threshold);

    #[cfg(feature = "parallel-downsample")]
    {
        samples.par_chunks(bucket_size).map(bucket_mean).collect()
    }

    #[cfg(not(feature = "parallel-downsample"))]
    {
        samples.chunks(bucket_size).map(bucket_mean).collect()
    }
}

fn bucket_mean(bucket: &[Sample]) -> Sample {
    let sum: f64 = bucket.iter().map(|sample| sample.value).sum();
    let middle = bucket[bucket.len() / 2];
    Sample::new(middle.time, sum / bucket.len() as f64)
}
