use std::ops::Range;

use ordered_float::OrderedFloat;
use smallvec::{SmallVec, smallvec};

#[cfg(feature = "parallel-downsample")]
use rayon::prelude::*;

use crate::core::Sample;

/// Index ranges of the min-max buckets over a series of `len` samples.
///
/// Every bucket emits a pair, so there are `threshold / 2` buckets (at least
/// one, at most `len`). Edges are balanced so sizes differ by at most one and
/// each bucket's extrema fit inside the output.
#[must_use]
pub fn min_max_bucket_ranges(len: usize, threshold: usize) -> Vec<Range<usize>> {
    let buckets = (threshold / 2).max(1).min(len);
    if buckets == 0 {
        return Vec::new();
    }
    let bucket_edge = |bucket: usize| bucket * len / buckets;
    (0..buckets)
        .map(|bucket| bucket_edge(bucket)..bucket_edge(bucket + 1))
        .collect()
}

/// Min-max reduction: the minimum and maximum sample of every bucket,
/// earlier `time` first, truncated to `threshold` samples.
///
/// Emits `2 * (threshold / 2)` samples when `samples.len() > threshold`.
/// Callers guarantee `threshold >= 2` and `samples.len() > threshold`.
#[must_use]
pub fn min_max(samples: &[Sample], threshold: usize) -> Vec<Sample> {
    let ranges = min_max_bucket_ranges(samples.len(), threshold);

    #[cfg(feature = "parallel-downsample")]
    let mut sampled: Vec<Sample> = ranges
        .into_par_iter()
        .flat_map_iter(|range| bucket_extrema(&samples[range]))
        .collect();

    #[cfg(not(feature = "parallel-downsample"))]
    let mut sampled: Vec<Sample> = ranges
        .into_iter()
        .flat_map(|range| bucket_extrema(&samples[range]))
        .collect();

    sampled.truncate(threshold);
    sampled
}

/// First-encountered minimum and maximum of a non-empty bucket, ordered by time.
///
/// A flat bucket yields the same sample twice.
fn bucket_extrema(bucket: &[Sample]) -> SmallVec<[Sample; 2]> {
    let mut min = bucket[0];
    let mut max = bucket[0];

    for sample in &bucket[1..] {
        let value = OrderedFloat(sample.value);
        if value < OrderedFloat(min.value) {
            min = *sample;
        }
        if value > OrderedFloat(max.value) {
            max = *sample;
        }
    }

    if min.time < max.time {
        smallvec![min, max]
    } else {
        smallvec![max, min]
    }
}
