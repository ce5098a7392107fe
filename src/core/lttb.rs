use crate::core::Sample;

/// Largest-Triangle-Three-Buckets reduction.
///
/// The first and last samples are kept verbatim; every one of the
/// `threshold - 2` inner buckets contributes the sample forming the largest
/// triangle with the previously selected sample and the centroid of the
/// following bucket. The x axis is the sample index.
///
/// Callers guarantee `threshold >= 3` and `samples.len() > threshold`.
#[must_use]
pub fn lttb(samples: &[Sample], threshold: usize) -> Vec<Sample> {
    let n = samples.len();
    debug_assert!(threshold >= 3 && n > threshold);

    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let bucket_edge = |bucket: usize| (bucket as f64 * bucket_size).floor() as usize + 1;

    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(samples[0]);

    let mut anchor = 0usize;
    for i in 0..threshold - 2 {
        let range_start = bucket_edge(i);
        let range_end = bucket_edge(i + 1).min(n - 1).max(range_start + 1);

        let (avg_x, avg_y) = next_bucket_centroid(samples, bucket_edge(i + 1), bucket_edge(i + 2));

        let anchor_x = anchor as f64;
        let anchor_y = samples[anchor].value;
        let mut max_area = -1.0;
        let mut selected = range_start;

        for (offset, candidate) in samples[range_start..range_end].iter().enumerate() {
            let j = range_start + offset;
            let area = ((anchor_y - avg_y) * (j as f64 - anchor_x)
                - (anchor_y - candidate.value) * (avg_x - anchor_x))
                .abs();
            if area > max_area {
                max_area = area;
                selected = j;
            }
        }

        sampled.push(samples[selected]);
        anchor = selected;
    }

    sampled.push(samples[n - 1]);
    sampled
}

/// Mean index and mean value of `samples[start..end]`, with `end` clamped to
/// the series length.
///
/// An empty range (possible with adverse rounding near the tail) reuses the
/// sample adjacent to `start` instead of dividing by zero.
fn next_bucket_centroid(samples: &[Sample], start: usize, end: usize) -> (f64, f64) {
    let n = samples.len();
    let end = end.min(n);

    if start >= end {
        let adjacent = start.min(n - 1);
        return (adjacent as f64, samples[adjacent].value);
    }

    let count = (end - start) as f64;
    let (sum_x, sum_y) = samples[start..end]
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(sx, sy), (offset, sample)| {
            (sx + (start + offset) as f64, sy + sample.value)
        });

    (sum_x / count, sum_y / count)
}
