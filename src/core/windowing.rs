use crate::core::ReducedSample;

/// Returns the inclusive index window `[start, end]` of `series`, clamped to
/// its bounds. An inverted window yields an empty slice.
#[must_use]
pub fn samples_in_index_window(series: &[ReducedSample], start: usize, end: usize) -> &[ReducedSample] {
    if series.is_empty() || start > end || start >= series.len() {
        return &[];
    }
    let end = end.min(series.len() - 1);
    &series[start..=end]
}

/// Smallest inclusive index window whose timestamps cover `[start_ms, end_ms]`.
///
/// The window is widened by one sample on each side whenever a bound falls
/// between two samples, so the domain edges are never clipped. Returns `None`
/// for an empty series. Bounds may be given in either order.
#[must_use]
pub fn index_window_for_time_window(
    series: &[ReducedSample],
    start_ms: i64,
    end_ms: i64,
) -> Option<(usize, usize)> {
    if series.is_empty() {
        return None;
    }
    let (min_t, max_t) = if start_ms <= end_ms {
        (start_ms, end_ms)
    } else {
        (end_ms, start_ms)
    };

    let last = series.len() - 1;
    // First index with timestamp >= min_t, stepped back if min_t lies past a sample.
    let lower = series.partition_point(|sample| sample.timestamp < min_t);
    let start = if lower > last {
        last
    } else if series[lower].timestamp > min_t {
        lower.saturating_sub(1)
    } else {
        lower
    };

    // First index with timestamp > max_t; its predecessor is the last one covered.
    let upper = series.partition_point(|sample| sample.timestamp <= max_t);
    let end = if upper == 0 {
        0
    } else if upper <= last && series[upper - 1].timestamp < max_t {
        upper
    } else {
        upper - 1
    };

    Some((start.min(end), end.max(start)))
}
