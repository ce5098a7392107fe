use chart_downsample::ChartError;
use chart_downsample::core::{
    DownsampleStrategy, Sample, downsample_samples, min_max_bucket_ranges,
};

fn minute_series(values: &[f64]) -> Vec<Sample> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Sample::from_epoch_millis(i as i64 * 60_000, *v).expect("valid sample"))
        .collect()
}

#[test]
fn min_max_keeps_both_extrema_of_every_bucket() {
    let values: Vec<f64> = (0..1_000).map(|i| ((i * 37) % 101) as f64).collect();
    let samples = minute_series(&values);
    let out = downsample_samples(&samples, 100, DownsampleStrategy::MinMax).expect("downsample");

    assert_eq!(out.len(), 100);
    for range in min_max_bucket_ranges(samples.len(), 100) {
        let bucket = &samples[range];
        let min = bucket.iter().map(|s| s.value).fold(f64::INFINITY, f64::min);
        let max = bucket.iter().map(|s| s.value).fold(f64::NEG_INFINITY, f64::max);
        let start = bucket[0].time;
        let end = bucket[bucket.len() - 1].time;
        let in_bucket: Vec<f64> = out
            .iter()
            .filter(|s| s.time >= start && s.time <= end)
            .map(|s| s.value)
            .collect();
        assert!(in_bucket.contains(&min));
        assert!(in_bucket.contains(&max));
    }
}

#[test]
fn min_max_orders_each_pair_by_time() {
    // bucket size 3: [9, 1, 5] emits max before min, [2, 8, 4] min before max.
    let samples = minute_series(&[9.0, 1.0, 5.0, 2.0, 8.0, 4.0]);
    let out = downsample_samples(&samples, 5, DownsampleStrategy::MinMax).expect("downsample");

    assert_eq!(out, vec![samples[0], samples[1], samples[3], samples[4]]);
}

#[test]
fn min_max_output_times_never_decrease() {
    let values: Vec<f64> = (0..5_000).map(|i| (i as f64 * 0.3).cos() * 10.0).collect();
    let samples = minute_series(&values);
    let out = downsample_samples(&samples, 333, DownsampleStrategy::MinMax).expect("downsample");

    assert_eq!(out.len(), 332);
    assert!(out.windows(2).all(|pair| pair[0].time <= pair[1].time));
}

#[test]
fn min_max_rejects_threshold_below_two() {
    let samples = minute_series(&[1.0, 2.0, 3.0]);
    let err = downsample_samples(&samples, 1, DownsampleStrategy::MinMax)
        .expect_err("threshold 1 must fail");
    assert!(matches!(err, ChartError::InvalidThreshold { minimum: 2, .. }));
}

#[test]
fn min_max_fills_the_pair_budget_just_above_threshold() {
    for (len, threshold) in [(1_001, 1_000), (2_000, 1_001), (10, 3), (5, 4)] {
        let values: Vec<f64> = (0..len).map(|i| ((i * 7) % 23) as f64).collect();
        let samples = minute_series(&values);
        let out = downsample_samples(&samples, threshold, DownsampleStrategy::MinMax)
            .expect("downsample");
        assert_eq!(out.len(), 2 * (threshold / 2), "len={len} threshold={threshold}");
    }
}
