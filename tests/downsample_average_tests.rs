use approx::assert_relative_eq;
use chart_downsample::core::{DownsampleStrategy, Sample, downsample_samples, fixed_bucket_size};

fn minute_series(values: &[f64]) -> Vec<Sample> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Sample::from_epoch_millis(i as i64 * 60_000, *v).expect("valid sample"))
        .collect()
}

#[test]
fn average_emits_bucket_means_at_middle_times() {
    let values: Vec<f64> = (0..10).map(f64::from).collect();
    let samples = minute_series(&values);
    let out = downsample_samples(&samples, 4, DownsampleStrategy::Average).expect("downsample");

    // bucket size ceil(10 / 4) = 3 gives buckets [0..3), [3..6), [6..9), [9..10).
    assert_eq!(out.len(), 4);
    assert_relative_eq!(out[0].value, 1.0);
    assert_relative_eq!(out[1].value, 4.0);
    assert_relative_eq!(out[2].value, 7.0);
    assert_relative_eq!(out[3].value, 9.0);
    assert_eq!(out[0].time, samples[1].time);
    assert_eq!(out[3].time, samples[9].time);
}

#[test]
fn average_may_return_fewer_than_threshold_points() {
    let samples = minute_series(&vec![1.0; 1_001]);
    let out = downsample_samples(&samples, 1_000, DownsampleStrategy::Average).expect("downsample");

    assert_eq!(fixed_bucket_size(1_001, 1_000), 2);
    assert_eq!(out.len(), 501);
    assert!(out.windows(2).all(|pair| pair[0].time <= pair[1].time));
}

#[test]
fn strategy_parses_from_config_strings() {
    assert_eq!("lttb".parse::<DownsampleStrategy>().expect("lttb"), DownsampleStrategy::Lttb);
    assert_eq!("min-max".parse::<DownsampleStrategy>().expect("min-max"), DownsampleStrategy::MinMax);
    assert_eq!("Average".parse::<DownsampleStrategy>().expect("average"), DownsampleStrategy::Average);
    assert!("median".parse::<DownsampleStrategy>().is_err());
    assert_eq!(DownsampleStrategy::default(), DownsampleStrategy::Lttb);
    assert_eq!(DownsampleStrategy::MinMax.to_string(), "min_max");
}
