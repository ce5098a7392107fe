use chart_downsample::ChartError;
use chart_downsample::core::{ReducedSample, Sample, validate_series};
use rust_decimal::Decimal;

#[test]
fn parses_iso_timestamps_to_epoch_millis() {
    let sample = Sample::parse("2020-01-01T00:01:00.000Z", 100.25).expect("iso time");
    assert_eq!(sample.timestamp_millis(), 1_577_836_860_000);

    let offset = Sample::parse("2020-01-01T02:01:00+02:00", 1.0).expect("offset time");
    assert_eq!(offset.time, sample.time);
}

#[test]
fn rejects_unparseable_timestamps() {
    let err = Sample::parse("yesterday", 1.0).expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidTimestamp(_)));
}

#[test]
fn decimal_values_are_converted() {
    let time = Sample::parse("2020-01-01T00:00:00Z", 0.0).expect("iso time").time;
    let sample = Sample::from_decimal(time, Decimal::new(10_025, 2)).expect("decimal");
    assert!((sample.value - 100.25).abs() <= 1e-12);
}

#[test]
fn reduced_sample_carries_millisecond_timestamp() {
    let sample = Sample::from_epoch_millis(1_234_567, 3.0).expect("sample");
    let reduced = ReducedSample::from(sample);
    assert_eq!(reduced.timestamp, 1_234_567);
    assert_eq!(reduced.sample(), sample);
}

#[test]
fn validate_series_accepts_equal_times() {
    let a = Sample::from_epoch_millis(0, 1.0).expect("sample");
    let b = Sample::from_epoch_millis(0, 2.0).expect("sample");
    validate_series(&[a, b]).expect("equal times are non-decreasing");
    validate_series(&[]).expect("empty series is valid");
    assert!(validate_series(&[b, Sample::from_epoch_millis(-1, 0.0).expect("sample")]).is_err());
}
