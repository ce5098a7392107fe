use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Parses an ISO-8601 / RFC 3339 timestamp (`2020-01-01T00:00:00.000Z`).
pub fn parse_iso_time(input: &str) -> ChartResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|time| time.with_timezone(&Utc))
        .map_err(|e| ChartError::InvalidTimestamp(format!("{input:?}: {e}")))
}

pub fn epoch_millis_to_datetime(millis: i64) -> ChartResult<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| ChartError::InvalidTimestamp(format!("{millis} ms is out of range")))
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}
