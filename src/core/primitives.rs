use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{SeriesError, SeriesResult};

/// Epoch-milliseconds instant; timestamp sequences are totally ordered by it.
pub type TimestampMs = i64;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> SeriesResult<f64> {
    value.to_f64().ok_or_else(|| {
        SeriesError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_epoch_millis(time: DateTime<Utc>) -> TimestampMs {
    time.timestamp_millis()
}

/// Projects a datetime sequence onto the epoch-millisecond axis used by
/// chart data.
#[must_use]
pub fn epoch_millis(times: &[DateTime<Utc>]) -> Vec<TimestampMs> {
    times.iter().map(|time| time.timestamp_millis()).collect()
}
