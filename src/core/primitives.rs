use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

/// Converts epoch milliseconds back to a UTC datetime.
///
/// Fractional milliseconds are rounded; out-of-range values yield `None`.
#[must_use]
pub fn unix_millis_to_datetime(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    let rounded = millis.round();
    if rounded > (i64::MAX as f64) || rounded < (i64::MIN as f64) {
        return None;
    }
    Utc.timestamp_millis_opt(rounded as i64).single()
}
