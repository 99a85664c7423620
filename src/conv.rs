use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use log::trace;

use crate::error::Error;

pub const EPOCH_DATE: NaiveDate = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Largest absolute timestamp (ms) a host clock will represent: 100,000,000 days either side
/// of 1970-01-01.
pub const MAX_TIME_MILLIS: f64 = 8.64e15;

pub fn epoch_millis(epoch: NaiveDate) -> i64 {
    epoch.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Instant `offset` days after midnight UTC of `epoch`, with millisecond resolution.
pub fn instant(epoch: NaiveDate, offset: f64) -> crate::Result<DateTime<Utc>> {
    if !offset.is_finite() {
        return Err(Error::InvalidArgument(offset));
    }

    let millis = epoch_millis(epoch) as f64 + offset * MILLIS_PER_DAY as f64;
    if !millis.is_finite() || millis.abs() > MAX_TIME_MILLIS {
        return Err(Error::OutOfRange(format!(
            "{offset} days from {epoch} is outside the representable time range"
        )));
    }

    // |millis| <= 8.64e15 fits in i64 without loss after truncation
    #[expect(clippy::cast_possible_truncation)]
    let millis = millis.trunc() as i64;
    trace!("offset {offset} -> {millis}ms");

    DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| Error::OutOfRange(format!("timestamp {millis}ms")))
}

pub fn date_at(epoch: NaiveDate, offset: f64) -> crate::Result<NaiveDate> {
    Ok(instant(epoch, offset)?.date_naive())
}

pub fn date_at_days(epoch: NaiveDate, days: i64) -> crate::Result<NaiveDate> {
    TimeDelta::try_days(days)
        .and_then(|delta| epoch.checked_add_signed(delta))
        .ok_or_else(|| Error::OutOfRange(format!("{days} days from {epoch}")))
}

pub fn days_between(epoch: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(epoch).num_days()
}
