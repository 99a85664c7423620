use std::num::NonZeroU64;
use std::ops::RangeInclusive;

use chrono::NaiveDate;
use log::debug;

use crate::conv::{EPOCH_DATE, date_at, date_at_days, days_between};
use crate::error::Error;
use crate::iso::date_prefix;

/// Maps a day offset to the `YYYY-MM-DD` date that many days after a fixed UTC epoch.
///
/// All arithmetic is done in UTC, so the same offset always yields the same date regardless of
/// the local timezone of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateOffsetFormatter {
    epoch: NaiveDate,
}

impl Default for DateOffsetFormatter {
    fn default() -> Self {
        Self { epoch: EPOCH_DATE }
    }
}

impl DateOffsetFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_epoch(epoch: NaiveDate) -> Self {
        Self { epoch }
    }

    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Fractional offsets resolve to the date containing the resulting instant, e.g. `-0.5` is
    /// noon on the day before the epoch. Non-finite offsets are rejected with
    /// [`Error::InvalidArgument`].
    pub fn format(&self, offset: f64) -> crate::Result<String> {
        let date =
            date_at(self.epoch, offset).inspect_err(|err| debug!("format({offset}): {err}"))?;
        Ok(date_prefix(date))
    }

    pub fn format_days(&self, days: i64) -> crate::Result<String> {
        Ok(date_prefix(date_at_days(self.epoch, days)?))
    }

    /// Inverse of [`Self::format_days`]: whole days from the epoch to `date`.
    pub fn offset_of(&self, date: NaiveDate) -> i64 {
        days_between(self.epoch, date)
    }

    /// `(offset, label)` pairs every `step` days across `range`, for axis ticks and slider
    /// marks. The upper bound is included only when the step lands on it.
    pub fn tick_labels(
        &self,
        range: RangeInclusive<i64>,
        step: NonZeroU64,
    ) -> crate::Result<Vec<(i64, String)>> {
        let step = i64::try_from(step.get())
            .map_err(|_| Error::OutOfRange(format!("tick step {step}")))?;
        let (start, end) = range.into_inner();

        let mut ticks = Vec::new();
        let mut offset = start;
        while offset <= end {
            ticks.push((offset, self.format_days(offset)?));
            let Some(next) = offset.checked_add(step) else {
                break;
            };
            offset = next;
        }

        debug!("{} ticks over {start}..={end} step {step}", ticks.len());
        Ok(ticks)
    }
}

/// Formats `offset` against the default 2020-01-01 epoch.
pub fn format(offset: f64) -> crate::Result<String> {
    DateOffsetFormatter::default().format(offset)
}
