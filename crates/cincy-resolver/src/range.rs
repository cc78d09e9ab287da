//! Closed calendar date ranges and their validation.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{ResolveError, Result};

/// An inclusive `[start, end]` pair of calendar dates.
///
/// Ranges handed out by the resolvers have already passed [`validate`], so
/// `start <= end <= today` held on the day they were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build an unvalidated range. Run it through [`validate`] before use.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A range covering exactly one day.
    pub fn single(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Enforce `start <= end` and `end <= today`.
///
/// # Errors
///
/// Returns [`ResolveError::InvalidRangeOrder`] when the range is reversed and
/// [`ResolveError::FutureDateRejected`] when it ends after `today`. Ordering is
/// checked first.
pub fn validate(range: DateRange, today: NaiveDate) -> Result<DateRange> {
    if range.start > range.end {
        return Err(ResolveError::InvalidRangeOrder {
            start: range.start,
            end: range.end,
        });
    }
    if range.end > today {
        return Err(ResolveError::FutureDateRejected {
            end: range.end,
            today,
        });
    }
    Ok(range)
}
