//! Relative date phrases from the speech front end's `date_string` slot.
//!
//! The vocabulary is closed: a phrase either matches one of the entries in
//! [`RelativePhrase::ALL`] exactly (case-sensitive) or it is rejected.
//!
//! Weeks run Sunday through Saturday. "Previous" always means strictly before
//! today: on a Tuesday, `since tuesday` starts one week ago, not today.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::{ResolveError, Result};
use crate::range::{validate, DateRange};

/// One entry of the relative-phrase vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum RelativePhrase {
    /// The Sunday–Saturday week before the current one.
    LastWeek,
    /// Friday through Sunday of the most recent weekend.
    LastWeekend,
    LastMonth,
    LastYear,
    SinceLastYear,
    SinceLastMonth,
    SinceLastWeek,
    /// From the previous occurrence of a weekday through today.
    Since(Weekday),
}

impl RelativePhrase {
    /// The complete vocabulary, in its canonical order.
    pub const ALL: [RelativePhrase; 14] = [
        RelativePhrase::LastWeek,
        RelativePhrase::LastWeekend,
        RelativePhrase::LastMonth,
        RelativePhrase::LastYear,
        RelativePhrase::SinceLastYear,
        RelativePhrase::SinceLastMonth,
        RelativePhrase::SinceLastWeek,
        RelativePhrase::Since(Weekday::Sun),
        RelativePhrase::Since(Weekday::Mon),
        RelativePhrase::Since(Weekday::Tue),
        RelativePhrase::Since(Weekday::Wed),
        RelativePhrase::Since(Weekday::Thu),
        RelativePhrase::Since(Weekday::Fri),
        RelativePhrase::Since(Weekday::Sat),
    ];

    /// The spoken form, exactly as it must appear in the slot.
    pub fn as_str(self) -> &'static str {
        match self {
            RelativePhrase::LastWeek => "last week",
            RelativePhrase::LastWeekend => "last weekend",
            RelativePhrase::LastMonth => "last month",
            RelativePhrase::LastYear => "last year",
            RelativePhrase::SinceLastYear => "since last year",
            RelativePhrase::SinceLastMonth => "since last month",
            RelativePhrase::SinceLastWeek => "since last week",
            RelativePhrase::Since(Weekday::Sun) => "since sunday",
            RelativePhrase::Since(Weekday::Mon) => "since monday",
            RelativePhrase::Since(Weekday::Tue) => "since tuesday",
            RelativePhrase::Since(Weekday::Wed) => "since wednesday",
            RelativePhrase::Since(Weekday::Thu) => "since thursday",
            RelativePhrase::Since(Weekday::Fri) => "since friday",
            RelativePhrase::Since(Weekday::Sat) => "since saturday",
        }
    }

    /// Exact lookup in the vocabulary.
    pub fn parse(s: &str) -> Option<RelativePhrase> {
        RelativePhrase::ALL.into_iter().find(|p| p.as_str() == s)
    }

    /// Whether the range runs up to today rather than to a fixed end.
    pub fn is_open_ended(self) -> bool {
        matches!(
            self,
            RelativePhrase::SinceLastYear
                | RelativePhrase::SinceLastMonth
                | RelativePhrase::SinceLastWeek
                | RelativePhrase::Since(_)
        )
    }

    /// Compute the range for this phrase without validating it.
    ///
    /// The result can end after `today` (`last weekend` on a Saturday); use
    /// [`RelativePhrase::resolve`] to get a validated range. Returns `None`
    /// when a bound falls outside the dates `chrono` can represent.
    pub fn raw_range(self, today: NaiveDate) -> Option<DateRange> {
        let (start, end) = match self {
            RelativePhrase::LastWeek => {
                let start = start_of_last_week(today)?;
                (start, start.checked_add_days(Days::new(6))?)
            }
            RelativePhrase::LastWeekend => {
                let friday = previous_weekday(today, Weekday::Fri)?;
                (friday, friday.checked_add_days(Days::new(2))?)
            }
            RelativePhrase::LastMonth => (first_of_last_month(today)?, last_of_last_month(today)?),
            RelativePhrase::LastYear => last_year_bounds(today)?,
            RelativePhrase::SinceLastYear => (last_year_bounds(today)?.0, today),
            RelativePhrase::SinceLastMonth => (first_of_last_month(today)?, today),
            RelativePhrase::SinceLastWeek => (start_of_last_week(today)?, today),
            RelativePhrase::Since(weekday) => (previous_weekday(today, weekday)?, today),
        };
        Some(DateRange::new(start, end))
    }

    /// Compute and validate the range for this phrase.
    ///
    /// # Errors
    ///
    /// [`ResolveError::OutOfCalendarRange`] when `today` sits so close to the
    /// edge of the supported calendar that a bound cannot be represented, and
    /// the validator's errors otherwise.
    pub fn resolve(self, today: NaiveDate) -> Result<DateRange> {
        let range = self
            .raw_range(today)
            .ok_or_else(|| ResolveError::OutOfCalendarRange {
                phrase: self.as_str().to_string(),
                today,
            })?;
        validate(range, today)
    }
}

impl fmt::Display for RelativePhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RelativePhrase> for &'static str {
    fn from(phrase: RelativePhrase) -> Self {
        phrase.as_str()
    }
}

impl FromStr for RelativePhrase {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self> {
        RelativePhrase::parse(s)
            .ok_or_else(|| ResolveError::UnsupportedRelativePhrase(s.to_string()))
    }
}

/// Resolve a relative phrase to a validated date range.
///
/// # Arguments
///
/// * `phrase` — The raw slot value (e.g., `"last week"`, `"since friday"`)
/// * `today` — The anchor date
///
/// # Errors
///
/// Returns [`ResolveError::UnsupportedRelativePhrase`] if the phrase is not in
/// the vocabulary, and the validator's errors if the computed range is out of
/// order or reaches past `today`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use cincy_resolver::relative::resolve_relative_phrase;
///
/// // Wednesday, February 8, 2017
/// let today = NaiveDate::from_ymd_opt(2017, 2, 8).unwrap();
/// let range = resolve_relative_phrase("last week", today).unwrap();
/// assert_eq!(range.start().to_string(), "2017-01-29");
/// assert_eq!(range.end().to_string(), "2017-02-04");
/// ```
pub fn resolve_relative_phrase(phrase: &str, today: NaiveDate) -> Result<DateRange> {
    phrase.parse::<RelativePhrase>()?.resolve(today)
}

// ── Calendar helpers ────────────────────────────────────────────────────────

/// Sunday that opened the week before the current one.
fn start_of_last_week(today: NaiveDate) -> Option<NaiveDate> {
    let days_since_sunday = u64::from(today.weekday().num_days_from_sunday());
    today.checked_sub_days(Days::new(days_since_sunday + 7))
}

/// Most recent `weekday` strictly before `today`.
fn previous_weekday(today: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let days_back = (today.weekday().num_days_from_monday() + 7
        - weekday.num_days_from_monday())
        % 7;
    let days_back = if days_back == 0 { 7 } else { days_back };
    today.checked_sub_days(Days::new(u64::from(days_back)))
}

/// Day before the 1st of the current month.
fn last_of_last_month(today: NaiveDate) -> Option<NaiveDate> {
    today.with_day(1)?.pred_opt()
}

fn first_of_last_month(today: NaiveDate) -> Option<NaiveDate> {
    last_of_last_month(today)?.with_day(1)
}

fn last_year_bounds(today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let y = today.year() - 1;
    Some((
        NaiveDate::from_ymd_opt(y, 1, 1)?,
        NaiveDate::from_ymd_opt(y, 12, 31)?,
    ))
}
