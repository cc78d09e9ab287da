//! Absolute date tokens from the speech front end's `date` slot.
//!
//! The front end reports a spoken date at whatever precision it heard:
//! a full day, a month, a year, an ISO week, a decade, or the "present"
//! marker. This module fills in the missing fields so the result is always a
//! single calendar day.
//!
//! # Token Shapes
//!
//! Checked in this order, each against the whole token:
//!
//! | shape        | example      | resolves to                    |
//! |--------------|--------------|--------------------------------|
//! | `YYYY-MM-DD` | `2017-03-02` | unchanged                      |
//! | present      | `PRESENT_REF`| today                          |
//! | `YYYY-MM`    | `2017-03`    | first of the month             |
//! | `YYYX`       | `201X`       | January 1 of the current year  |
//! | `YYYY`       | `2017`       | January 1 of that year         |
//! | `YYYY-Www`   | `2017-W23`   | Monday of that ISO week        |
//!
//! Week-plus-weekend (`2017-W23-WE`), season (`2017-WI`) and anything else is
//! rejected. Nothing is guessed.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, Weekday};
use regex::Regex;

use crate::error::{ResolveError, Result};
use crate::range::{validate, DateRange};

/// Literal the speech front end sends for "now" / "today".
pub const PRESENT_REF: &str = "PRESENT_REF";

/// Plain-word spelling of the present marker.
pub const PRESENT_WORD: &str = "present";

struct TokenPatterns {
    full_date: Regex,
    year_month: Regex,
    decade: Regex,
    year: Regex,
    iso_week: Regex,
}

fn patterns() -> &'static TokenPatterns {
    static PATTERNS: OnceLock<TokenPatterns> = OnceLock::new();
    PATTERNS.get_or_init(TokenPatterns::new)
}

impl TokenPatterns {
    fn new() -> Self {
        Self {
            full_date: Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$")
                .expect("full date pattern"),
            year_month: Regex::new(r"^([0-9]{4})-([0-9]{2})$").expect("year-month pattern"),
            decade: Regex::new(r"^[0-9]{3}X$").expect("decade pattern"),
            year: Regex::new(r"^([0-9]{4})$").expect("year pattern"),
            iso_week: Regex::new(r"^([0-9]{4})-W([0-9]{2})$").expect("iso week pattern"),
        }
    }
}

/// Resolve a partial date token to a fully specified calendar date.
///
/// # Arguments
///
/// * `token` — The raw slot value (e.g., `"2017-03"`, `"2017-W23"`, `"PRESENT_REF"`)
/// * `today` — The current date, used by the present and decade shapes
///
/// # Errors
///
/// Returns [`ResolveError::UnsupportedDateToken`] if the token matches none of
/// the supported shapes, or if it matches a shape but names a day that does not
/// exist (e.g., `"2017-02-30"`, `"2015-W54"`).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use cincy_resolver::absolute::resolve_absolute_date;
///
/// let today = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let date = resolve_absolute_date("2017-W23", today).unwrap();
/// assert_eq!(date.to_string(), "2017-06-05");
/// ```
pub fn resolve_absolute_date(token: &str, today: NaiveDate) -> Result<NaiveDate> {
    let unsupported = || ResolveError::UnsupportedDateToken(token.to_string());
    let p = patterns();

    if let Some(caps) = p.full_date.captures(token) {
        return ymd(&caps[1], &caps[2], &caps[3]).ok_or_else(unsupported);
    }
    if token == PRESENT_REF || token == PRESENT_WORD {
        return Ok(today);
    }
    if let Some(caps) = p.year_month.captures(token) {
        return ymd(&caps[1], &caps[2], "01").ok_or_else(unsupported);
    }
    if p.decade.is_match(token) {
        // The front end's decade marker is anchored to the current year, not to
        // the decade it names.
        return NaiveDate::from_ymd_opt(today.year(), 1, 1).ok_or_else(unsupported);
    }
    if let Some(caps) = p.year.captures(token) {
        return ymd(&caps[1], "01", "01").ok_or_else(unsupported);
    }
    if let Some(caps) = p.iso_week.captures(token) {
        return iso_week_monday(&caps[1], &caps[2]).ok_or_else(unsupported);
    }

    Err(unsupported())
}

/// Resolve a date token and validate it as a single-day range.
///
/// # Errors
///
/// Everything [`resolve_absolute_date`] returns, plus
/// [`ResolveError::FutureDateRejected`] when the day is after `today`.
pub fn resolve_date_token(token: &str, today: NaiveDate) -> Result<DateRange> {
    let date = resolve_absolute_date(token, today)?;
    validate(DateRange::single(date), today)
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn iso_week_monday(year: &str, week: &str) -> Option<NaiveDate> {
    NaiveDate::from_isoywd_opt(year.parse().ok()?, week.parse().ok()?, Weekday::Mon)
}
