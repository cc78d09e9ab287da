//! Error types for slot resolution.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Unsupported date token: '{0}'")]
    UnsupportedDateToken(String),

    #[error("Unsupported relative phrase: '{0}'")]
    UnsupportedRelativePhrase(String),

    #[error("Invalid range order: start {start} is after end {end}")]
    InvalidRangeOrder { start: NaiveDate, end: NaiveDate },

    #[error("Future date rejected: {end} is after today ({today})")]
    FutureDateRejected { end: NaiveDate, today: NaiveDate },

    #[error("Location not recognized: '{0}'")]
    LocationNotRecognized(String),

    #[error("Out of calendar range: '{phrase}' cannot be computed from {today}")]
    OutOfCalendarRange { phrase: String, today: NaiveDate },
}

impl ResolveError {
    /// Stable machine-readable identifier for the failure kind.
    pub fn code(&self) -> &'static str {
        match self {
            ResolveError::UnsupportedDateToken(_) => "unsupported_date_token",
            ResolveError::UnsupportedRelativePhrase(_) => "unsupported_relative_phrase",
            ResolveError::InvalidRangeOrder { .. } => "invalid_range_order",
            ResolveError::FutureDateRejected { .. } => "future_date_rejected",
            ResolveError::LocationNotRecognized(_) => "location_not_recognized",
            ResolveError::OutOfCalendarRange { .. } => "out_of_calendar_range",
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;
