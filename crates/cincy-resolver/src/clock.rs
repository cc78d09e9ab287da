//! Sources of "today".
//!
//! Every resolver takes `today` as an explicit argument. A [`ClockSource`] is
//! read once per logical request so that all slots of that request observe the
//! same calendar day, and so tests can pin it with a [`FixedClock`].

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Supplies the current calendar date.
pub trait ClockSource: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// A clock that always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl ClockSource for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The zone the crime data set is recorded in.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;

/// Wall clock, with "today" taken in a fixed IANA timezone.
///
/// The day boundary follows local midnight in `timezone`, not UTC midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    pub timezone: Tz,
}

impl SystemClock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

impl ClockSource for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}

impl<C: ClockSource + ?Sized> ClockSource for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: ClockSource + ?Sized> ClockSource for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let clock = FixedClock(day);
        assert_eq!(clock.today(), day);
        assert_eq!(clock.today(), day);
    }

    #[test]
    fn test_system_clock_defaults_to_new_york() {
        assert_eq!(SystemClock::default().timezone, chrono_tz::America::New_York);
    }

    #[test]
    fn test_system_clock_tracks_local_day() {
        // Kiritimati (UTC+14) and Pago Pago (UTC-11) are never more than one day
        // away from the UTC date.
        let utc_today = Utc::now().date_naive();
        for tz in [chrono_tz::Pacific::Kiritimati, chrono_tz::Pacific::Pago_Pago] {
            let local = SystemClock::new(tz).today();
            let diff = (local - utc_today).num_days().abs();
            assert!(diff <= 1, "{tz}: {local} vs {utc_today}");
        }
    }

    #[test]
    fn test_boxed_clock_delegates() {
        let day = NaiveDate::from_ymd_opt(2017, 6, 5).unwrap();
        let clock: Box<dyn ClockSource> = Box::new(FixedClock(day));
        assert_eq!(clock.today(), day);
    }
}
