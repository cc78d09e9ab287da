use chrono::{Datelike, Duration, NaiveDate, Weekday};
use cincy_resolver::{
    resolve_absolute_date, resolve_date_token, resolve_location, resolve_relative_phrase,
    LocationCatalog, RelativePhrase, ResolveError,
};
use proptest::prelude::*;

fn any_day() -> impl Strategy<Value = NaiveDate> {
    // 1990-01-01 .. 2100-12-31
    (0i64..40_541).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Duration::days(offset)
    })
}

fn any_phrase() -> impl Strategy<Value = RelativePhrase> {
    prop::sample::select(RelativePhrase::ALL.to_vec())
}

proptest! {
    #[test]
    fn relative_ranges_are_closed_and_in_the_past(today in any_day(), phrase in any_phrase()) {
        match resolve_relative_phrase(phrase.as_str(), today) {
            Ok(range) => {
                prop_assert!(range.start() <= range.end());
                prop_assert!(range.end() <= today);
            }
            Err(ResolveError::FutureDateRejected { .. }) => {
                prop_assert_eq!(phrase, RelativePhrase::LastWeekend);
                prop_assert_eq!(today.weekday(), Weekday::Sat);
            }
            Err(other) => prop_assert!(false, "unexpected failure: {other}"),
        }
    }

    #[test]
    fn last_week_is_a_full_sunday_week(today in any_day()) {
        let range = resolve_relative_phrase("last week", today).unwrap();
        prop_assert_eq!(range.start().weekday(), Weekday::Sun);
        prop_assert_eq!(range.num_days(), 7);
        prop_assert!((today - range.end()).num_days() >= 1);
        prop_assert!((today - range.end()).num_days() <= 7);
    }

    #[test]
    fn full_dates_round_trip(today in any_day(), back in 0i64..20_000) {
        let day = today - Duration::days(back);
        let token = day.format("%Y-%m-%d").to_string();
        prop_assert_eq!(resolve_absolute_date(&token, today).unwrap(), day);
        let range = resolve_date_token(&token, today).unwrap();
        prop_assert_eq!(range.start(), day);
        prop_assert_eq!(range.end(), day);
    }

    #[test]
    fn future_days_are_rejected(today in any_day(), ahead in 1i64..5_000) {
        let day = today + Duration::days(ahead);
        let token = day.format("%Y-%m-%d").to_string();
        let is_future_rejection = matches!(
            resolve_date_token(&token, today),
            Err(ResolveError::FutureDateRejected { .. })
        );
        prop_assert!(is_future_rejection);
    }

    #[test]
    fn iso_weeks_resolve_to_mondays(year in 1990i32..2100, week in 1u32..=52) {
        let token = format!("{year}-W{week:02}");
        let today = NaiveDate::from_ymd_opt(2101, 1, 1).unwrap();
        let day = resolve_absolute_date(&token, today).unwrap();
        prop_assert_eq!(day.weekday(), Weekday::Mon);
        prop_assert_eq!(day.iso_week().week(), week);
    }

    #[test]
    fn location_lookup_ignores_case_and_spacing(
        index in 0usize..61,
        upper in any::<bool>(),
        pad in 1usize..4,
    ) {
        let catalog = LocationCatalog::cincinnati();
        let entry = &catalog.entries()[index % catalog.len()];
        let spaced = entry
            .as_str()
            .split(|c: char| c == ' ' || c == '-')
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(&" ".repeat(pad));
        let query = if upper { spaced.to_uppercase() } else { spaced.to_lowercase() };

        let found = resolve_location(&query, catalog).unwrap();
        // First match under normalization; near-duplicates resolve to the earlier entry.
        let first = catalog.find(entry.as_str()).unwrap();
        prop_assert_eq!(&found, first);
    }
}
