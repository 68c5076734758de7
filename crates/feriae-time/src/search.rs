//! Weekday search within a day window of a month.
//!
//! Implements the "first matching weekday in `[start_day, end_day]`"
//! rule used by holidays such as Finland's St. John's Day (the Saturday
//! between June 20 and 26).  A 7-day window contains exactly one of each
//! weekday, so a correctly configured search always finds a match; the
//! empty-result case is still handled as a hard error rather than
//! assumed away.

use chrono::{Datelike, NaiveDate, Weekday};
use feriae_core::errors::{Error, Result};
use feriae_core::{ensure, fail};

/// Return the first date in `year`-`month` whose day-of-month lies in
/// `start_day..=end_day` and whose weekday equals `weekday`.
///
/// Days are scanned in ascending order.  Errors:
/// * `Precondition` if the window is empty or no day matches (for a
///   window spanning 7 or more days the latter cannot occur);
/// * `Date` if the window names days that do not exist in the month.
pub fn weekday_in_window(
    year: i32,
    month: u32,
    start_day: u32,
    end_day: u32,
    weekday: Weekday,
) -> Result<NaiveDate> {
    ensure!(
        start_day >= 1 && start_day <= end_day,
        "day window {start_day}..={end_day} is empty"
    );
    for day in start_day..=end_day {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            Error::Date(format!("no such date: {year}-{month:02}-{day:02}"))
        })?;
        if date.weekday() == weekday {
            return Ok(date);
        }
    }
    fail!("no {weekday} in {year}-{month:02} between day {start_day} and {end_day}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn saturday_in_midsummer_window() {
        // June 23, 1956 was a Saturday.
        assert_eq!(
            weekday_in_window(1956, 6, 20, 26, Weekday::Sat).unwrap(),
            date(1956, 6, 23)
        );
        // June 26, 1954 was a Saturday (last day of the window).
        assert_eq!(
            weekday_in_window(1954, 6, 20, 26, Weekday::Sat).unwrap(),
            date(1954, 6, 26)
        );
    }

    #[test]
    fn every_weekday_found_in_seven_day_window() {
        for weekday in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            let found = weekday_in_window(2024, 6, 20, 26, weekday).unwrap();
            assert_eq!(found.weekday(), weekday);
            assert!((20..=26).contains(&found.day()));
        }
    }

    #[test]
    fn ascending_scan_returns_first_match() {
        // A 14-day window contains two Saturdays; the earlier one wins.
        let found = weekday_in_window(2024, 6, 1, 14, Weekday::Sat).unwrap();
        assert_eq!(found, date(2024, 6, 1));
    }

    #[test]
    fn empty_window_is_a_precondition_error() {
        let err = weekday_in_window(2024, 6, 26, 20, Weekday::Sat).unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
    }

    #[test]
    fn nonexistent_day_is_a_date_error() {
        let err = weekday_in_window(2023, 2, 27, 31, Weekday::Sat).unwrap_err();
        assert!(matches!(err, Error::Date(_)));
    }

    #[test]
    fn too_narrow_window_can_miss() {
        // June 23–25, 2024 are Sun–Tue; no Saturday inside.
        let err = weekday_in_window(2024, 6, 23, 25, Weekday::Sat).unwrap_err();
        assert!(matches!(err, Error::Runtime(_)));
    }
}
