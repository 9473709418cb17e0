//! Upcoming birthday window
//!
//! A birthday is upcoming when its next anniversary, counted from the
//! reference date, falls inside an inclusive window of whole days starting at
//! that date.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::Birthday;

/// Default window length in days, today included
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside the window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,
    /// The anniversary date inside the window (not the date of birth)
    pub date: NaiveDate,
}

/// The next anniversary of `birthday` on or after `today`
///
/// Anniversaries that already passed this year roll over to next year, so a
/// December reference date still sees January birthdays.
pub fn next_anniversary(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.in_year(today.year())?;
    if this_year >= today {
        Some(this_year)
    } else {
        birthday.in_year(today.year() + 1)
    }
}

/// The anniversary inside `[today, today + days - 1]`, if any
///
/// A window reaching past the last representable date has no upper bound.
pub fn anniversary_within(birthday: &Birthday, today: NaiveDate, days: u32) -> Option<NaiveDate> {
    if days == 0 {
        return None;
    }
    let last_day = today.checked_add_signed(Duration::days(i64::from(days) - 1));
    next_anniversary(birthday, today)
        .filter(|date| last_day.map_or(true, |last| *date <= last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bday(s: &str) -> Birthday {
        Birthday::parse(s).unwrap()
    }

    #[test]
    fn test_next_anniversary_same_year() {
        assert_eq!(
            next_anniversary(&bday("03.06.1990"), date(2024, 6, 1)),
            Some(date(2024, 6, 3))
        );
    }

    #[test]
    fn test_next_anniversary_today() {
        assert_eq!(
            next_anniversary(&bday("01.06.1990"), date(2024, 6, 1)),
            Some(date(2024, 6, 1))
        );
    }

    #[test]
    fn test_next_anniversary_rolls_over() {
        assert_eq!(
            next_anniversary(&bday("28.05.1991"), date(2024, 6, 1)),
            Some(date(2025, 5, 28))
        );
    }

    #[test]
    fn test_window_bounds() {
        let today = date(2024, 6, 1);
        assert!(anniversary_within(&bday("01.06.1990"), today, 7).is_some());
        assert!(anniversary_within(&bday("07.06.1990"), today, 7).is_some());
        assert!(anniversary_within(&bday("08.06.1990"), today, 7).is_none());
        assert!(anniversary_within(&bday("31.05.1990"), today, 7).is_none());
    }

    #[test]
    fn test_window_across_new_year() {
        assert_eq!(
            anniversary_within(&bday("02.01.1985"), date(2024, 12, 29), 7),
            Some(date(2025, 1, 2))
        );
    }

    #[test]
    fn test_zero_day_window_is_empty() {
        assert_eq!(
            anniversary_within(&bday("01.06.1990"), date(2024, 6, 1), 0),
            None
        );
    }

    #[test]
    fn test_window_past_calendar_limit() {
        assert_eq!(
            anniversary_within(&bday("03.06.1990"), date(2024, 6, 1), u32::MAX),
            Some(date(2024, 6, 3))
        );
        assert_eq!(
            anniversary_within(&bday("31.05.1990"), date(2024, 6, 1), u32::MAX),
            Some(date(2025, 5, 31))
        );
    }

    #[test]
    fn test_leap_day_in_common_year() {
        assert_eq!(
            anniversary_within(&bday("29.02.2000"), date(2023, 2, 25), 7),
            Some(date(2023, 2, 28))
        );
    }
}
