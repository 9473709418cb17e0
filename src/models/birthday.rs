//! Birthday model
//!
//! Birthdays are entered and displayed as `DD.MM.YYYY` and kept internally as
//! a [`NaiveDate`].

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// chrono format string for birthdays
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's date of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from a strict `DD.MM.YYYY` string
    ///
    /// chrono accepts unpadded fields, so the shape is checked first: exactly
    /// ten characters, dots at positions 2 and 5, digits everywhere else.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidBirthday(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 10 {
            return Err(invalid());
        }
        let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        });
        if !shape_ok {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(s, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Wrap an existing date
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Get the underlying date
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in the given year
    ///
    /// 29 February falls back to 28 February in non-leap years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day() - 1))
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

/// Validate a birthday string
pub fn validate_birthday(s: &str) -> Result<Birthday, ValidationError> {
    Birthday::parse(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let bday = validate_birthday("03.06.1990").unwrap();
        assert_eq!(bday.date(), NaiveDate::from_ymd_opt(1990, 6, 3).unwrap());
        assert_eq!(bday.to_string(), "03.06.1990");
    }

    #[test]
    fn test_render_then_parse_round_trip() {
        let mut date = NaiveDate::from_ymd_opt(1899, 12, 25).unwrap();
        let end = NaiveDate::from_ymd_opt(2101, 1, 10).unwrap();
        while date < end {
            let rendered = Birthday::from_date(date).to_string();
            assert_eq!(validate_birthday(&rendered).unwrap().date(), date);
            date += chrono::Duration::days(37);
        }
    }

    #[test]
    fn test_unpadded_rejected() {
        assert!(validate_birthday("3.6.1990").is_err());
        assert!(validate_birthday("03.6.1990").is_err());
        assert!(validate_birthday("03.06.90").is_err());
    }

    #[test]
    fn test_wrong_separators_rejected() {
        assert!(validate_birthday("03/06/1990").is_err());
        assert!(validate_birthday("1990-06-03").is_err());
        assert!(validate_birthday("03.06.1990 ").is_err());
    }

    #[test]
    fn test_impossible_dates_rejected() {
        assert!(validate_birthday("31.02.2000").is_err());
        assert!(validate_birthday("29.02.2023").is_err());
        assert!(validate_birthday("00.01.2000").is_err());
        assert!(validate_birthday("15.13.2000").is_err());
        assert!(validate_birthday("29.02.2024").is_ok());
    }

    #[test]
    fn test_error_carries_input() {
        assert_eq!(
            validate_birthday("bad"),
            Err(ValidationError::InvalidBirthday("bad".into()))
        );
    }

    #[test]
    fn test_in_year() {
        let bday = validate_birthday("15.08.1985").unwrap();
        assert_eq!(bday.in_year(2024), NaiveDate::from_ymd_opt(2024, 8, 15));

        let leap = validate_birthday("29.02.2000").unwrap();
        assert_eq!(leap.in_year(2024), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(leap.in_year(2023), NaiveDate::from_ymd_opt(2023, 2, 28));
    }

    #[test]
    fn test_serde_uses_display_format() {
        let bday = validate_birthday("01.01.2001").unwrap();
        assert_eq!(serde_json::to_string(&bday).unwrap(), r#""01.01.2001""#);
        let back: Birthday = serde_json::from_str(r#""01.01.2001""#).unwrap();
        assert_eq!(back, bday);
    }
}
