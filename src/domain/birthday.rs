//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// `strftime` pattern used both for parsing and for display.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A contact's date of birth.
///
/// Parsed from the strict `DD.MM.YYYY` shape and stored as a calendar
/// date. Both a malformed shape and a date that does not exist (such as
/// `31.02.2020`) are rejected with the same error.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("15.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.03.1990");
/// assert!(Birthday::parse("15/03/1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the shape does not
    /// match or the date is not a real calendar date.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_REGEX.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// The stored date of birth.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in the given year.
    ///
    /// February 29 falls on February 28 in non-leap years. Returns `None`
    /// only when `year` is outside the range chrono can represent.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day() - 1))
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serde support - serialize in the same DD.MM.YYYY shape users type
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::parse("15.03.1990").unwrap();
        assert_eq!(birthday.date(), ymd(1990, 3, 15));
    }

    #[test]
    fn test_birthday_rejects_bad_shape() {
        assert!(Birthday::parse("15/03/2020").is_err());
        assert!(Birthday::parse("5.03.2020").is_err());
        assert!(Birthday::parse("15.3.2020").is_err());
        assert!(Birthday::parse("15.03.20").is_err());
        assert!(Birthday::parse("2020.03.15").is_err());
        assert!(Birthday::parse(" 15.03.2020").is_err());
        assert!(Birthday::parse("").is_err());
    }

    #[test]
    fn test_birthday_rejects_unreal_dates() {
        assert!(Birthday::parse("31.02.2020").is_err());
        assert!(Birthday::parse("29.02.2023").is_err());
        assert!(Birthday::parse("31.04.2024").is_err());
        assert!(Birthday::parse("00.01.2024").is_err());
        assert!(Birthday::parse("01.13.2024").is_err());
        assert!(Birthday::parse("29.02.2024").is_ok());
    }

    #[test]
    fn test_birthday_errors_share_message() {
        let shape = Birthday::parse("15/03/2020").unwrap_err();
        let date = Birthday::parse("31.02.2020").unwrap_err();
        assert_eq!(shape.to_string(), date.to_string());
        assert_eq!(shape.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }

    #[test]
    fn test_birthday_from_str() {
        let birthday: Birthday = "01.01.2000".parse().unwrap();
        assert_eq!(birthday.date(), ymd(2000, 1, 1));
    }

    #[test]
    fn test_birthday_in_year() {
        let birthday = Birthday::parse("15.06.1990").unwrap();
        assert_eq!(birthday.in_year(2024), Some(ymd(2024, 6, 15)));
    }

    #[test]
    fn test_leap_day_clamps_to_feb_28() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        assert_eq!(birthday.in_year(2025), Some(ymd(2025, 2, 28)));
        assert_eq!(birthday.in_year(2028), Some(ymd(2028, 2, 29)));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::parse("07.11.1985").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"07.11.1985\"");

        let parsed: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"1985-11-07\"");
        assert!(result.is_err());
    }
}
