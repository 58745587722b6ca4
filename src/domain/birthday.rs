//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format used everywhere a birthday crosses the user boundary.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// Accepts only `DD.MM.YYYY` input and stores a real calendar date; the
/// calendar check is delegated to chrono, so `29.02.2020` parses (leap
/// year) while `30.02.2020` does not.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("25.12.1990").unwrap();
/// assert_eq!(birthday.to_string(), "25.12.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the input does not match
    /// the format or names a date that does not exist.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(value.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
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

    #[test]
    fn test_birthday_round_trips() {
        let birthday = Birthday::new("25.12.1990").unwrap();
        assert_eq!(birthday.to_string(), "25.12.1990");
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 12, 25).unwrap()
        );
    }

    #[test]
    fn test_birthday_rejects_bad_format() {
        assert!(Birthday::new("1990-12-25").is_err());
        assert!(Birthday::new("25/12/1990").is_err());
        assert!(Birthday::new("25.12").is_err());
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("not a date").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert_eq!(
            Birthday::new("30.02.2020"),
            Err(ValidationError::InvalidDate("30.02.2020".to_string()))
        );
        assert!(Birthday::new("31.04.2021").is_err());
        assert!(Birthday::new("29.02.2021").is_err()); // not a leap year
    }

    #[test]
    fn test_birthday_accepts_leap_day() {
        let birthday = Birthday::new("29.02.2020").unwrap();
        assert_eq!(birthday.to_string(), "29.02.2020");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("01.05.1985").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"01.05.1985\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"30.02.2020\"");
        assert!(result.is_err());
    }
}
