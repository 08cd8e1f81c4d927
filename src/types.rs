use crate::consts::{DATE_SEPARATOR, MAX_MONTH, MONTH_FIRST_SEPARATOR};
use crate::{ParseError, prelude::*};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A person's date of birth: a valid calendar date with no time component.
///
/// Invalid dates are rejected on construction, so every derived fact can
/// treat a `BirthDate` as well formed. No age range is enforced here; see
/// [`crate::ValidationPolicy`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, From, Into)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Creates a birth date from its calendar components
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` for a month outside 1-12,
    /// `ParseError::InvalidYear` for a year chrono cannot represent and
    /// `ParseError::InvalidDay` for a day that does not exist in that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ParseError> {
        if !(1..=MAX_MONTH).contains(&month) {
            return Err(ParseError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(ParseError::InvalidYear(year));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(ParseError::InvalidDay { year, month, day })
    }

    /// The current local date
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Returns the underlying calendar date
    #[inline]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    fn parse_i32(s: &str) -> Result<i32, ParseError> {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_u32(s: &str) -> Result<u32, ParseError> {
        s.parse::<u32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// `YYYY-MM-DD`, with the year negated when `negative` is set
    fn parse_iso(parts: &[&str], negative: bool) -> Result<Self, ParseError> {
        let [year, month, day] = parts else {
            return Err(ParseError::InvalidFormat(parts.join("-")));
        };
        let year = Self::parse_i32(year)?;
        Self::new(
            if negative { -year } else { year },
            Self::parse_u32(month)?,
            Self::parse_u32(day)?,
        )
    }

    /// `MM/DD/YYYY`
    fn parse_month_first(parts: &[&str]) -> Result<Self, ParseError> {
        let [month, day, year] = parts else {
            return Err(ParseError::InvalidFormat(parts.join("/")));
        };
        Self::new(
            Self::parse_i32(year)?,
            Self::parse_u32(month)?,
            Self::parse_u32(day)?,
        )
    }
}

impl Default for BirthDate {
    fn default() -> Self {
        Self::today()
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for BirthDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // A leading '-' is the sign of a year before year 0, not a separator.
        let (negative, trimmed) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(ParseError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
            )));
        }

        let separator = if has_hyphen {
            DATE_SEPARATOR
        } else if has_slash {
            MONTH_FIRST_SEPARATOR
        } else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected 2 {separator} separators, found {}",
                parts.len() - 1
            )));
        }

        if has_hyphen {
            Self::parse_iso(&parts, negative)
        } else if negative {
            Err(ParseError::InvalidFormat(s.trim().to_owned()))
        } else {
            Self::parse_month_first(&parts)
        }
    }
}

impl serde::Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
