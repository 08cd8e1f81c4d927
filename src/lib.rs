//! Facts derived from a person's birth date.
//!
//! Given a birth date and a reference date ("today"), this crate computes the
//! age in completed years, a years/months/days breakdown, whether the
//! reference date is the birthday, and the Western and Chinese zodiac signs.
//! Every computation is a pure function of those two dates.
//!
//! ```
//! use birth_facts::{BirthDate, ChineseZodiac, DateFacts, WesternZodiac};
//! use chrono::NaiveDate;
//!
//! let birth: BirthDate = "2000-05-10".parse().unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
//! let facts = DateFacts::compute(birth, today);
//!
//! assert_eq!(facts.age.years, 24);
//! assert!(facts.age.is_birthday_today);
//! assert_eq!(facts.western, WesternZodiac::Taurus);
//! assert_eq!(facts.chinese, ChineseZodiac::Dragon);
//! ```
//!
//! [`UserProfile`] keeps these facts up to date for a user record and
//! notifies observers when they change. [`ValidationPolicy`] checks the age
//! range and email address that accompany the birth date.

mod age;
mod consts;
mod prelude;
mod profile;
mod types;
mod validation;
mod zodiac;

#[cfg(test)]
mod test_utils;

pub use age::{AgeBreakdown, AgeFacts, anniversary_in, compute_age, formatted_age, is_birthday_today};
pub use consts::*;
pub use profile::{ProfileField, ProfileObserver, SubscriptionId, UserProfile};
pub use types::BirthDate;
pub use validation::{ValidationError, ValidationPolicy};
pub use zodiac::{
    ChineseZodiac, WesternZodiac, chinese_zodiac_sign, describe_chinese, describe_western,
    western_zodiac_sign,
};

use crate::prelude::*;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {_0}")]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u32),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Unknown zodiac sign: {_0}")]
    UnknownSign(String),
}

impl std::error::Error for ParseError {}

/// All facts derived from one birth date at one reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateFacts {
    pub age:     AgeFacts,
    pub western: WesternZodiac,
    pub chinese: ChineseZodiac,
}

impl DateFacts {
    /// Computes the facts for `birth` as seen on `today`
    pub fn compute(birth: BirthDate, today: NaiveDate) -> Self {
        let birth = birth.date();
        Self {
            age:     AgeFacts::compute(birth, today),
            western: western_zodiac_sign(birth),
            chinese: chinese_zodiac_sign(birth),
        }
    }

    /// Computes the facts for `birth` as seen on the current local date
    pub fn as_of_today(birth: BirthDate) -> Self {
        Self::compute(birth, BirthDate::today().date())
    }

    pub const fn is_adult(&self) -> bool {
        self.age.years >= ADULT_AGE
    }
}
