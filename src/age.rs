//! age.rs
//!
//! Age facts derived from a birth date and a reference date ("today"):
//! completed years, a years/months/days breakdown, and whether the
//! reference date is the birthday.
//!
//! The breakdown is table driven. It walks the fixed `DAYS_IN_MONTH` table,
//! in which February always has 28 days, rather than the real calendar, so
//! its month and day figures are approximate around leap years and month
//! ends. Callers that display it rely on exactly this output.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_IN_MONTH, DECEMBER, JANUARY, MONTHS_PER_YEAR};
use crate::prelude::*;

/// Years, months and days elapsed since birth, as rendered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{years} years,\n{months} months,\n{days} days")]
pub struct AgeBreakdown {
    pub years:  i32,
    pub months: u32,
    pub days:   i32,
}

/// Everything age related that follows from a birth date and a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeFacts {
    pub years:             i32,
    pub months:            u32,
    pub days:              i32,
    pub is_birthday_today: bool,
}

impl AgeFacts {
    pub fn compute(birthdate: NaiveDate, today: NaiveDate) -> Self {
        let AgeBreakdown {
            years,
            months,
            days,
        } = formatted_age(birthdate, today);
        Self {
            years,
            months,
            days,
            is_birthday_today: is_birthday_today(birthdate, today),
        }
    }

    pub const fn breakdown(&self) -> AgeBreakdown {
        AgeBreakdown {
            years:  self.years,
            months: self.months,
            days:   self.days,
        }
    }
}

/// Whole years completed between `birthdate` and `today`.
///
/// One less than the year difference when this year's anniversary is still
/// ahead. A birth date after `today` gives a negative age; range checks
/// belong to [`crate::ValidationPolicy`].
pub fn compute_age(birthdate: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birthdate.year();
    if (birthdate.month(), birthdate.day()) > (today.month(), today.day()) {
        years - 1
    } else {
        years
    }
}

/// True when `today` has the birth month and day, and the birth year is not in the future.
pub fn is_birthday_today(birthdate: NaiveDate, today: NaiveDate) -> bool {
    birthdate.month() == today.month()
        && birthdate.day() == today.day()
        && birthdate.year() <= today.year()
}

/// The anniversary of `birthdate` in `year`.
///
/// February 29 births fall on February 28 in common years. Returns `None`
/// only when `year` is outside chrono's supported range.
pub fn anniversary_in(birthdate: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthdate.with_year(year).or_else(|| {
        NaiveDate::from_ymd_opt(year, birthdate.month(), birthdate.day().saturating_sub(1))
    })
}

/// Table-driven years/months/days breakdown of the age at `today`.
///
/// 1. `years` is [`compute_age`].
/// 2. `days` starts as the real number of days since the last anniversary.
/// 3. `months` counts birth month to today's month, wrapping once the
///    anniversary is still ahead.
/// 4. If today's day of month is before the birth day, one month is
///    borrowed: `months` drops by one and `days` gains the previous
///    month's table length minus the birth day.
/// 5. The table length of each of the `months` months starting at the birth
///    month is subtracted from `days`.
#[allow(clippy::cast_possible_truncation)]
pub fn formatted_age(birthdate: NaiveDate, today: NaiveDate) -> AgeBreakdown {
    let years = compute_age(birthdate, today);

    // An unrepresentable anniversary counts as no elapsed days.
    let mut days = anniversary_in(birthdate, birthdate.year() + years)
        .map_or(0, |last| today.signed_duration_since(last).num_days());

    let ahead = (today.month(), today.day()) < (birthdate.month(), birthdate.day());
    let mut months = if ahead {
        MONTHS_PER_YEAR - (birthdate.month() - today.month())
    } else {
        today.month() - birthdate.month()
    };

    if today.day() < birthdate.day() {
        months -= 1;
        let previous_month = if today.month() == JANUARY {
            DECEMBER
        } else {
            today.month() - 1
        };
        days += i64::from(DAYS_IN_MONTH[previous_month as usize]) - i64::from(birthdate.day());
    }

    for offset in 0..months {
        days -= i64::from(table_days_in_month(birthdate.month() + offset));
    }

    AgeBreakdown {
        years,
        months,
        // Bounded by roughly one year of days.
        days: days as i32,
    }
}

/// Table length of a month, where `month` may run past December and wraps.
const fn table_days_in_month(month: u32) -> u32 {
    DAYS_IN_MONTH[((month - 1) % MONTHS_PER_YEAR + 1) as usize]
}
