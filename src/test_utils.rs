//! Shared constructors for tests.

use chrono::NaiveDate;

use crate::BirthDate;

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date must be valid")
}

pub fn birth(year: i32, month: u32, day: u32) -> BirthDate {
    BirthDate::new(year, month, day).expect("test birth date must be valid")
}
