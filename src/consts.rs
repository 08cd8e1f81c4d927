/// Number of months in a year, also the length of both zodiac cycles
pub const MONTHS_PER_YEAR: u32 = 12;

/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Days in each month used by the age breakdown (index 0 is unused, months are 1-indexed).
/// February is always 28 days; the breakdown never applies a leap-year correction.
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (never 29 here)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Number of signs in each zodiac
pub const SIGNS_PER_ZODIAC: usize = 12;

/// First day of the month that belongs to the next western sign (index 0 = January).
pub const WESTERN_PIVOT_DAYS: [u32; 12] = [21, 20, 22, 21, 22, 22, 24, 24, 24, 24, 23, 23];

/// Years congruent to this value modulo 12 are Rat years
pub const CHINESE_EPOCH_OFFSET: i32 = 4;

/// Age from which a person counts as an adult
pub const ADULT_AGE: i32 = 18;

/// Youngest accepted age (inclusive)
pub const MIN_AGE: i32 = 0;
/// Oldest accepted age (inclusive)
pub const MAX_AGE: i32 = 135;

/// Email suffix rejected by the default validation policy
pub const DISALLOWED_EMAIL_SUFFIX: &str = ".ru";

/// Accepted email shape: `local@domain.tld` with an alphabetic TLD of two or more letters
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Month-first format separator (legacy US format)
pub const MONTH_FIRST_SEPARATOR: char = '/';
