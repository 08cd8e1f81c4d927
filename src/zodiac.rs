//! Western (sun) and Chinese zodiac signs.
//!
//! Both zodiacs are 12-sign cycles. Western signs follow the month with a
//! fixed pivot day per month; Chinese signs follow the Gregorian year alone,
//! with no lunar new year adjustment.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ParseError;
use crate::consts::{CHINESE_EPOCH_OFFSET, SIGNS_PER_ZODIAC, WESTERN_PIVOT_DAYS};

/// Western zodiac sign, numbered from Capricorn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WesternZodiac {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

/// Chinese zodiac sign, numbered from Rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChineseZodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl WesternZodiac {
    pub const ALL: [Self; SIGNS_PER_ZODIAC] = [
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
    ];

    const NAMES: [&'static str; SIGNS_PER_ZODIAC] = [
        "Capricorn",
        "Aquarius",
        "Pisces",
        "Aries",
        "Taurus",
        "Gemini",
        "Cancer",
        "Leo",
        "Virgo",
        "Libra",
        "Scorpio",
        "Sagittarius",
    ];

    const DESCRIPTIONS: [&'static str; SIGNS_PER_ZODIAC] = [
        "Capricorns are disciplined and responsible.",
        "Aquarians are innovative and open-minded.",
        "Pisces individuals are compassionate and artistic.",
        "Aries are known for their courage and determination.",
        "Taurus individuals are reliable and practical.",
        "Geminis are known for their adaptability and communication skills.",
        "Cancer individuals are nurturing and empathetic.",
        "Leos are often confident and generous.",
        "Virgos are detail-oriented and practical.",
        "Libras value harmony and cooperation.",
        "Scorpios are passionate and resourceful.",
        "Sagittarians are adventurous and optimistic.",
    ];

    /// Position in the cycle, Capricorn = 0
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Sign at `index`, wrapping past Sagittarius back to Capricorn
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % SIGNS_PER_ZODIAC]
    }

    pub const fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }

    /// One-line character description of the sign
    pub const fn description(self) -> &'static str {
        Self::DESCRIPTIONS[self.index()]
    }
}

impl ChineseZodiac {
    pub const ALL: [Self; SIGNS_PER_ZODIAC] = [
        Self::Rat,
        Self::Ox,
        Self::Tiger,
        Self::Rabbit,
        Self::Dragon,
        Self::Snake,
        Self::Horse,
        Self::Goat,
        Self::Monkey,
        Self::Rooster,
        Self::Dog,
        Self::Pig,
    ];

    const NAMES: [&'static str; SIGNS_PER_ZODIAC] = [
        "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
        "Dog", "Pig",
    ];

    const DESCRIPTIONS: [&'static str; SIGNS_PER_ZODIAC] = [
        "Rats are quick-witted and resourceful.",
        "Oxen are diligent and reliable.",
        "Tigers are brave and confident.",
        "Rabbits are gentle and compassionate.",
        "Dragons are ambitious and passionate.",
        "Snakes are wise and intuitive.",
        "Horses are energetic and free-spirited.",
        "Goats are kind-hearted and artistic.",
        "Monkeys are clever and playful.",
        "Roosters are confident and honest.",
        "Dogs are loyal and responsible.",
        "Pigs are diligent and compassionate.",
    ];

    /// Position in the cycle, Rat = 0
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Sign at `index`, wrapping past Pig back to Rat
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % SIGNS_PER_ZODIAC]
    }

    pub const fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }

    /// One-line character description of the sign
    pub const fn description(self) -> &'static str {
        Self::DESCRIPTIONS[self.index()]
    }
}

/// Western sign for a date, from its month and day only.
///
/// A day on or after the month's pivot day belongs to the next sign.
pub fn western_zodiac_sign(date: NaiveDate) -> WesternZodiac {
    let month_index = date.month0() as usize;
    let offset = usize::from(date.day() >= WESTERN_PIVOT_DAYS[month_index]);
    WesternZodiac::from_index(month_index + offset)
}

/// Chinese sign for a date, from its year only.
///
/// Years before the epoch offset (including year 0 and negative years)
/// wrap around the cycle, so year 3 is a Pig year.
pub fn chinese_zodiac_sign(date: NaiveDate) -> ChineseZodiac {
    let cycle = SIGNS_PER_ZODIAC as i32;
    let index = (date.year() - CHINESE_EPOCH_OFFSET).rem_euclid(cycle);
    ChineseZodiac::from_index(index.unsigned_abs() as usize)
}

/// Description for a western sign given by name, in any case.
pub fn describe_western(name: &str) -> Option<&'static str> {
    name.parse::<WesternZodiac>()
        .ok()
        .map(WesternZodiac::description)
}

/// Description for a Chinese sign given by name, in any case.
pub fn describe_chinese(name: &str) -> Option<&'static str> {
    name.parse::<ChineseZodiac>()
        .ok()
        .map(ChineseZodiac::description)
}

impl fmt::Display for WesternZodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ChineseZodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WesternZodiac {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|sign| sign.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownSign(trimmed.to_owned()))
    }
}

impl FromStr for ChineseZodiac {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|sign| sign.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownSign(trimmed.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ymd;

    #[test]
    fn test_pivot_boundaries_every_month() {
        for month in 1..=12u32 {
            let pivot = WESTERN_PIVOT_DAYS[(month - 1) as usize];
            let before = western_zodiac_sign(ymd(2023, month, pivot - 1));
            let on = western_zodiac_sign(ymd(2023, month, pivot));

            assert_eq!(before.index(), (month - 1) as usize, "month {month} before pivot");
            assert_eq!(on.index(), month as usize % 12, "month {month} on pivot");
        }
    }

    #[test]
    fn test_western_known_dates() {
        struct TestCase {
            date:     NaiveDate,
            expected: WesternZodiac,
        }

        let cases = [
            TestCase {
                date:     ymd(2000, 1, 1),
                expected: WesternZodiac::Capricorn,
            },
            TestCase {
                date:     ymd(2000, 1, 20),
                expected: WesternZodiac::Capricorn,
            },
            TestCase {
                date:     ymd(2000, 1, 21),
                expected: WesternZodiac::Aquarius,
            },
            TestCase {
                date:     ymd(2000, 2, 29),
                expected: WesternZodiac::Pisces,
            },
            TestCase {
                date:     ymd(2000, 3, 20),
                expected: WesternZodiac::Pisces,
            },
            TestCase {
                date:     ymd(2000, 3, 21),
                expected: WesternZodiac::Pisces,
            },
            TestCase {
                date:     ymd(2000, 3, 22),
                expected: WesternZodiac::Aries,
            },
            TestCase {
                date:     ymd(2000, 5, 10),
                expected: WesternZodiac::Taurus,
            },
            TestCase {
                date:     ymd(2000, 12, 22),
                expected: WesternZodiac::Sagittarius,
            },
            TestCase {
                date:     ymd(2000, 12, 23),
                expected: WesternZodiac::Capricorn,
            },
            TestCase {
                date:     ymd(2000, 12, 31),
                expected: WesternZodiac::Capricorn,
            },
        ];

        for case in &cases {
            assert_eq!(western_zodiac_sign(case.date), case.expected, "{}", case.date);
        }
    }

    #[test]
    fn test_western_ignores_year() {
        assert_eq!(
            western_zodiac_sign(ymd(1850, 7, 30)),
            western_zodiac_sign(ymd(2150, 7, 30))
        );
    }

    #[test]
    fn test_chinese_known_years() {
        for (year, expected) in [
            (2024, ChineseZodiac::Dragon),
            (2023, ChineseZodiac::Rabbit),
            (2020, ChineseZodiac::Rat),
            (2019, ChineseZodiac::Pig),
            (1900, ChineseZodiac::Rat),
            (4, ChineseZodiac::Rat),
        ] {
            assert_eq!(chinese_zodiac_sign(ymd(year, 6, 1)), expected, "year {year}");
        }
    }

    #[test]
    fn test_chinese_years_before_epoch_offset() {
        assert_eq!(chinese_zodiac_sign(ymd(3, 1, 1)), ChineseZodiac::Pig);
        assert_eq!(chinese_zodiac_sign(ymd(1, 1, 1)), ChineseZodiac::Rooster);
        assert_eq!(chinese_zodiac_sign(ymd(0, 1, 1)), ChineseZodiac::Monkey);
        assert_eq!(chinese_zodiac_sign(ymd(-1, 1, 1)), ChineseZodiac::Goat);
    }

    #[test]
    fn test_chinese_ignores_month_and_day() {
        assert_eq!(chinese_zodiac_sign(ymd(2024, 1, 1)), chinese_zodiac_sign(ymd(2024, 12, 31)));
    }

    #[test]
    fn test_index_round_trip() {
        for (i, sign) in WesternZodiac::ALL.into_iter().enumerate() {
            assert_eq!(sign.index(), i);
            assert_eq!(WesternZodiac::from_index(i), sign);
        }
        for (i, sign) in ChineseZodiac::ALL.into_iter().enumerate() {
            assert_eq!(sign.index(), i);
            assert_eq!(ChineseZodiac::from_index(i), sign);
        }
        assert_eq!(WesternZodiac::from_index(12), WesternZodiac::Capricorn);
        assert_eq!(ChineseZodiac::from_index(25), ChineseZodiac::Ox);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(WesternZodiac::Sagittarius.to_string(), "Sagittarius");
        assert_eq!(ChineseZodiac::Rooster.to_string(), "Rooster");

        assert_eq!("aries".parse::<WesternZodiac>().unwrap(), WesternZodiac::Aries);
        assert_eq!(" LEO ".parse::<WesternZodiac>().unwrap(), WesternZodiac::Leo);
        assert_eq!("dRaGoN".parse::<ChineseZodiac>().unwrap(), ChineseZodiac::Dragon);

        assert!(matches!(
            "Ophiuchus".parse::<WesternZodiac>(),
            Err(ParseError::UnknownSign(name)) if name == "Ophiuchus"
        ));
        assert!(matches!(
            "Cat".parse::<ChineseZodiac>(),
            Err(ParseError::UnknownSign(_))
        ));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            WesternZodiac::Aries.description(),
            "Aries are known for their courage and determination."
        );
        assert_eq!(ChineseZodiac::Ox.description(), "Oxen are diligent and reliable.");

        assert_eq!(
            describe_western("capricorn"),
            Some("Capricorns are disciplined and responsible.")
        );
        assert_eq!(describe_chinese("PIG"), Some("Pigs are diligent and compassionate."));
        assert_eq!(describe_western("unknown"), None);
        assert_eq!(describe_chinese(""), None);
    }

    #[test]
    fn test_every_sign_has_distinct_description() {
        let western: std::collections::HashSet<_> =
            WesternZodiac::ALL.iter().map(|sign| sign.description()).collect();
        let chinese: std::collections::HashSet<_> =
            ChineseZodiac::ALL.iter().map(|sign| sign.description()).collect();
        assert_eq!(western.len(), SIGNS_PER_ZODIAC);
        assert_eq!(chinese.len(), SIGNS_PER_ZODIAC);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&WesternZodiac::Virgo).unwrap();
        assert_eq!(json, r#""Virgo""#);
        let parsed: ChineseZodiac = serde_json::from_str(r#""Horse""#).unwrap();
        assert_eq!(parsed, ChineseZodiac::Horse);
    }
}
