//! A user record whose derived facts follow its birth date.
//!
//! [`UserProfile`] caches a [`DateFacts`] for its birth date and recomputes it
//! whenever the birth date or the reference date changes. Observers
//! subscribed with [`UserProfile::subscribe`] hear about every field whose
//! value actually changed.

use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::prelude::*;
use crate::{AgeBreakdown, BirthDate, ChineseZodiac, DateFacts, WesternZodiac};

/// A profile value that observers can be told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ProfileField {
    FirstName,
    LastName,
    EmailAddress,
    BirthDate,
    ReferenceDate,
    Age,
    IsBirthdayToday,
    WesternZodiac,
    ChineseZodiac,
    FormattedAge,
}

/// Receives change notifications from a [`UserProfile`].
///
/// Any `FnMut(ProfileField)` closure is an observer.
pub trait ProfileObserver {
    fn on_change(&mut self, field: ProfileField);
}

impl<F> ProfileObserver for F
where
    F: FnMut(ProfileField),
{
    fn on_change(&mut self, field: ProfileField) {
        self(field);
    }
}

/// Handle returned by [`UserProfile::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct UserProfile {
    first_name:        String,
    last_name:         String,
    email:             String,
    birth_date:        BirthDate,
    /// `None` means the current local date at each recomputation
    reference_date:    Option<NaiveDate>,
    facts:             DateFacts,
    observers:         Vec<(SubscriptionId, Box<dyn ProfileObserver>)>,
    next_subscription: u64,
}

impl UserProfile {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        birth_date: BirthDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            birth_date,
            reference_date: None,
            facts: DateFacts::as_of_today(birth_date),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub const fn birth_date(&self) -> BirthDate {
        self.birth_date
    }

    pub const fn reference_date(&self) -> Option<NaiveDate> {
        self.reference_date
    }

    pub const fn facts(&self) -> &DateFacts {
        &self.facts
    }

    /// Age in completed years; negative for a birth date in the future
    pub const fn age(&self) -> i32 {
        self.facts.age.years
    }

    pub const fn formatted_age(&self) -> AgeBreakdown {
        self.facts.age.breakdown()
    }

    pub const fn is_adult(&self) -> bool {
        self.facts.is_adult()
    }

    pub const fn is_birthday_today(&self) -> bool {
        self.facts.age.is_birthday_today
    }

    pub const fn western_zodiac(&self) -> WesternZodiac {
        self.facts.western
    }

    pub const fn chinese_zodiac(&self) -> ChineseZodiac {
        self.facts.chinese
    }

    /// Name of the western (sun) sign
    pub const fn sun_sign(&self) -> &'static str {
        self.facts.western.name()
    }

    pub const fn chinese_sign(&self) -> &'static str {
        self.facts.chinese.name()
    }

    /// Western then Chinese sign description, separated by a space
    pub fn zodiac_info(&self) -> String {
        format!(
            "{} {}",
            self.facts.western.description(),
            self.facts.chinese.description()
        )
    }

    /// First and last name joined by a space, skipping blank parts
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) -> bool {
        let changed = replace_if_changed(&mut self.first_name, value.into());
        if changed {
            self.notify(ProfileField::FirstName);
        }
        changed
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> bool {
        let changed = replace_if_changed(&mut self.last_name, value.into());
        if changed {
            self.notify(ProfileField::LastName);
        }
        changed
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> bool {
        let changed = replace_if_changed(&mut self.email, value.into());
        if changed {
            self.notify(ProfileField::EmailAddress);
        }
        changed
    }

    /// Replaces the birth date and recomputes every derived fact.
    ///
    /// Returns `false`, without notifying anyone, if the date is unchanged.
    pub fn set_birth_date(&mut self, birth_date: BirthDate) -> bool {
        if self.birth_date == birth_date {
            return false;
        }
        self.birth_date = birth_date;
        self.notify(ProfileField::BirthDate);
        self.recompute();
        true
    }

    /// Pins "today" to `reference_date`, or follows the local date when `None`.
    pub fn set_reference_date(&mut self, reference_date: Option<NaiveDate>) -> bool {
        if self.reference_date == reference_date {
            return false;
        }
        self.reference_date = reference_date;
        self.notify(ProfileField::ReferenceDate);
        self.recompute();
        true
    }

    /// Recomputes the facts against the current reference date, which moves
    /// with the clock when no fixed reference date is set.
    ///
    /// Returns whether any fact changed.
    pub fn refresh(&mut self) -> bool {
        self.recompute()
    }

    pub fn subscribe(&mut self, observer: impl ProfileObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(subscribed, _)| *subscribed != id);
        self.observers.len() != before
    }

    /// One `Label: value` line per field, as shown to the user after submitting.
    pub fn summary(&self) -> String {
        format!(
            "First Name: {}\nLast Name: {}\nEmail Address: {}\nBirth Date: {}\nAge: {}\nIs Adult: {}\nSun Sign: {}\nChinese Sign: {}",
            self.first_name,
            self.last_name,
            self.email,
            self.birth_date,
            self.formatted_age(),
            self.is_adult(),
            self.sun_sign(),
            self.chinese_sign(),
        )
    }

    /// Greeting for the birthday, or `None` on any other day.
    pub fn birthday_message(&self) -> Option<String> {
        self.is_birthday_today()
            .then(|| format!("Happy Birthday, {}!", self.full_name()))
    }

    fn notify(&mut self, field: ProfileField) {
        for (_, observer) in &mut self.observers {
            observer.on_change(field);
        }
    }

    fn recompute(&mut self) -> bool {
        let today = self
            .reference_date
            .unwrap_or_else(|| BirthDate::today().date());
        let previous = self.facts;
        self.facts = DateFacts::compute(self.birth_date, today);
        debug!(
            birth_date = %self.birth_date,
            %today,
            age = self.facts.age.years,
            "recomputed date facts"
        );

        if previous.age.years != self.facts.age.years {
            self.notify(ProfileField::Age);
        }
        if previous.age.is_birthday_today != self.facts.age.is_birthday_today {
            self.notify(ProfileField::IsBirthdayToday);
        }
        if previous.western != self.facts.western {
            self.notify(ProfileField::WesternZodiac);
        }
        if previous.chinese != self.facts.chinese {
            self.notify(ProfileField::ChineseZodiac);
        }
        self.notify(ProfileField::FormattedAge);

        previous != self.facts
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new("", "", "", BirthDate::today())
    }
}

impl fmt::Debug for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserProfile")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("birth_date", &self.birth_date)
            .field("reference_date", &self.reference_date)
            .field("facts", &self.facts)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

fn replace_if_changed(slot: &mut String, value: String) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
