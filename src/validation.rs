//! Input checks that accompany a birth date: the age range and the email
//! address. The derived-fact computations never call into this module.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::UserProfile;
use crate::consts::{DISALLOWED_EMAIL_SUFFIX, EMAIL_PATTERN, MAX_AGE, MIN_AGE};

static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

/// Error type for user input validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Age outside the accepted range.
    #[error("Invalid age: {age} (must be {min}-{max})")]
    InvalidAge { age: i32, min: i32, max: i32 },

    /// Email address empty or only whitespace.
    #[error("Email address cannot be empty")]
    EmptyEmail,

    /// Email address not of the form `local@domain.tld`.
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    /// Email address ends with a rejected suffix.
    #[error("Email address should not end with '{suffix}'")]
    DisallowedDomain { suffix: String },
}

/// Tunable limits for [`ValidationError`] checks.
///
/// Deserializes from a partial document; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Youngest accepted age (inclusive)
    pub min_age:             i32,
    /// Oldest accepted age (inclusive)
    pub max_age:             i32,
    /// Email suffixes to reject, compared case-insensitively
    pub disallowed_suffixes: Vec<String>,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_age:             MIN_AGE,
            max_age:             MAX_AGE,
            disallowed_suffixes: vec![DISALLOWED_EMAIL_SUFFIX.to_owned()],
        }
    }
}

impl ValidationPolicy {
    /// # Errors
    /// Returns `ValidationError::InvalidAge` if `age` is outside `min_age..=max_age`.
    pub fn validate_age(&self, age: i32) -> Result<(), ValidationError> {
        if !(self.min_age..=self.max_age).contains(&age) {
            warn!(age, min = self.min_age, max = self.max_age, "age out of range");
            return Err(ValidationError::InvalidAge {
                age,
                min: self.min_age,
                max: self.max_age,
            });
        }
        Ok(())
    }

    /// Checks that `email` looks like `local@domain.tld`.
    ///
    /// The local part may hold ASCII letters, digits and `._%+-`; the domain
    /// letters, digits, `.` and `-`; the final label at least two letters.
    ///
    /// # Errors
    /// Returns `ValidationError::EmptyEmail` for blank input and
    /// `ValidationError::InvalidEmail` for anything else that does not match.
    pub fn validate_email(&self, email: &str) -> Result<(), ValidationError> {
        if email.trim().is_empty() {
            warn!("empty email address");
            return Err(ValidationError::EmptyEmail);
        }
        if !is_well_formed_email(email) {
            warn!(email, "malformed email address");
            return Err(ValidationError::InvalidEmail(email.to_owned()));
        }
        Ok(())
    }

    /// # Errors
    /// Returns `ValidationError::DisallowedDomain` naming the first matching suffix.
    pub fn check_email_domain(&self, email: &str) -> Result<(), ValidationError> {
        let email = email.to_ascii_lowercase();
        match self
            .disallowed_suffixes
            .iter()
            .find(|suffix| email.ends_with(&suffix.to_ascii_lowercase()))
        {
            Some(suffix) => {
                warn!(%suffix, "email domain rejected");
                Err(ValidationError::DisallowedDomain {
                    suffix: suffix.clone(),
                })
            },
            None => Ok(()),
        }
    }

    /// Runs the age, email format and email domain checks in that order.
    ///
    /// # Errors
    /// Returns the first failing check's error.
    pub fn validate_profile(&self, profile: &UserProfile) -> Result<(), ValidationError> {
        self.validate_age(profile.age())?;
        self.validate_email(profile.email())?;
        self.check_email_domain(profile.email())
    }
}

fn email_regex() -> Option<&'static Regex> {
    EMAIL_REGEX
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
}

fn is_well_formed_email(email: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(email))
}
