//! Person and address validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// National ID layout: `DDD.DDD.DDD-DD`
static NATIONAL_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$").unwrap());

/// Word characters are ASCII only, matching `[A-Za-z0-9_]`
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[A-Za-z]{2,6}$").unwrap()
});

/// Postal code layout: `DDDDD-DDD`
static POSTAL_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}-[0-9]{3}$").unwrap());

/// Fields subject to registration checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    NationalId,
    Email,
    PostalCode,
    Number,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NationalId => "national-id",
            Self::Email => "email",
            Self::PostalCode => "postal-code",
            Self::Number => "number",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors raised while constructing a person, an address or running the builder
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistrationError {
    #[error("Invalid format for field '{0}'")]
    InvalidFormat(Field),

    #[error("Required field '{0}' is missing")]
    RequiredFieldMissing(Field),

    #[error("Person has not been created; call with_identity first")]
    IllegalSequence,
}

pub fn is_valid_national_id(national_id: &str) -> bool {
    NATIONAL_ID_PATTERN.is_match(national_id)
}

pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_postal_code(postal_code: &str) -> bool {
    POSTAL_CODE_PATTERN.is_match(postal_code)
}

/// Validate a national ID number
///
/// Only the digit/punctuation layout is checked, never the check digits.
pub fn validate_national_id(national_id: &str) -> Result<(), RegistrationError> {
    if is_valid_national_id(national_id) {
        Ok(())
    } else {
        Err(RegistrationError::InvalidFormat(Field::NationalId))
    }
}

/// Validate an email address
pub fn validate_email(email: &str) -> Result<(), RegistrationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(RegistrationError::InvalidFormat(Field::Email))
    }
}

/// Validate a postal code
pub fn validate_postal_code(postal_code: &str) -> Result<(), RegistrationError> {
    if is_valid_postal_code(postal_code) {
        Ok(())
    } else {
        Err(RegistrationError::InvalidFormat(Field::PostalCode))
    }
}
