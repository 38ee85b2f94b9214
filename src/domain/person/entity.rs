//! Person entity and related types

use chrono::NaiveDate;
use serde::Serialize;

use super::address::Address;
use super::validation::{validate_email, validate_national_id, RegistrationError};

/// Identifier assigned by a persistence collaborator after storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PersonId(u64);

impl PersonId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PersonId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registrant entity
///
/// The national ID and email are format-checked by [`Person::new`]. The
/// setters store whatever they are given; call [`Person::validate`] after
/// mutating to re-check the two validated fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Absent until a repository stores the person
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<PersonId>,
    national_id: String,
    name: String,
    birth_date: NaiveDate,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
}

impl Person {
    /// Create a new person
    ///
    /// The national ID is checked before the email; the first failure is returned.
    pub fn new(
        national_id: impl Into<String>,
        name: impl Into<String>,
        birth_date: NaiveDate,
        email: impl Into<String>,
    ) -> Result<Self, RegistrationError> {
        let national_id = national_id.into();
        let email = email.into();

        validate_national_id(&national_id)?;
        validate_email(&email)?;

        Ok(Self {
            id: None,
            national_id,
            name: name.into(),
            birth_date,
            email,
            address: None,
        })
    }

    /// Re-run the constructor checks against the current field values
    pub fn validate(&self) -> Result<(), RegistrationError> {
        validate_national_id(&self.national_id)?;
        validate_email(&self.email)
    }

    // Getters

    pub fn id(&self) -> Option<PersonId> {
        self.id
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn has_address(&self) -> bool {
        self.address.is_some()
    }

    // Mutators

    pub fn set_id(&mut self, id: PersonId) {
        self.id = Some(id);
    }

    /// Update the national ID without re-validating it
    pub fn set_national_id(&mut self, national_id: impl Into<String>) {
        self.national_id = national_id.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_birth_date(&mut self, birth_date: NaiveDate) {
        self.birth_date = birth_date;
    }

    /// Update the email without re-validating it
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_address(&mut self, address: Option<Address>) {
        self.address = address;
    }
}
