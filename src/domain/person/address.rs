//! Postal address value object

use serde::Serialize;

use super::validation::{validate_postal_code, Field, RegistrationError};

/// Postal address attached to at most one person
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    postal_code: String,
    number: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    complement: Option<String>,
}

impl Address {
    /// Create a new address
    ///
    /// The postal code is checked first, then the presence of the house number.
    pub fn new(
        postal_code: impl Into<String>,
        number: Option<i32>,
        complement: Option<String>,
    ) -> Result<Self, RegistrationError> {
        let postal_code = postal_code.into();
        validate_postal_code(&postal_code)?;
        let number = number.ok_or(RegistrationError::RequiredFieldMissing(Field::Number))?;

        Ok(Self {
            postal_code,
            number,
            complement,
        })
    }

    // Getters

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn complement(&self) -> Option<&str> {
        self.complement.as_deref()
    }

    // Mutators (not re-validated)

    pub fn set_postal_code(&mut self, postal_code: impl Into<String>) {
        self.postal_code = postal_code.into();
    }

    pub fn set_number(&mut self, number: i32) {
        self.number = number;
    }

    pub fn set_complement(&mut self, complement: Option<String>) {
        self.complement = complement;
    }
}
