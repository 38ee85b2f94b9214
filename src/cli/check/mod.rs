//! Check command - validates the format of a single field value

use clap::{Args, ValueEnum};
use tracing::debug;

use crate::domain::person::{
    validate_email, validate_national_id, validate_postal_code, RegistrationError,
};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckedField {
    NationalId,
    Email,
    PostalCode,
}

/// Arguments for the check command
#[derive(Args, Clone, Debug)]
pub struct CheckArgs {
    /// Field whose format rules apply
    #[arg(value_enum)]
    pub field: CheckedField,

    /// Value to check
    pub value: String,
}

pub fn check(field: CheckedField, value: &str) -> Result<(), RegistrationError> {
    match field {
        CheckedField::NationalId => validate_national_id(value),
        CheckedField::Email => validate_email(value),
        CheckedField::PostalCode => validate_postal_code(value),
    }
}

/// Run the check command
pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    super::bootstrap();

    debug!(field = ?args.field, "Checking value");
    check(args.field, &args.value)?;
    println!("ok");

    Ok(())
}
