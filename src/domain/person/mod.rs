//! Person domain
//!
//! Registrant entities, their postal address, format validation and the
//! staged builder used to assemble them.

mod address;
mod builder;
mod entity;
mod repository;
mod validation;

pub use address::Address;
pub use builder::{BuilderState, RegistrationBuilder};
pub use entity::{Person, PersonId};
pub use repository::{national_id_conflict, PersonRepository};
pub use validation::{
    is_valid_email, is_valid_national_id, is_valid_postal_code, validate_email,
    validate_national_id, validate_postal_code, Field, RegistrationError,
};

#[cfg(test)]
pub use repository::MockPersonRepository;
