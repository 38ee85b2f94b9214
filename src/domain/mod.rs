//! Domain layer - Core registration logic and entities

pub mod error;
pub mod person;

pub use error::DomainError;
pub use person::{
    Address, BuilderState, Field, Person, PersonId, PersonRepository, RegistrationBuilder,
    RegistrationError,
};
