//! Registrant
//!
//! Validated person registration with:
//! - Format checks for national ID numbers, emails and postal codes
//! - A staged builder that creates a person before attaching an address
//! - A repository seam that assigns identifiers after storage

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;
pub use domain::{
    Address, BuilderState, DomainError, Field, Person, PersonId, PersonRepository,
    RegistrationBuilder, RegistrationError,
};
