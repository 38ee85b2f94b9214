//! Person infrastructure module
//!
//! This module provides the in-memory person repository and the
//! registration service that drives the staged builder.

mod repository;
mod service;

pub use repository::InMemoryPersonRepository;
pub use service::{AddressRequest, RegisterPersonRequest, RegistrationService};
