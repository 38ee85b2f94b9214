//! Person repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Person, PersonId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Error returned when a national ID number is already registered
pub fn national_id_conflict(national_id: &str) -> DomainError {
    DomainError::conflict(format!("National ID '{}' already registered", national_id))
}

/// Persistence seam for registered persons
///
/// Implementations own identifier generation: a person saved without an id
/// receives one through [`Person::set_id`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync + Debug {
    /// Insert a new person or replace an already stored one
    async fn save(&self, person: Person) -> Result<Person, DomainError>;

    /// Get a person by their ID
    async fn get(&self, id: PersonId) -> Result<Option<Person>, DomainError>;

    /// Get a person by their national ID number
    async fn find_by_national_id(&self, national_id: &str) -> Result<Option<Person>, DomainError>;

    /// List all persons ordered by ID
    async fn list(&self) -> Result<Vec<Person>, DomainError>;

    /// Delete a person
    async fn delete(&self, id: PersonId) -> Result<bool, DomainError>;

    /// Check if a national ID is already registered
    async fn national_id_exists(&self, national_id: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_national_id(national_id).await?.is_some())
    }
}
