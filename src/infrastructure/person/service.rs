//! Registration service driving the staged builder and the repository

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::domain::person::{
    national_id_conflict, Person, PersonId, PersonRepository, RegistrationBuilder,
};
use crate::domain::DomainError;

/// Request for registering a new person
#[derive(Debug, Clone)]
pub struct RegisterPersonRequest {
    pub name: String,
    pub national_id: String,
    pub birth_date: NaiveDate,
    pub email: String,
    pub address: Option<AddressRequest>,
}

/// Address part of a registration request
#[derive(Debug, Clone)]
pub struct AddressRequest {
    pub postal_code: String,
    pub number: Option<i32>,
    pub complement: Option<String>,
}

/// Registration service
#[derive(Debug)]
pub struct RegistrationService<R: PersonRepository> {
    repository: Arc<R>,
    revalidate_on_save: bool,
}

impl<R: PersonRepository> RegistrationService<R> {
    /// Create a new registration service
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            revalidate_on_save: true,
        }
    }

    /// Toggle re-running the format checks before persisting
    pub fn with_revalidation(mut self, revalidate_on_save: bool) -> Self {
        self.revalidate_on_save = revalidate_on_save;
        self
    }

    /// Register a new person
    pub async fn register(&self, request: RegisterPersonRequest) -> Result<Person, DomainError> {
        let mut builder = RegistrationBuilder::new();

        builder
            .with_identity(
                request.name,
                request.national_id,
                request.birth_date,
                request.email,
            )
            .inspect_err(|e| warn!("Rejected registration identity: {}", e))?;

        if let Some(address) = request.address {
            builder
                .attach_address(address.postal_code, address.number, address.complement)
                .inspect_err(|e| warn!("Rejected registration address: {}", e))?;
        }

        let person = builder.finish()?;

        if self
            .repository
            .national_id_exists(person.national_id())
            .await?
        {
            return Err(national_id_conflict(person.national_id()));
        }

        let person = self.store(person).await?;
        info!(
            person_id = ?person.id(),
            has_address = person.has_address(),
            "Person registered"
        );

        Ok(person)
    }

    /// Persist a person, possibly mutated through its unchecked setters
    pub async fn store(&self, person: Person) -> Result<Person, DomainError> {
        if self.revalidate_on_save {
            person.validate().inspect_err(|e| {
                warn!(person_id = ?person.id(), "Refusing to store person: {}", e)
            })?;
        }

        self.repository.save(person).await
    }

    /// Get a person by ID
    pub async fn get(&self, id: PersonId) -> Result<Option<Person>, DomainError> {
        self.repository.get(id).await
    }

    /// Get a person by national ID number
    pub async fn find_by_national_id(
        &self,
        national_id: &str,
    ) -> Result<Option<Person>, DomainError> {
        self.repository.find_by_national_id(national_id).await
    }
}
