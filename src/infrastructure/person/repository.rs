//! In-memory person repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::person::{national_id_conflict, Person, PersonId, PersonRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Store {
    persons: HashMap<PersonId, Person>,
    /// Index for national ID -> person ID lookup
    national_id_index: HashMap<String, PersonId>,
    next_id: u64,
}

impl Store {
    fn allocate_id(&mut self) -> PersonId {
        self.next_id += 1;
        PersonId::new(self.next_id)
    }
}

/// In-memory implementation of PersonRepository
///
/// Identifiers are assigned sequentially starting at 1.
#[derive(Debug, Clone)]
pub struct InMemoryPersonRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryPersonRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::default())),
        }
    }
}

impl Default for InMemoryPersonRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn save(&self, mut person: Person) -> Result<Person, DomainError> {
        let mut store = self.store.write().await;
        let national_id = person.national_id().to_string();

        let Some(id) = person.id() else {
            if store.national_id_index.contains_key(&national_id) {
                return Err(national_id_conflict(&national_id));
            }

            let id = store.allocate_id();
            person.set_id(id);
            store.national_id_index.insert(national_id, id);
            store.persons.insert(id, person.clone());
            debug!(person_id = %id, "Stored new person");

            return Ok(person);
        };

        let old_national_id = match store.persons.get(&id) {
            Some(existing) => existing.national_id().to_string(),
            None => return Err(DomainError::not_found(format!("Person '{}' not found", id))),
        };

        // If the national ID changed, check uniqueness and update index
        if old_national_id != national_id {
            if store.national_id_index.contains_key(&national_id) {
                return Err(national_id_conflict(&national_id));
            }

            store.national_id_index.remove(&old_national_id);
            store.national_id_index.insert(national_id, id);
        }

        store.persons.insert(id, person.clone());
        debug!(person_id = %id, "Replaced stored person");

        Ok(person)
    }

    async fn get(&self, id: PersonId) -> Result<Option<Person>, DomainError> {
        let store = self.store.read().await;
        Ok(store.persons.get(&id).cloned())
    }

    async fn find_by_national_id(&self, national_id: &str) -> Result<Option<Person>, DomainError> {
        let store = self.store.read().await;

        Ok(store
            .national_id_index
            .get(national_id)
            .and_then(|id| store.persons.get(id))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Person>, DomainError> {
        let store = self.store.read().await;
        let mut persons: Vec<Person> = store.persons.values().cloned().collect();
        persons.sort_by_key(|p| p.id());
        Ok(persons)
    }

    async fn delete(&self, id: PersonId) -> Result<bool, DomainError> {
        let mut store = self.store.write().await;

        if let Some(person) = store.persons.remove(&id) {
            store.national_id_index.remove(person.national_id());
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
