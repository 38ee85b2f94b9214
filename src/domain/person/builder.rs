//! Staged builder for registering a person
//!
//! A person must be created with [`RegistrationBuilder::with_identity`] before
//! an address can be attached with [`RegistrationBuilder::attach_address`].
//! A builder belongs to a single registration flow and is not meant to be
//! shared between threads.

use chrono::NaiveDate;

use super::address::Address;
use super::entity::Person;
use super::validation::RegistrationError;

/// Observable state of a [`RegistrationBuilder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// No person has been created yet
    Empty,
    /// A person is in flight and can receive an address
    PersonCreated,
}

/// Two-step builder for [`Person`]
#[derive(Debug, Clone, Default)]
pub struct RegistrationBuilder {
    /// `None` while [`BuilderState::Empty`]
    person: Option<Person>,
}

impl RegistrationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BuilderState {
        match self.person {
            None => BuilderState::Empty,
            Some(_) => BuilderState::PersonCreated,
        }
    }

    /// The in-flight person, if any
    pub fn person(&self) -> Option<&Person> {
        self.person.as_ref()
    }

    /// Create the person, replacing any person already in flight
    ///
    /// On error the builder keeps its previous state.
    pub fn with_identity(
        &mut self,
        name: impl Into<String>,
        national_id: impl Into<String>,
        birth_date: NaiveDate,
        email: impl Into<String>,
    ) -> Result<&Person, RegistrationError> {
        let person = Person::new(national_id, name, birth_date, email)?;
        Ok(self.person.insert(person))
    }

    /// Attach an address to the person created by [`Self::with_identity`]
    pub fn attach_address(
        &mut self,
        postal_code: impl Into<String>,
        number: Option<i32>,
        complement: Option<String>,
    ) -> Result<&Person, RegistrationError> {
        let person = self
            .person
            .as_mut()
            .ok_or(RegistrationError::IllegalSequence)?;

        let address = Address::new(postal_code, number, complement)?;
        person.set_address(Some(address));

        Ok(person)
    }

    /// Consume the builder and hand out the person
    pub fn finish(self) -> Result<Person, RegistrationError> {
        self.person.ok_or(RegistrationError::IllegalSequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::person::Field;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_new_builder_is_empty() {
        let builder = RegistrationBuilder::new();
        assert_eq!(builder.state(), BuilderState::Empty);
        assert!(builder.person().is_none());
    }

    #[test]
    fn test_with_identity_creates_person() {
        let mut builder = RegistrationBuilder::new();

        let person = builder
            .with_identity(
                "João Silva",
                "123.456.789-00",
                date(1990, 1, 1),
                "joao.silva@example.com",
            )
            .unwrap();

        assert_eq!(person.name(), "João Silva");
        assert_eq!(person.national_id(), "123.456.789-00");
        assert_eq!(person.birth_date(), date(1990, 1, 1));
        assert_eq!(person.email(), "joao.silva@example.com");
        assert!(person.address().is_none());
        assert_eq!(builder.state(), BuilderState::PersonCreated);
    }

    #[test]
    fn test_with_identity_invalid_national_id_keeps_builder_empty() {
        let mut builder = RegistrationBuilder::new();

        let result = builder.with_identity(
            "Maria Souza",
            "12345678900",
            date(1985, 5, 20),
            "maria.souza@example.com",
        );
        assert_eq!(
            result.cloned(),
            Err(RegistrationError::InvalidFormat(Field::NationalId))
        );
        assert_eq!(builder.state(), BuilderState::Empty);

        let result = builder.attach_address("12345-678", Some(100), None);
        assert_eq!(result.cloned(), Err(RegistrationError::IllegalSequence));
    }

    #[test]
    fn test_with_identity_invalid_email() {
        let mut builder = RegistrationBuilder::new();

        let result = builder.with_identity(
            "Carlos Pereira",
            "987.654.321-00",
            date(1975, 12, 15),
            "carlos.pereira",
        );
        assert_eq!(
            result.cloned(),
            Err(RegistrationError::InvalidFormat(Field::Email))
        );
    }

    #[test]
    fn test_attach_address_without_person() {
        let mut builder = RegistrationBuilder::new();

        let result = builder.attach_address("12345-678", Some(100), Some("Apto 101".to_string()));
        assert_eq!(result.cloned(), Err(RegistrationError::IllegalSequence));
        assert_eq!(builder.state(), BuilderState::Empty);
    }

    #[test]
    fn test_attach_address_to_created_person() {
        let mut builder = RegistrationBuilder::new();
        builder
            .with_identity(
                "Ana Clara",
                "111.222.333-44",
                date(1995, 7, 30),
                "ana.clara@example.com",
            )
            .unwrap();

        let person = builder
            .attach_address("54321-987", Some(50), Some("Casa Verde".to_string()))
            .unwrap();

        let address = person.address().unwrap();
        assert_eq!(address.postal_code(), "54321-987");
        assert_eq!(address.number(), 50);
        assert_eq!(address.complement(), Some("Casa Verde"));
        assert_eq!(person.name(), "Ana Clara");
    }

    #[test]
    fn test_attach_address_invalid_postal_code_leaves_person_untouched() {
        let mut builder = RegistrationBuilder::new();
        builder
            .with_identity(
                "Pedro Henrique",
                "555.666.777-88",
                date(1988, 3, 10),
                "pedro.henrique@example.com",
            )
            .unwrap();

        let result = builder.attach_address("12345678", Some(200), Some("Sala 10".to_string()));
        assert_eq!(
            result.cloned(),
            Err(RegistrationError::InvalidFormat(Field::PostalCode))
        );
        assert_eq!(builder.state(), BuilderState::PersonCreated);
        assert!(builder.person().unwrap().address().is_none());
    }

    #[test]
    fn test_attach_address_missing_number() {
        let mut builder = RegistrationBuilder::new();
        builder
            .with_identity(
                "Laura Martins",
                "999.888.777-66",
                date(1992, 11, 25),
                "laura.martins@example.com",
            )
            .unwrap();

        let result = builder.attach_address("67890-123", None, Some("Casa Azul".to_string()));
        assert_eq!(
            result.cloned(),
            Err(RegistrationError::RequiredFieldMissing(Field::Number))
        );
    }

    #[test]
    fn test_with_identity_overwrites_previous_person() {
        let mut builder = RegistrationBuilder::new();
        builder
            .with_identity("First", "111.111.111-11", date(1980, 1, 1), "first@example.com")
            .unwrap();
        builder.attach_address("11111-111", Some(1), None).unwrap();

        builder
            .with_identity("Second", "222.222.222-22", date(1981, 2, 2), "second@example.com")
            .unwrap();

        let person = builder.person().unwrap();
        assert_eq!(person.name(), "Second");
        assert!(person.address().is_none());
    }

    #[test]
    fn test_failed_with_identity_keeps_previous_person() {
        let mut builder = RegistrationBuilder::new();
        builder
            .with_identity("First", "111.111.111-11", date(1980, 1, 1), "first@example.com")
            .unwrap();

        assert!(builder
            .with_identity("Second", "bad", date(1981, 2, 2), "second@example.com")
            .is_err());

        assert_eq!(builder.state(), BuilderState::PersonCreated);
        assert_eq!(builder.person().unwrap().name(), "First");
    }

    #[test]
    fn test_attach_address_twice_replaces_address() {
        let mut builder = RegistrationBuilder::new();
        builder
            .with_identity(
                "Ana Clara",
                "111.222.333-44",
                date(1995, 7, 30),
                "ana.clara@example.com",
            )
            .unwrap();

        builder.attach_address("11111-111", Some(1), None).unwrap();
        let person = builder.attach_address("22222-222", Some(2), None).unwrap();

        assert_eq!(person.address().unwrap().postal_code(), "22222-222");
    }

    #[test]
    fn test_finish() {
        assert_eq!(
            RegistrationBuilder::new().finish(),
            Err(RegistrationError::IllegalSequence)
        );

        let mut builder = RegistrationBuilder::new();
        builder
            .with_identity(
                "Ana Clara",
                "111.222.333-44",
                date(1995, 7, 30),
                "ana.clara@example.com",
            )
            .unwrap();
        builder.attach_address("54321-987", Some(50), None).unwrap();

        let person = builder.finish().unwrap();
        assert_eq!(person.address().unwrap().number(), 50);
    }
}
