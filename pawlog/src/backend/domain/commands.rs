//! Domain-level command types.
//! These carry already-confirmed input from the presentation layer into the
//! stores. Validation lives here so the stores can stay permissive.

pub mod pets {
    use chrono::NaiveDate;

    use crate::backend::domain::models::PetRecord;

    pub const MAX_PET_NAME_LENGTH: usize = 100;

    #[derive(Debug, Clone, PartialEq, thiserror::Error)]
    pub enum PetValidationError {
        #[error("Pet name cannot be empty")]
        EmptyName,
        #[error("Pet name cannot exceed 100 characters")]
        NameTooLong,
        #[error("Birthdate {0} is in the future")]
        BirthdateInFuture(NaiveDate),
    }

    /// Raw input from the add/edit pet form
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct PetDraft {
        pub name: String,
        pub breed: Option<String>,
        pub birthdate: Option<NaiveDate>,
    }

    impl PetDraft {
        /// Prefill a draft from an existing pet for editing
        pub fn from_pet(pet: &PetRecord) -> Self {
            Self {
                name: pet.name.clone(),
                breed: pet.breed.clone(),
                birthdate: pet.birthdate,
            }
        }

        /// Build a brand-new pet from this draft
        pub fn into_new_pet(self, today: NaiveDate) -> Result<PetRecord, PetValidationError> {
            let (name, breed, birthdate) = self.validate(today)?;
            Ok(PetRecord::new(name, breed, birthdate))
        }

        /// Build the replacement for `existing`, keeping its id
        pub fn apply_to(
            self,
            existing: &PetRecord,
            today: NaiveDate,
        ) -> Result<PetRecord, PetValidationError> {
            let (name, breed, birthdate) = self.validate(today)?;
            Ok(PetRecord {
                id: existing.id,
                name,
                breed,
                birthdate,
            })
        }

        /// Trim text fields and check the form rules
        pub fn validate(
            self,
            today: NaiveDate,
        ) -> Result<(String, Option<String>, Option<NaiveDate>), PetValidationError> {
            let name = self.name.trim().to_string();
            if name.is_empty() {
                return Err(PetValidationError::EmptyName);
            }
            if name.chars().count() > MAX_PET_NAME_LENGTH {
                return Err(PetValidationError::NameTooLong);
            }

            let breed = self
                .breed
                .map(|b| b.trim().to_string())
                .filter(|b| !b.is_empty());

            if let Some(birthdate) = self.birthdate {
                if birthdate > today {
                    return Err(PetValidationError::BirthdateInFuture(birthdate));
                }
            }

            Ok((name, breed, self.birthdate))
        }
    }
}

pub mod events {
    use chrono::{DateTime, Utc};

    use crate::backend::domain::models::EventType;

    /// Event kinds confirmed together with an explicit time from the time picker
    #[derive(Debug, Clone, PartialEq)]
    pub struct LogRequest {
        pub types: Vec<EventType>,
        pub timestamp: DateTime<Utc>,
    }

    impl LogRequest {
        pub fn single(event_type: EventType, timestamp: DateTime<Utc>) -> Self {
            Self {
                types: vec![event_type],
                timestamp,
            }
        }

        pub fn batch(types: impl IntoIterator<Item = EventType>, timestamp: DateTime<Utc>) -> Self {
            Self {
                types: types.into_iter().collect(),
                timestamp,
            }
        }
    }
}
