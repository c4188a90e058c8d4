//! First-launch bootstrap, run on every start.
//!
//! Guarantees at least one pet exists and hands any events written before pets
//! existed to the active pet. Both steps are no-ops once done.

use log::info;

use crate::backend::domain::event_store::EventStore;
use crate::backend::domain::models::PetRecord;
use crate::backend::domain::pet_store::PetStore;

pub const DEFAULT_PET_NAME: &str = "My Pet";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupReport {
    pub created_default_pet: bool,
    pub migrated_events: usize,
}

pub fn run(pets: &mut PetStore, events: &mut EventStore) -> StartupReport {
    let mut report = StartupReport::default();

    if pets.is_empty() {
        info!("No pets found, creating default pet '{}'", DEFAULT_PET_NAME);
        pets.add(PetRecord::new(DEFAULT_PET_NAME, None, None));
        report.created_default_pet = true;
    }

    if let Some(pet_id) = pets.active_pet_id() {
        report.migrated_events = events.migrate_orphaned(pet_id);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::{EventRecord, EventType, UNASSIGNED_PET_ID};
    use crate::backend::storage::json::test_utils::{
        MemoryEventStorage, MemoryPetStorage, MemoryPreferenceStorage,
    };
    use chrono::Utc;

    #[test]
    fn test_fresh_install_creates_default_pet_and_adopts_legacy_events() {
        let legacy = vec![
            EventRecord::new(EventType::Pee, Utc::now(), UNASSIGNED_PET_ID),
            EventRecord::new(EventType::Walk, Utc::now(), UNASSIGNED_PET_ID),
        ];
        let event_storage = MemoryEventStorage::with_events(legacy);
        let mut pets = PetStore::open(MemoryPetStorage::default(), MemoryPreferenceStorage::default());
        let mut events = EventStore::open(event_storage.clone());

        let report = run(&mut pets, &mut events);

        assert!(report.created_default_pet);
        assert_eq!(report.migrated_events, 2);
        let pet = pets.active_pet().unwrap();
        assert_eq!(pet.name, DEFAULT_PET_NAME);
        assert_eq!(events.events_for_pet(pet.id).len(), 2);
    }

    #[test]
    fn test_second_run_changes_nothing() {
        let pet_storage = MemoryPetStorage::default();
        let event_storage = MemoryEventStorage::with_events(vec![EventRecord::new(
            EventType::Food,
            Utc::now(),
            UNASSIGNED_PET_ID,
        )]);
        let mut pets = PetStore::open(pet_storage.clone(), MemoryPreferenceStorage::default());
        let mut events = EventStore::open(event_storage.clone());
        run(&mut pets, &mut events);
        let pet_writes = pet_storage.log.count();
        let event_writes = event_storage.log.count();

        let report = run(&mut pets, &mut events);

        assert_eq!(report, StartupReport::default());
        assert_eq!(pets.len(), 1);
        assert_eq!(pet_storage.log.count(), pet_writes);
        assert_eq!(event_storage.log.count(), event_writes);
    }

    #[test]
    fn test_existing_pets_are_kept() {
        let existing = PetRecord::new("Biscuit", None, None);
        let mut pets = PetStore::open(
            MemoryPetStorage::with_pets(vec![existing.clone()]),
            MemoryPreferenceStorage::default(),
        );
        let mut events = EventStore::open(MemoryEventStorage::default());

        let report = run(&mut pets, &mut events);

        assert!(!report.created_default_pet);
        assert_eq!(pets.pets(), &[existing]);
    }
}
