//! # PawLog Backend
//!
//! Wires the two stores to the JSON files in one data directory. Everything
//! is synchronous and single-threaded: the stores hold their change listeners
//! as plain closures and are meant to live on the UI thread.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use log::info;
use shared::EventKind;
use uuid::Uuid;

pub mod domain;
pub mod mappers;
pub mod storage;

pub use storage::json::JsonConnection;

use domain::commands::events::LogRequest;
use domain::commands::pets::{PetDraft, PetValidationError};
use domain::models::EventRecord;
use domain::startup::{self, StartupReport};
use domain::{EventStore, PetStore};
use mappers::EventMapper;
use storage::json::{EventRepository, PetRepository, PreferencesRepository};

/// Main backend struct that owns both stores
pub struct Backend {
    pub connection: JsonConnection,
    pub pet_store: PetStore,
    pub event_store: EventStore,
    /// App toggles outside the active-pet slot
    pub preferences: PreferencesRepository,
}

impl Backend {
    /// Open both stores on the files under `connection`
    pub fn new(connection: JsonConnection) -> Self {
        info!("Opening PawLog data in {}", connection.base_directory().display());
        let pet_store = PetStore::open(
            PetRepository::new(connection.clone()),
            PreferencesRepository::new(connection.clone()),
        );
        let event_store = EventStore::open(EventRepository::new(connection.clone()));
        let preferences = PreferencesRepository::new(connection.clone());

        Self {
            connection,
            pet_store,
            event_store,
            preferences,
        }
    }

    /// Open the default data directory
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(JsonConnection::new_default()?))
    }

    /// Launch bootstrap: default pet, then orphan migration
    pub fn start(&mut self) -> StartupReport {
        let report = startup::run(&mut self.pet_store, &mut self.event_store);
        info!(
            "Startup complete: created default pet: {}, migrated events: {}",
            report.created_default_pet, report.migrated_events
        );
        report
    }

    /// Validate form input and add the pet. Returns the new pet's id.
    pub fn add_pet(
        &mut self,
        draft: PetDraft,
        today: NaiveDate,
    ) -> Result<Uuid, PetValidationError> {
        let pet = draft.into_new_pet(today)?;
        let pet_id = pet.id;
        self.pet_store.add(pet);
        Ok(pet_id)
    }

    /// Prefilled form input for editing an existing pet
    pub fn pet_draft(&self, pet_id: Uuid) -> Option<PetDraft> {
        self.pet_store.get(pet_id).map(PetDraft::from_pet)
    }

    /// Validate form input and replace the pet. Ok(false) if the pet is unknown.
    pub fn update_pet(
        &mut self,
        pet_id: Uuid,
        draft: PetDraft,
        today: NaiveDate,
    ) -> Result<bool, PetValidationError> {
        let Some(existing) = self.pet_store.get(pet_id) else {
            return Ok(false);
        };
        let updated = draft.apply_to(existing, today)?;
        Ok(self.pet_store.update(updated))
    }

    /// Delete a pet and every event it owns. Returns false if the pet is unknown.
    pub fn delete_pet(&mut self, pet_id: Uuid) -> bool {
        if !self.pet_store.delete(pet_id) {
            return false;
        }
        let removed = self.event_store.delete_all_for_pet(pet_id);
        info!("Deleted pet {} with {} events", pet_id, removed);
        true
    }

    /// Log a confirmed request against the active pet. Logs nothing without one.
    pub fn log_for_active_pet(&mut self, request: &LogRequest) -> Vec<EventRecord> {
        match self.pet_store.active_pet_id() {
            Some(pet_id) => self.event_store.log(request, pet_id),
            None => {
                info!("No active pet, ignoring log request");
                Vec::new()
            }
        }
    }

    /// Log the kinds picked in the presentation layer for the active pet
    pub fn log_kinds(&mut self, kinds: &[EventKind], timestamp: DateTime<Utc>) -> Vec<EventRecord> {
        let types = kinds.iter().copied().map(EventMapper::kind_from_dto);
        let request = LogRequest::batch(types, timestamp);
        self.log_for_active_pet(&request)
    }
}
