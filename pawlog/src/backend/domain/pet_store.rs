//! # Pet Store
//!
//! Owns the pet list (insertion order is display order) and the active pet
//! selection. The list is written to `PetStorage` after every mutation; the
//! selection goes to the separate preferences slot so it survives restarts
//! independently of the list.
//!
//! Like the event store, nothing here fails the caller: load failures start
//! empty and write failures are logged and otherwise ignored.

use log::{debug, info, warn};
use uuid::Uuid;

use crate::backend::domain::listeners::{ListenerId, Listeners};
use crate::backend::domain::models::{AvatarColor, PetRecord};
use crate::backend::storage::traits::{PetStorage, PreferenceStorage};

pub struct PetStore {
    pets: Vec<PetRecord>,
    /// Selected pet as stored. May be stale; `active_pet` resolves it.
    active_pet_id: Option<Uuid>,
    storage: Box<dyn PetStorage>,
    preferences: Box<dyn PreferenceStorage>,
    listeners: Listeners<PetStore>,
}

impl PetStore {
    /// Load pets from `storage` and the active selection from `preferences`
    pub fn open<S, P>(storage: S, preferences: P) -> Self
    where
        S: PetStorage + 'static,
        P: PreferenceStorage + 'static,
    {
        let pets = match storage.load_pets() {
            Ok(pets) => pets,
            Err(e) => {
                warn!("Could not load pets, starting with none: {:#}", e);
                Vec::new()
            }
        };

        let stored_id = match preferences.load_preferences() {
            Ok(prefs) => {
                let parsed = prefs.parsed_active_pet_id();
                if parsed.is_none() && prefs.active_pet_id.is_some() {
                    debug!("Ignoring unparsable active pet id {:?}", prefs.active_pet_id);
                }
                parsed
            }
            Err(e) => {
                warn!("Could not load preferences: {:#}", e);
                None
            }
        };
        let active_pet_id = stored_id.or_else(|| pets.first().map(|p| p.id));
        info!("Pet store opened with {} pets, active: {:?}", pets.len(), active_pet_id);

        Self {
            pets,
            active_pet_id,
            storage: Box::new(storage),
            preferences: Box::new(preferences),
            listeners: Listeners::default(),
        }
    }

    /// All pets in display order
    pub fn pets(&self) -> &[PetRecord] {
        &self.pets
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    pub fn get(&self, pet_id: Uuid) -> Option<&PetRecord> {
        self.pets.iter().find(|p| p.id == pet_id)
    }

    fn position(&self, pet_id: Uuid) -> Option<usize> {
        self.pets.iter().position(|p| p.id == pet_id)
    }

    /// The selected pet; falls back to the first pet when the selection is
    /// unset or no longer matches, and to none when there are no pets
    pub fn active_pet(&self) -> Option<&PetRecord> {
        self.active_pet_id
            .and_then(|id| self.get(id))
            .or_else(|| self.pets.first())
    }

    pub fn active_pet_id(&self) -> Option<Uuid> {
        self.active_pet().map(|p| p.id)
    }

    /// Avatar colour by list position. Deleting an earlier pet shifts the
    /// colours of the pets after it.
    pub fn color_for(&self, pet: &PetRecord) -> AvatarColor {
        self.position(pet.id)
            .map(AvatarColor::for_position)
            .unwrap_or_default()
    }

    // Write

    /// Append a pet. It becomes active if no pet is selected yet.
    pub fn add(&mut self, pet: PetRecord) {
        info!("Adding pet {} ({})", pet.name, pet.id);
        let pet_id = pet.id;
        self.pets.push(pet);

        if self.active_pet_id.is_none() {
            self.set_active_id(Some(pet_id));
        }

        self.save();
        self.publish();
    }

    /// Replace the pet with the same id in place. Returns false if unknown.
    pub fn update(&mut self, pet: PetRecord) -> bool {
        let Some(index) = self.position(pet.id) else {
            debug!("Update ignored, pet not found: {}", pet.id);
            return false;
        };

        info!("Updating pet {} ({})", pet.name, pet.id);
        self.pets[index] = pet;

        self.save();
        self.publish();
        true
    }

    /// Remove a pet. If it was selected, the new first pet (or none) becomes active.
    ///
    /// Events owned by the pet are not touched here; see `Backend::delete_pet`.
    pub fn delete(&mut self, pet_id: Uuid) -> bool {
        let Some(index) = self.position(pet_id) else {
            debug!("Delete ignored, pet not found: {}", pet_id);
            return false;
        };

        let removed = self.pets.remove(index);
        info!("Deleted pet {} ({})", removed.name, removed.id);

        if self.active_pet_id == Some(pet_id) {
            let next = self.pets.first().map(|p| p.id);
            self.set_active_id(next);
        }

        self.save();
        self.publish();
        true
    }

    /// Select a pet. Returns false, leaving the selection alone, if the id is unknown.
    pub fn set_active(&mut self, pet_id: Uuid) -> bool {
        if self.get(pet_id).is_none() {
            warn!("Cannot select unknown pet {}", pet_id);
            return false;
        }

        self.set_active_id(Some(pet_id));
        self.publish();
        true
    }

    fn set_active_id(&mut self, pet_id: Option<Uuid>) {
        self.active_pet_id = pet_id;
        match pet_id {
            Some(id) => info!("Active pet set to {}", id),
            None => info!("Cleared active pet"),
        }
        if let Err(e) = self.preferences.set_active_pet_id(pet_id) {
            warn!("Failed to save active pet selection: {:#}", e);
        }
    }

    // Change notification

    /// Register a callback that runs after every change with the updated store
    pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&PetStore) + 'static,
    {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn publish(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let mut listeners = std::mem::take(&mut self.listeners);
        listeners.notify(self);
        self.listeners = listeners;
    }

    fn save(&self) {
        if let Err(e) = self.storage.save_pets(&self.pets) {
            warn!("Failed to save {} pets, keeping them in memory: {:#}", self.pets.len(), e);
        }
    }
}
