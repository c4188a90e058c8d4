//! # Storage Traits
//!
//! Persistence seams for the in-memory stores. Each store loads its whole list once
//! and writes the whole list back after every mutation; these traits are the only
//! place the domain touches the filesystem.

use anyhow::Result;
use log::warn;
use uuid::Uuid;

use crate::backend::domain::models::{EventRecord, PetRecord, Preferences};

/// Whole-list persistence for logged events
pub trait EventStorage: Send + Sync {
    /// Load every stored event. A missing file is an empty list, not an error.
    fn load_events(&self) -> Result<Vec<EventRecord>>;

    /// Replace the stored list with `events`
    fn save_events(&self, events: &[EventRecord]) -> Result<()>;
}

/// Whole-list persistence for pet profiles
pub trait PetStorage: Send + Sync {
    /// Load every stored pet in display order. A missing file is an empty list.
    fn load_pets(&self) -> Result<Vec<PetRecord>>;

    /// Replace the stored list with `pets`
    fn save_pets(&self, pets: &[PetRecord]) -> Result<()>;
}

/// The key-value preferences slot
pub trait PreferenceStorage: Send + Sync {
    /// Load preferences, falling back to defaults when nothing is stored
    fn load_preferences(&self) -> Result<Preferences>;

    /// Replace the stored preferences
    fn save_preferences(&self, preferences: &Preferences) -> Result<()>;

    /// Store (or clear) the active pet id, leaving other preferences untouched.
    /// Unreadable preferences are replaced by defaults.
    fn set_active_pet_id(&self, pet_id: Option<Uuid>) -> Result<()> {
        let mut preferences = self.load_preferences().unwrap_or_else(|e| {
            warn!("Resetting unreadable preferences: {:#}", e);
            Preferences::default()
        });
        preferences.active_pet_id = pet_id.map(|id| id.to_string());
        self.save_preferences(&preferences)
    }
}
