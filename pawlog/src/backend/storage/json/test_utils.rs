//! Test utilities for storage-backed tests
//!
//! `TestEnvironment` keeps a temporary data directory alive for the duration of a
//! test and removes it on drop, even if the test panics. The in-memory storages
//! stand in for the JSON files when a test needs to count or fail writes.

use anyhow::Result;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use super::connection::JsonConnection;
use crate::backend::domain::models::{EventRecord, PetRecord, Preferences};
use crate::backend::storage::traits::{EventStorage, PetStorage, PreferenceStorage};

pub struct TestEnvironment {
    pub connection: JsonConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

/// Shared write bookkeeping for the in-memory storages
#[derive(Clone, Default)]
pub struct WriteLog {
    writes: Arc<AtomicUsize>,
    fail: Arc<AtomicBool>,
}

impl WriteLog {
    pub fn count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make every following write return an error
    pub fn fail_writes(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    fn record(&self) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("disk full");
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemoryEventStorage {
    events: Arc<Mutex<Vec<EventRecord>>>,
    pub log: WriteLog,
}

impl MemoryEventStorage {
    pub fn with_events(events: Vec<EventRecord>) -> Self {
        let storage = Self::default();
        *storage.events.lock().unwrap() = events;
        storage
    }

    pub fn stored(&self) -> Vec<EventRecord> {
        self.events.lock().unwrap().clone()
    }
}

impl EventStorage for MemoryEventStorage {
    fn load_events(&self) -> Result<Vec<EventRecord>> {
        Ok(self.stored())
    }

    fn save_events(&self, events: &[EventRecord]) -> Result<()> {
        self.log.record()?;
        *self.events.lock().unwrap() = events.to_vec();
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemoryPetStorage {
    pets: Arc<Mutex<Vec<PetRecord>>>,
    pub log: WriteLog,
}

impl MemoryPetStorage {
    pub fn with_pets(pets: Vec<PetRecord>) -> Self {
        let storage = Self::default();
        *storage.pets.lock().unwrap() = pets;
        storage
    }

    pub fn stored(&self) -> Vec<PetRecord> {
        self.pets.lock().unwrap().clone()
    }
}

impl PetStorage for MemoryPetStorage {
    fn load_pets(&self) -> Result<Vec<PetRecord>> {
        Ok(self.stored())
    }

    fn save_pets(&self, pets: &[PetRecord]) -> Result<()> {
        self.log.record()?;
        *self.pets.lock().unwrap() = pets.to_vec();
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemoryPreferenceStorage {
    preferences: Arc<Mutex<Preferences>>,
    pub log: WriteLog,
}

impl MemoryPreferenceStorage {
    pub fn with_active_pet_id(raw: &str) -> Self {
        let storage = Self::default();
        storage.preferences.lock().unwrap().active_pet_id = Some(raw.to_string());
        storage
    }

    pub fn stored(&self) -> Preferences {
        self.preferences.lock().unwrap().clone()
    }
}

impl PreferenceStorage for MemoryPreferenceStorage {
    fn load_preferences(&self) -> Result<Preferences> {
        Ok(self.stored())
    }

    fn save_preferences(&self, preferences: &Preferences) -> Result<()> {
        self.log.record()?;
        *self.preferences.lock().unwrap() = preferences.clone();
        Ok(())
    }
}
